//! Common test helper functions shared across test modules.
//!
//! This module provides reusable fixtures for jobs, groups and change sets,
//! reducing code duplication across different test suites.
use std::collections::BTreeMap;

use crate::{
    dependency::{Dependency, DependencyChange},
    group::{DependencyGroup, GroupRules},
    job::{GROUPED_UPDATES_PROTOTYPE, Job},
    snapshot::DependencySnapshot,
};

/// Creates the `frontend-deps` group matching `react*`.
pub fn create_test_group() -> DependencyGroup {
    DependencyGroup::with_rules(
        "frontend-deps",
        GroupRules {
            patterns: vec!["react*".to_string()],
            ..GroupRules::default()
        },
    )
}

/// Creates a job refreshing the `frontend-deps` pull request that covers
/// `react` and `react-dom`.
///
/// # Example
/// ```ignore
/// let mut job = create_test_job();
/// job.security_updates_only = true;
/// ```
pub fn create_test_job() -> Job {
    Job {
        id: "1234".to_string(),
        security_updates_only: false,
        dependencies: vec!["react".to_string(), "react-dom".to_string()],
        dependency_group_to_refresh: Some("frontend-deps".to_string()),
        updating_a_pull_request: true,
        dependency_groups: vec![create_test_group()],
        experiments: BTreeMap::from([(
            GROUPED_UPDATES_PROTOTYPE.to_string(),
            true,
        )]),
    }
}

/// Creates a production npm dependency moving from `previous` to `version`.
pub fn create_test_dependency(
    name: &str,
    previous: &str,
    version: &str,
) -> Dependency {
    Dependency {
        name: name.to_string(),
        version: Some(version.to_string()),
        previous_version: Some(previous.to_string()),
        package_manager: "npm_and_yarn".to_string(),
        production: true,
    }
}

/// Creates a change set updating `react` and `react-dom` to 18.2.0.
pub fn create_test_change() -> DependencyChange {
    DependencyChange::new(
        vec![
            create_test_dependency("react", "17.0.2", "18.2.0"),
            create_test_dependency("react-dom", "17.0.2", "18.2.0"),
        ],
        Some(create_test_group()),
    )
}

/// Creates a snapshot of [`create_test_job`] at base sha `abc123`.
pub fn create_test_snapshot() -> DependencySnapshot {
    DependencySnapshot::create_from_job(&create_test_job(), "abc123")
}
