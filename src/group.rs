//! Dependency groups and the rules deciding which dependencies belong to
//! them.
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Result, dependency::Dependency};

/// Restricts a group to production or development dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    Production,
    Development,
}

/// Matching rules for a group as written in the update configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GroupRules {
    /// Wildcard patterns (`*`) a dependency name must match. An empty list
    /// matches every dependency.
    pub patterns: Vec<String>,
    /// Wildcard patterns that remove otherwise matching dependencies.
    pub exclude_patterns: Vec<String>,
    /// Optional restriction on the dependency type.
    pub dependency_type: Option<DependencyType>,
}

/// A named set of dependencies that are updated together in one pull
/// request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DependencyGroup {
    pub name: String,
    pub rules: GroupRules,
}

impl DependencyGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: GroupRules::default(),
        }
    }

    pub fn with_rules(name: impl Into<String>, rules: GroupRules) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Compiles the group's wildcard rules into a reusable matcher.
    pub fn matcher(&self) -> Result<GroupMatcher> {
        Ok(GroupMatcher {
            patterns: compile_patterns(&self.rules.patterns)?,
            exclude_patterns: compile_patterns(&self.rules.exclude_patterns)?,
            dependency_type: self.rules.dependency_type,
        })
    }

    /// Whether the dependency falls inside this group.
    pub fn contains(&self, dependency: &Dependency) -> Result<bool> {
        Ok(self.matcher()?.contains(dependency))
    }
}

/// Compiled form of [`GroupRules`].
#[derive(Debug, Clone)]
pub struct GroupMatcher {
    patterns: Vec<Regex>,
    exclude_patterns: Vec<Regex>,
    dependency_type: Option<DependencyType>,
}

impl GroupMatcher {
    pub fn contains(&self, dependency: &Dependency) -> bool {
        let included = self.patterns.is_empty()
            || self.patterns.iter().any(|re| re.is_match(&dependency.name));

        let excluded = self
            .exclude_patterns
            .iter()
            .any(|re| re.is_match(&dependency.name));

        let type_matches = match self.dependency_type {
            None => true,
            Some(DependencyType::Production) => dependency.production,
            Some(DependencyType::Development) => !dependency.production,
        };

        included && !excluded && type_matches
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| wildcard_regex(pattern))
        .collect()
}

/// Case-insensitive, fully anchored regex where `*` matches any run of
/// characters and everything else is literal.
fn wildcard_regex(pattern: &str) -> Result<Regex> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<String>>()
        .join(".*");

    Ok(Regex::new(&format!("(?i)^{body}$"))?)
}
