//! The job payload describing a requested refresh.
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

use crate::{RefreshError, Result, group::DependencyGroup};

/// Experiment gating grouped pull request refreshes.
pub const GROUPED_UPDATES_PROTOTYPE: &str = "grouped_updates_prototype";

/// A unit of work asking for a refresh. Immutable for the duration of one
/// refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Job {
    pub id: String,
    pub security_updates_only: bool,
    /// Names of the dependencies the existing pull request covers
    pub dependencies: Vec<String>,
    pub dependency_group_to_refresh: Option<String>,
    pub updating_a_pull_request: bool,
    /// Groups from the current update configuration
    pub dependency_groups: Vec<DependencyGroup>,
    pub experiments: BTreeMap<String, bool>,
}

impl Job {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let job: Job = serde_json::from_str(content)?;
        job.validate()?;
        Ok(job)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("loading job from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Rejects payloads whose group configuration cannot be used.
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<&str> = vec![];

        for group in self.dependency_groups.iter() {
            if group.name.trim().is_empty() {
                return Err(RefreshError::invalid_job(
                    "dependency group name cannot be empty",
                ));
            }

            if seen.contains(&group.name.as_str()) {
                return Err(RefreshError::invalid_job(format!(
                    "duplicate dependency group: {}",
                    group.name
                )));
            }

            // surface bad patterns at load time rather than mid-refresh
            group.matcher()?;

            seen.push(&group.name);
        }

        if let Some(name) = self.dependency_group_to_refresh.as_ref()
            && name.trim().is_empty()
        {
            return Err(RefreshError::invalid_job(
                "dependency-group-to-refresh cannot be empty",
            ));
        }

        if self.updating_a_pull_request {
            if self.dependencies.is_empty() {
                return Err(RefreshError::invalid_job(
                    "updating a pull request requires dependencies",
                ));
            }

            if self.dependency_group_to_refresh.is_none() {
                return Err(RefreshError::invalid_job(
                    "updating a pull request requires dependency-group-to-refresh",
                ));
            }
        }

        Ok(())
    }

    pub fn experiment_enabled(&self, name: &str) -> bool {
        self.experiments.get(name).copied().unwrap_or(false)
    }

    pub fn dependency_group_named(
        &self,
        name: &str,
    ) -> Option<&DependencyGroup> {
        self.dependency_groups.iter().find(|g| g.name == name)
    }
}
