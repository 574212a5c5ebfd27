use std::{fs, path::Path};

use crate::{
    Result,
    compiler::DependencyChangeCompiler,
    dependency::{Dependency, DependencyChange},
    group::DependencyGroup,
};

/// Builds change sets from a list of already-resolved candidate updates,
/// keeping those that belong to the group and actually move a version.
#[derive(Debug, Clone, Default)]
pub struct CandidateCompiler {
    candidates: Vec<Dependency>,
}

impl CandidateCompiler {
    pub fn new(candidates: Vec<Dependency>) -> Self {
        Self { candidates }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(content)?))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("loading candidate updates from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl DependencyChangeCompiler for CandidateCompiler {
    fn compile_all_dependency_changes_for(
        &self,
        group: &DependencyGroup,
    ) -> Result<DependencyChange> {
        let matcher = group.matcher()?;

        let updated = self
            .candidates
            .iter()
            .filter(|dep| dep.is_updated() && matcher.contains(dep))
            .cloned()
            .collect::<Vec<Dependency>>();

        log::debug!(
            "compiled {} of {} candidates for group {}",
            updated.len(),
            self.candidates.len(),
            group.name
        );

        Ok(DependencyChange::new(updated, Some(group.clone())))
    }
}
