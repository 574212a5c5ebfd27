//! Recomputation of a group's dependency change set.
#[cfg(test)]
use mockall::automock;

use crate::{Result, dependency::DependencyChange, group::DependencyGroup};

/// Candidate-file backed compiler for offline runs.
pub mod candidates;

/// Computes every dependency update a group needs against the current head
/// of the target branch. Resolution itself lives outside this crate.
#[cfg_attr(test, automock)]
pub trait DependencyChangeCompiler {
    fn compile_all_dependency_changes_for(
        &self,
        group: &DependencyGroup,
    ) -> Result<DependencyChange>;
}
