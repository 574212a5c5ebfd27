//! Resolved state of the target branch for one refresh.
use crate::{group::DependencyGroup, job::Job};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySnapshot {
    /// Head of the target branch the change set is computed against
    pub base_commit_sha: String,
    /// Group name the job asked for, even when it no longer resolves
    pub job_group_name: Option<String>,
    /// The job's group within current configuration
    pub job_group: Option<DependencyGroup>,
}

impl DependencySnapshot {
    pub fn new(
        base_commit_sha: impl Into<String>,
        job_group_name: Option<String>,
        job_group: Option<DependencyGroup>,
    ) -> Self {
        Self {
            base_commit_sha: base_commit_sha.into(),
            job_group_name,
            job_group,
        }
    }

    /// Resolves the job's group by name against the groups in the job's
    /// configuration. A group that was removed or renamed resolves to
    /// `None`.
    pub fn create_from_job(
        job: &Job,
        base_commit_sha: impl Into<String>,
    ) -> Self {
        let job_group_name = job.dependency_group_to_refresh.clone();

        let job_group = job_group_name
            .as_deref()
            .and_then(|name| job.dependency_group_named(name))
            .cloned();

        if job_group.is_none() {
            log::debug!(
                "group {:?} did not resolve in current configuration",
                job_group_name
            );
        }

        Self::new(base_commit_sha, job_group_name, job_group)
    }
}
