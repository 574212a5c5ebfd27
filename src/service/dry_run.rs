use log::*;

use crate::{
    RefreshError, Result,
    dependency::DependencyChange,
    job::Job,
    service::{CloseReason, JobError, Service},
};

/// Service used for offline runs. Every decision is logged and reported as
/// successful.
#[derive(Debug, Default)]
pub struct DryRunService;

impl DryRunService {
    pub fn new() -> Self {
        Self
    }
}

impl Service for DryRunService {
    fn update_pull_request(
        &self,
        change: &DependencyChange,
        base_commit_sha: &str,
    ) -> Result<()> {
        warn!(
            "dry_run: would update pull request at {}: {}",
            base_commit_sha,
            change.updated_dependency_names().join(", ")
        );

        for dep in change.updated_dependencies.iter() {
            debug!(
                "dry_run: {} {} -> {}",
                dep.name,
                dep.previous_version.as_deref().unwrap_or("unknown"),
                dep.version.as_deref().unwrap_or("unknown")
            );
        }

        Ok(())
    }

    fn close_pull_request(
        &self,
        dependency_names: &[String],
        reason: CloseReason,
    ) -> Result<()> {
        warn!(
            "dry_run: would close pull request for ({}): {}",
            dependency_names.join(", "),
            reason
        );
        Ok(())
    }

    fn capture_exception(&self, error: &RefreshError, job: &Job) {
        error!("captured exception for job {}: {}", job.id, error);
    }

    fn record_update_job_error(&self, error: &JobError) -> Result<()> {
        let payload = serde_json::to_string(error)?;
        warn!("dry_run: would record update job error: {payload}");
        Ok(())
    }
}
