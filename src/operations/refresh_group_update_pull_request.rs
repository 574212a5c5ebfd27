//! Refreshes a pull request that updates every outdated dependency matching
//! a dependency group.
//!
//! The change set is recomputed against the current head of the target
//! branch. When anything still needs updating the existing pull request is
//! handed the new change set, and the service decides whether that means
//! updating it in place or superseding it because membership or versions
//! moved. When nothing needs updating the pull request is closed as up to
//! date.
use derive_builder::Builder;
use log::*;
use std::rc::Rc;

use crate::{
    RefreshError, Result,
    compiler::DependencyChangeCompiler,
    config::{CloseFailurePolicy, RefreshConfig},
    error_handler::{ErrorHandler, classifier::ErrorClassifier},
    group::DependencyGroup,
    job::{GROUPED_UPDATES_PROTOTYPE, Job},
    service::{CloseReason, ErrorSubject, Service},
    snapshot::DependencySnapshot,
};

#[derive(Builder)]
#[builder(build_fn(private, name = "_build"))]
pub struct RefreshGroupParams {
    pub service: Rc<dyn Service>,
    pub job: Rc<Job>,
    pub dependency_snapshot: Rc<DependencySnapshot>,
    pub error_handler: Rc<dyn ErrorHandler>,
    pub compiler: Rc<dyn DependencyChangeCompiler>,
    #[builder(default)]
    pub classifier: ErrorClassifier,
    #[builder(default)]
    pub config: RefreshConfig,
}

impl RefreshGroupParamsBuilder {
    pub fn build(&self) -> Result<RefreshGroupUpdatePullRequest> {
        let params = self._build().map_err(|e| {
            RefreshError::invalid_config(format!(
                "Failed to build group refresh: {}",
                e
            ))
        })?;
        Ok(RefreshGroupUpdatePullRequest::new(params))
    }
}

pub struct RefreshGroupUpdatePullRequest {
    service: Rc<dyn Service>,
    job: Rc<Job>,
    dependency_snapshot: Rc<DependencySnapshot>,
    error_handler: Rc<dyn ErrorHandler>,
    compiler: Rc<dyn DependencyChangeCompiler>,
    classifier: ErrorClassifier,
    config: RefreshConfig,
}

impl RefreshGroupUpdatePullRequest {
    pub fn builder() -> RefreshGroupParamsBuilder {
        RefreshGroupParamsBuilder::default()
    }

    pub fn new(params: RefreshGroupParams) -> Self {
        Self {
            service: params.service,
            job: params.job,
            dependency_snapshot: params.dependency_snapshot,
            error_handler: params.error_handler,
            compiler: params.compiler,
            classifier: params.classifier,
            config: params.config,
        }
    }

    /// Whether this operation can act on the job. It needs the dependencies
    /// in the existing pull request and the group that created it.
    pub fn applies_to(job: &Job) -> bool {
        if job.security_updates_only {
            return false;
        }

        if job.dependencies.is_empty() {
            return false;
        }

        if job.dependency_group_to_refresh.is_none() {
            return false;
        }

        job.updating_a_pull_request
            && job.experiment_enabled(GROUPED_UPDATES_PROTOTYPE)
    }

    pub fn perform(&self) -> Result<()> {
        // Only reachable when the job and configuration payloads were
        // emitted out of sync.
        let Some(group) = self.dependency_snapshot.job_group.as_ref() else {
            warn!(
                "{}",
                missing_group_message(
                    self.dependency_snapshot.job_group_name.as_deref()
                )
            );

            self.service
                .capture_exception(&RefreshError::MissingGroup, &self.job);

            return Ok(());
        };

        let dependency_change =
            self.compiler.compile_all_dependency_changes_for(group)?;

        if !dependency_change.has_updates() {
            return self.close_pull_request(group, CloseReason::UpToDate);
        }

        info!("Updating pull request for '{}'", group.name);

        match self.service.update_pull_request(
            &dependency_change,
            &self.dependency_snapshot.base_commit_sha,
        ) {
            Ok(()) => Ok(()),
            Err(err) => self.handle_failure(err, group),
        }
    }

    ////////////////////////////////////////////////////////////////////////////
    //// private
    ////////////////////////////////////////////////////////////////////////////

    fn close_pull_request(
        &self,
        group: &DependencyGroup,
        reason: CloseReason,
    ) -> Result<()> {
        info!(
            "Telling backend to close pull request for the {} group ({}) - {}",
            group.name,
            self.job.dependencies.join(", "),
            reason.describe()
        );

        match self.service.close_pull_request(&self.job.dependencies, reason) {
            Ok(()) => Ok(()),
            Err(err) => match self.config.close_failure {
                CloseFailurePolicy::Propagate => Err(err),
                CloseFailurePolicy::Classify => self.handle_failure(err, group),
            },
        }
    }

    /// Run-halting errors abort the job. Anything else is reported against
    /// the whole group, since the update applies to every member at once.
    fn handle_failure(
        &self,
        err: RefreshError,
        group: &DependencyGroup,
    ) -> Result<()> {
        if self.classifier.is_run_halting(&err) {
            return Err(err);
        }

        self.error_handler
            .handle_error(&err, &ErrorSubject::Group(group.name.clone()));

        Ok(())
    }
}

fn missing_group_message(group_name: Option<&str>) -> String {
    format!(
        "The '{}' group has been removed from the update config.",
        group_name.unwrap_or("unknown")
    )
}

#[cfg(test)]
mod tests;
