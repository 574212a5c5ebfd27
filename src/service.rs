//! Backend that persists refresh decisions.
//!
//! Implementations own pull request identity: given an updated change set
//! they decide whether to update the existing pull request in place or
//! supersede it with a new one.
#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use strum::Display;

use crate::{RefreshError, Result, dependency::DependencyChange, job::Job};

/// Dry-run service that logs decisions instead of applying them.
pub mod dry_run;

/// Why a pull request is being closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    UpToDate,
    DependenciesChanged,
    DependencyRemoved,
    DependencyGroupEmpty,
    UpdateNoLongerPossible,
}

impl CloseReason {
    /// Human readable form, e.g. "up to date".
    pub fn describe(&self) -> String {
        self.to_string().replace('_', " ")
    }
}

/// What a failing dependency or group is reported as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum ErrorSubject {
    Dependency(String),
    Group(String),
}

impl ErrorSubject {
    pub fn name(&self) -> &str {
        match self {
            Self::Dependency(name) | Self::Group(name) => name,
        }
    }
}

/// A recoverable error recorded against the job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobError {
    pub error_type: String,
    pub message: String,
    pub subject: ErrorSubject,
}

impl JobError {
    pub fn new(error: &RefreshError, subject: &ErrorSubject) -> Self {
        Self {
            error_type: error.error_type(),
            message: error.to_string(),
            subject: subject.clone(),
        }
    }
}

#[cfg_attr(test, automock)]
pub trait Service {
    /// Pushes the change set onto the job's existing pull request.
    fn update_pull_request(
        &self,
        change: &DependencyChange,
        base_commit_sha: &str,
    ) -> Result<()>;

    /// Closes the pull request covering exactly `dependency_names`.
    fn close_pull_request(
        &self,
        dependency_names: &[String],
        reason: CloseReason,
    ) -> Result<()>;

    /// Reports an internal defect. Never fails.
    fn capture_exception(&self, error: &RefreshError, job: &Job);

    fn record_update_job_error(&self, error: &JobError) -> Result<()>;
}
