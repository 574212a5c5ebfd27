//! Handling of recoverable errors raised while applying a refresh.
#[cfg(test)]
use mockall::automock;
use std::rc::Rc;

use crate::{
    RefreshError,
    service::{ErrorSubject, JobError, Service},
};

/// Run-halting error registry and classification.
pub mod classifier;

#[cfg_attr(test, automock)]
pub trait ErrorHandler {
    /// Reports a recoverable error against `subject`. The job carries on
    /// afterwards.
    fn handle_error(&self, error: &RefreshError, subject: &ErrorSubject);
}

/// Logs recoverable errors and records them with the backend service.
pub struct ServiceErrorHandler {
    service: Rc<dyn Service>,
}

impl ServiceErrorHandler {
    pub fn new(service: Rc<dyn Service>) -> Self {
        Self { service }
    }
}

impl ErrorHandler for ServiceErrorHandler {
    fn handle_error(&self, error: &RefreshError, subject: &ErrorSubject) {
        log::error!("Error processing {} ({})", subject.name(), error);

        let job_error = JobError::new(error, subject);

        if let Err(err) = self.service.record_update_job_error(&job_error) {
            log::warn!(
                "failed to record {} error for {}: {}",
                job_error.error_type,
                subject.name(),
                err
            );
        }
    }
}
