//! Reconciles pull requests opened for a dependency group: push the
//! recomputed change set onto the existing pull request, or close it when
//! the group no longer needs any changes.
pub mod compiler;
pub mod config;
pub mod dependency;
pub mod error;
pub mod error_handler;
pub mod group;
pub mod job;
pub mod operations;
pub mod service;
pub mod snapshot;

pub use error::{RefreshError, Result};
pub use operations::RefreshGroupUpdatePullRequest;

#[cfg(test)]
pub mod test_helpers;
