//! Tests for refreshing a grouped update pull request.
//!
//! Test organization:
//! - `common`: Shared test utilities and helper functions
//! - `applies_to`: Job eligibility checks
//! - `missing_group`: Group removed from configuration
//! - `update`: Updating the pull request and classifying update failures
//! - `close`: Closing up-to-date pull requests and close failures

mod common;
mod missing_group;
