//! Operations an update job can perform.
//!
//! Each operation states which jobs it applies to and performs one pass
//! against the backend service.

/// Refresh of an existing grouped update pull request.
pub mod refresh_group_update_pull_request;

pub use refresh_group_update_pull_request::{
    RefreshGroupParams, RefreshGroupParamsBuilder,
    RefreshGroupUpdatePullRequest,
};
