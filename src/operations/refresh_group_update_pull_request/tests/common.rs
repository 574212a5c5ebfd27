//! Common test utilities for group refresh tests.

use std::rc::Rc;

use crate::{
    compiler::MockDependencyChangeCompiler,
    config::RefreshConfig,
    error_handler::MockErrorHandler,
    operations::RefreshGroupUpdatePullRequest,
    service::MockService,
    snapshot::DependencySnapshot,
    test_helpers::{create_test_job, create_test_snapshot},
};

pub use crate::{
    RefreshError,
    dependency::DependencyChange,
    service::{CloseReason, ErrorSubject},
    test_helpers::create_test_change,
};

pub const TEST_GROUP_NAME: &str = "frontend-deps";
pub const TEST_BASE_SHA: &str = "abc123";

/// Mocked collaborators for a single refresh. Set expectations on the
/// fields before handing them to [`create_test_refresh`].
#[derive(Default)]
pub struct TestMocks {
    pub service: MockService,
    pub compiler: MockDependencyChangeCompiler,
    pub error_handler: MockErrorHandler,
}

impl TestMocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the compiler return `change` exactly once for the test group.
    pub fn compiles_to(&mut self, change: DependencyChange) {
        self.compiler
            .expect_compile_all_dependency_changes_for()
            .withf(|group| group.name == TEST_GROUP_NAME)
            .times(1)
            .return_once(move |_| Ok(change));
    }

    /// Expects no outbound pull request mutation at all.
    pub fn expect_no_mutation(&mut self) {
        self.service.expect_update_pull_request().times(0);
        self.service.expect_close_pull_request().times(0);
    }
}

/// Creates a refresh for the default test job and snapshot.
pub fn create_test_refresh(mocks: TestMocks) -> RefreshGroupUpdatePullRequest {
    create_test_refresh_with(
        mocks,
        create_test_snapshot(),
        RefreshConfig::default(),
    )
}

/// Creates a refresh with a custom snapshot and configuration.
pub fn create_test_refresh_with(
    mocks: TestMocks,
    snapshot: DependencySnapshot,
    config: RefreshConfig,
) -> RefreshGroupUpdatePullRequest {
    RefreshGroupUpdatePullRequest::builder()
        .service(Rc::new(mocks.service))
        .job(Rc::new(create_test_job()))
        .dependency_snapshot(Rc::new(snapshot))
        .error_handler(Rc::new(mocks.error_handler))
        .compiler(Rc::new(mocks.compiler))
        .config(config)
        .build()
        .unwrap()
}
