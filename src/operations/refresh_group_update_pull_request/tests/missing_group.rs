//! Tests for refreshing a group that no longer exists in configuration.

use super::common::*;
use crate::{
    config::RefreshConfig,
    operations::refresh_group_update_pull_request::missing_group_message,
    snapshot::DependencySnapshot,
};

#[test_log::test]
fn missing_group_reports_anomaly_without_mutation() {
    let mut mocks = TestMocks::new();

    mocks
        .service
        .expect_capture_exception()
        .withf(|err, job| {
            matches!(err, RefreshError::MissingGroup) && job.id == "1234"
        })
        .times(1)
        .return_const(());

    mocks.expect_no_mutation();
    mocks
        .compiler
        .expect_compile_all_dependency_changes_for()
        .times(0);
    mocks.error_handler.expect_handle_error().times(0);

    let snapshot = DependencySnapshot::new(
        TEST_BASE_SHA,
        Some(TEST_GROUP_NAME.to_string()),
        None,
    );

    let refresh =
        create_test_refresh_with(mocks, snapshot, RefreshConfig::default());

    refresh.perform().unwrap();
}

#[test_log::test]
fn missing_group_without_name_still_reports() {
    let mut mocks = TestMocks::new();

    mocks
        .service
        .expect_capture_exception()
        .times(1)
        .return_const(());

    mocks.expect_no_mutation();

    let snapshot = DependencySnapshot::new(TEST_BASE_SHA, None, None);

    let refresh =
        create_test_refresh_with(mocks, snapshot, RefreshConfig::default());

    refresh.perform().unwrap();
}

#[test]
fn missing_group_message_names_the_group() {
    assert_eq!(
        missing_group_message(Some(TEST_GROUP_NAME)),
        "The 'frontend-deps' group has been removed from the update config."
    );
}

#[test]
fn missing_group_message_falls_back_to_unknown() {
    assert_eq!(
        missing_group_message(None),
        "The 'unknown' group has been removed from the update config."
    );
}
