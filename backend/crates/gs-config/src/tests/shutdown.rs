use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Shutdown
// =========================================================================

#[test]
#[serial]
fn given_zero_drain_timeout_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("GS_SHUTDOWN_DRAIN_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_drain_timeout_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("GS_SHUTDOWN_DRAIN_TIMEOUT_SECS", "3601");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_drain_timeout_at_limit_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("GS_SHUTDOWN_DRAIN_TIMEOUT_SECS", "3600");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_unknown_signal_when_validate_then_error_names_it() {
    // Given
    let _temp = setup_config_dir();
    let _signals = EnvGuard::set("GS_SHUTDOWN_SIGNALS", "sigterm,sigkill");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("sigkill"));
}

#[test]
#[serial]
fn given_empty_signal_list_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _signals = EnvGuard::set("GS_SHUTDOWN_SIGNALS", " , ");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_mixed_case_signal_names_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _signals = EnvGuard::set("GS_SHUTDOWN_SIGNALS", "SIGINT,Terminate,HUP");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_excessive_hard_deadline_grace_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _grace = EnvGuard::set("GS_SHUTDOWN_HARD_DEADLINE_GRACE_MS", "600000");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
