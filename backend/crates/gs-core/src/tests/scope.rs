use crate::{DrainError, DrainScope};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{eq, ok};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn given_future_slower_than_scope_when_run_within_then_deadline_exceeded() {
    // Given
    let scope = DrainScope::new(Duration::from_secs(5));

    // When
    let result = scope
        .within(tokio::time::sleep(Duration::from_secs(60)))
        .await;

    // Then
    assert!(matches!(
        result,
        Err(DrainError::DeadlineExceeded { timeout, .. }) if timeout == Duration::from_secs(5)
    ));
    assert!(scope.is_expired());
}

#[tokio::test(start_paused = true)]
async fn given_future_faster_than_scope_when_run_within_then_output_returned() {
    // Given
    let scope = DrainScope::new(Duration::from_secs(5));

    // When
    let result = scope
        .within(async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            7
        })
        .await;

    // Then
    assert_that!(result, ok(eq(&7)));
    assert_that!(scope.remaining(), eq(Duration::from_secs(4)));
}

#[tokio::test(start_paused = true)]
async fn given_started_scope_when_deadline_passes_then_token_cancelled() {
    // Given
    let scope = DrainScope::start(Duration::from_secs(2));
    let token = scope.token();
    let begin = Instant::now();

    // When
    token.cancelled().await;

    // Then
    assert_that!(begin.elapsed(), eq(Duration::from_secs(2)));
    assert_that!(scope.remaining(), eq(Duration::ZERO));
}

#[tokio::test(start_paused = true)]
async fn given_scope_when_cancelled_early_then_cancelled_resolves_immediately() {
    // Given
    let scope = DrainScope::new(Duration::from_secs(30));
    let begin = Instant::now();

    // When
    scope.cancel();
    scope.cancelled().await;

    // Then
    assert_that!(begin.elapsed(), eq(Duration::ZERO));
    assert!(scope.is_expired());
}

#[tokio::test(start_paused = true)]
async fn given_scope_when_deadline_read_then_equals_start_plus_timeout() {
    let scope = DrainScope::new(Duration::from_secs(30));

    assert_that!(scope.deadline() - scope.started(), eq(Duration::from_secs(30)));
    assert_that!(scope.timeout(), eq(Duration::from_secs(30)));
}
