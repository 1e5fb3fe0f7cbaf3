use crate::DrainError;

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Bounded cancellation scope handed to every drain call.
///
/// The deadline is fixed when the scope is created and has no link to the
/// trigger that started the shutdown: drains always get the full timeout.
#[derive(Debug, Clone)]
pub struct DrainScope {
    token: CancellationToken,
    started: Instant,
    timeout: Duration,
}

impl DrainScope {
    /// Create a scope whose deadline is `timeout` from now.
    ///
    /// [`DrainScope::token`] only fires on an explicit [`DrainScope::cancel`];
    /// use [`DrainScope::start`] to also have it fire at the deadline.
    pub fn new(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            started: Instant::now(),
            timeout,
        }
    }

    /// Create a scope and spawn a watcher that cancels its token at the
    /// deadline. Must be called from within a tokio runtime.
    pub fn start(timeout: Duration) -> Self {
        let scope = Self::new(timeout);
        let token = scope.token.clone();
        let deadline = scope.deadline();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep_until(deadline) => token.cancel(),
            }
        });

        scope
    }

    pub fn deadline(&self) -> Instant {
        self.started + self.timeout
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    /// Time left before the deadline, zero once it has passed
    pub fn remaining(&self) -> Duration {
        self.deadline().saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        self.token.is_cancelled() || Instant::now() >= self.deadline()
    }

    /// End the scope early
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Token view of the scope, for resources that accept a `CancellationToken`
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Resolves at the deadline or when the scope is cancelled, whichever
    /// comes first
    pub async fn cancelled(&self) {
        tokio::select! {
            _ = self.token.cancelled() => {}
            _ = tokio::time::sleep_until(self.deadline()) => {}
        }
    }

    /// Run `fut` inside the scope. Yields `DeadlineExceeded` if the scope ends
    /// first; `fut` is dropped in that case.
    pub async fn within<F, T>(&self, fut: F) -> Result<T, DrainError>
    where
        F: Future<Output = T>,
    {
        tokio::select! {
            biased;
            output = fut => Ok(output),
            _ = self.cancelled() => Err(DrainError::deadline_exceeded(self.timeout)),
        }
    }
}
