use crate::CancelReason;

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Externally controlled shutdown signal.
///
/// Clones observe the same cancellation. The first reason recorded wins,
/// later cancels leave it untouched. A trigger built with a deadline fires
/// by itself with [`CancelReason::DeadlineExceeded`] once the deadline passes.
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    token: CancellationToken,
    reason: Arc<OnceLock<CancelReason>>,
    deadline: Option<Instant>,
    parent: Option<Box<ShutdownTrigger>>,
}

impl ShutdownTrigger {
    /// Create a trigger that only fires when cancelled
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            reason: Arc::new(OnceLock::new()),
            deadline: None,
            parent: None,
        }
    }

    /// Create a trigger that fires on its own after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Create a trigger that fires on its own at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::new()
        }
    }

    /// Derive a trigger that fires when this one does. Cancelling the child
    /// leaves the parent untouched.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            reason: Arc::new(OnceLock::new()),
            deadline: self.deadline,
            parent: Some(Box::new(self.clone())),
        }
    }

    pub fn cancel(&self) {
        self.fire(CancelReason::Cancelled);
    }

    pub fn cancel_with<S: Into<String>>(&self, reason: S) {
        self.fire(CancelReason::Requested(reason.into()));
    }

    /// Non-blocking check. Also notices an elapsed deadline.
    pub fn is_cancelled(&self) -> bool {
        if self.token.is_cancelled() {
            return true;
        }

        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.fire(CancelReason::DeadlineExceeded);
                true
            }
            _ => false,
        }
    }

    /// Reason the trigger fired, `None` while it is still armed
    pub fn reason(&self) -> Option<CancelReason> {
        if !self.is_cancelled() {
            return None;
        }

        self.recorded_reason().or(Some(CancelReason::Cancelled))
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Wait until the trigger fires and return why
    pub async fn cancelled(&self) -> CancelReason {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => {}
                    _ = tokio::time::sleep_until(deadline) => {
                        self.fire(CancelReason::DeadlineExceeded);
                    }
                }
            }
            None => self.token.cancelled().await,
        }

        self.recorded_reason().unwrap_or(CancelReason::Cancelled)
    }

    fn fire(&self, reason: CancelReason) {
        // Already fired here or through a parent: that reason stands.
        if self.token.is_cancelled() {
            return;
        }
        let _ = self.reason.set(reason);
        self.token.cancel();
    }

    fn recorded_reason(&self) -> Option<CancelReason> {
        self.reason
            .get()
            .cloned()
            .or_else(|| self.parent.as_ref().and_then(|p| p.recorded_reason()))
    }
}

impl Default for ShutdownTrigger {
    fn default() -> Self {
        Self::new()
    }
}
