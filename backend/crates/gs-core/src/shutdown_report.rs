use crate::{DrainOutcome, ShutdownCause};

use std::time::Duration;

/// Aggregate result of one coordinated shutdown.
///
/// The cause is the overall result; drain failures are listed alongside it
/// and never replace it.
#[derive(Debug)]
pub struct ShutdownReport {
    cause: ShutdownCause,
    outcomes: Vec<DrainOutcome>,
    drain_timeout: Duration,
}

impl ShutdownReport {
    pub fn new(cause: ShutdownCause, outcomes: Vec<DrainOutcome>, drain_timeout: Duration) -> Self {
        Self {
            cause,
            outcomes,
            drain_timeout,
        }
    }

    pub fn cause(&self) -> &ShutdownCause {
        &self.cause
    }

    /// Outcomes in registration order
    pub fn outcomes(&self) -> &[DrainOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &DrainOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// True when every drainable drained cleanly
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(DrainOutcome::is_success)
    }

    pub fn drain_timeout(&self) -> Duration {
        self.drain_timeout
    }

    pub fn into_cause(self) -> ShutdownCause {
        self.cause
    }
}
