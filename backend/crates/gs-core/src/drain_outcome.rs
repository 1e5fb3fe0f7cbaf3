use crate::DrainError;
use crate::error::DrainResult;

use std::time::Duration;

/// Result of one drain call
#[derive(Debug)]
pub struct DrainOutcome {
    pub name: String,
    pub result: DrainResult,
    /// Time from the start of the drain phase until this drain finished
    pub elapsed: Duration,
}

impl DrainOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&DrainError> {
        self.result.as_ref().err()
    }
}
