use crate::ShutdownSignal;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure of a single drainable. Reported per resource, never escalated.
#[derive(Error, Debug)]
pub enum DrainError {
    #[error("Drain failed: {message} {location}")]
    Failed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Drain IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Drain did not finish within {timeout:?} {location}")]
    DeadlineExceeded {
        timeout: Duration,
        location: ErrorLocation,
    },

    #[error("Drain abandoned after {waited:?}, task aborted {location}")]
    Abandoned {
        waited: Duration,
        location: ErrorLocation,
    },

    #[error("Drain task panicked: {message} {location}")]
    Panicked {
        message: String,
        location: ErrorLocation,
    },
}

impl DrainError {
    /// Create a generic drain failure
    #[track_caller]
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self::Failed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a deadline error for a scope of the given length
    #[track_caller]
    pub fn deadline_exceeded(timeout: Duration) -> Self {
        Self::DeadlineExceeded {
            timeout,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn abandoned(waited: Duration) -> Self {
        Self::Abandoned {
            waited,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn from_join_error(error: tokio::task::JoinError) -> Self {
        let message = if error.is_panic() {
            let payload = error.into_panic();
            if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                String::from("non-string panic payload")
            }
        } else {
            String::from("task cancelled")
        };

        Self::Panicked {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the drain ran out of time (on its own or at the coordinator)
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::DeadlineExceeded { .. } | Self::Abandoned { .. }
        )
    }
}

impl From<std::io::Error> for DrainError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Errors that stop the coordinator from waiting for a trigger at all.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Failed to register {signal} handler: {source} {location}")]
    SignalRegistration {
        signal: ShutdownSignal,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, CoordinatorError>;
pub type DrainResult = std::result::Result<(), DrainError>;
