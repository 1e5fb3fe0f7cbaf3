use crate::{CancelReason, ShutdownSignal};

use std::fmt;

/// What woke the coordinator up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutdownCause {
    Signal(ShutdownSignal),
    Cancelled(CancelReason),
}

impl ShutdownCause {
    pub fn signal(&self) -> Option<ShutdownSignal> {
        match self {
            Self::Signal(signal) => Some(*signal),
            Self::Cancelled(_) => None,
        }
    }

    pub fn cancel_reason(&self) -> Option<&CancelReason> {
        match self {
            Self::Signal(_) => None,
            Self::Cancelled(reason) => Some(reason),
        }
    }
}

impl fmt::Display for ShutdownCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signal(signal) => write!(f, "signal {signal}"),
            Self::Cancelled(reason) => write!(f, "trigger {reason}"),
        }
    }
}
