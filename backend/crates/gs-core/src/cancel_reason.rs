use std::fmt;

/// Why an external [`ShutdownTrigger`](crate::ShutdownTrigger) fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    /// Plain `cancel()` with no further detail
    Cancelled,
    /// Cancelled with a caller supplied reason
    Requested(String),
    /// The trigger's own deadline passed
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "cancelled"),
            Self::Requested(reason) => write!(f, "cancelled: {reason}"),
            Self::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}
