//! Process-wide graceful shutdown.
//!
//! A [`Coordinator`] waits for a termination signal or a caller supplied
//! [`ShutdownTrigger`], then drains every registered [`Drainable`]
//! concurrently inside a fixed-length [`DrainScope`] and returns a
//! [`ShutdownReport`] carrying the triggering cause and each drain's outcome.
//!
//! Resources that manage their own trigger can use the [`SelfDrain`] shape
//! instead; [`SignalDrain`] and [`SelfDrainAdapter`] convert between the two.

mod cancel_reason;
mod completion;
mod coordinator;
mod drain_outcome;
mod drain_scope;
mod drainable;
mod error;
mod fn_drain;
mod self_drain;
mod self_drain_adapter;
mod shutdown_cause;
mod shutdown_report;
mod shutdown_signal;
mod shutdown_trigger;
mod signal_drain;
mod signal_subscription;
mod task_drain;

pub use cancel_reason::CancelReason;
pub use completion::{Completer, Completion, completion};
pub use coordinator::Coordinator;
pub use drain_outcome::DrainOutcome;
pub use drain_scope::DrainScope;
pub use drainable::Drainable;
pub use error::{CoordinatorError, DrainError, DrainResult, Result};
pub use fn_drain::{FnDrain, drain_fn};
pub use self_drain::{SelfDrain, drain, drain_with_cancel};
pub use self_drain_adapter::SelfDrainAdapter;
pub use shutdown_cause::ShutdownCause;
pub use shutdown_report::ShutdownReport;
pub use shutdown_signal::{ParseSignalError, ShutdownSignal};
pub use shutdown_trigger::ShutdownTrigger;
pub use signal_drain::SignalDrain;
pub use signal_subscription::SignalSubscription;
pub use task_drain::TaskDrain;

#[cfg(test)]
mod tests;

const DEFAULT_DRAIN_TIMEOUT_SECS: u64 = 30;
