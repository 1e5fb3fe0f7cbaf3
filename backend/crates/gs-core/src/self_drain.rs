use crate::{Completion, ShutdownTrigger};

/// A resource that waits for its own shutdown trigger and reports back
/// through a [`Completion`] once fully drained.
///
/// Prefer [`Drainable`](crate::Drainable) for new resources; this shape
/// exists for resources that insist on owning their trigger logic.
pub trait SelfDrain: Send + Sync {
    /// Start waiting for a termination signal, then drain
    fn drain(&self) -> Completion;

    /// Same as [`SelfDrain::drain`], but `trigger` can start the drain
    /// before any signal arrives
    fn drain_with_cancel(&self, trigger: ShutdownTrigger) -> Completion;
}

/// Returns a future to hold until `resource` is fully drained
pub fn drain<R: SelfDrain + ?Sized>(resource: &R) -> Completion {
    resource.drain()
}

/// Behaves the same as [`drain`] but can be started early with `trigger`
pub fn drain_with_cancel<R: SelfDrain + ?Sized>(
    trigger: ShutdownTrigger,
    resource: &R,
) -> Completion {
    resource.drain_with_cancel(trigger)
}
