use crate::{Completion, Coordinator, Drainable, SelfDrain, ShutdownTrigger, completion};

use std::sync::Arc;

use log::error;

/// Turns any [`Drainable`] into a self-driven resource that listens for
/// termination signals on its own.
///
/// Signal interest is registered when the spawned waiter first runs, so a
/// signal delivered before that point gets the platform default action.
pub struct SignalDrain<D: Drainable> {
    resource: Arc<D>,
    coordinator: Coordinator,
}

impl<D: Drainable + 'static> SignalDrain<D> {
    pub fn new(resource: D) -> Self {
        Self {
            resource: Arc::new(resource),
            coordinator: Coordinator::default(),
        }
    }

    pub fn inner(&self) -> &D {
        &self.resource
    }

    /// Use `coordinator` for the signal set and drain timeout
    pub fn with_coordinator(mut self, coordinator: Coordinator) -> Self {
        self.coordinator = coordinator;
        self
    }

    fn spawn(&self, trigger: ShutdownTrigger) -> Completion {
        let (completer, completion) = completion();
        let resource: Arc<dyn Drainable> = self.resource.clone();
        let coordinator = self.coordinator.clone();

        tokio::spawn(async move {
            if let Err(e) = coordinator.run(&trigger, &[resource]).await {
                error!("[graceful] Could not wait for shutdown: {}", e);
            }
            completer.complete();
        });

        completion
    }
}

impl<D: Drainable + 'static> SelfDrain for SignalDrain<D> {
    fn drain(&self) -> Completion {
        self.spawn(ShutdownTrigger::new())
    }

    fn drain_with_cancel(&self, trigger: ShutdownTrigger) -> Completion {
        self.spawn(trigger)
    }
}
