use crate::error::DrainResult;
use crate::{DrainScope, Drainable, SelfDrain, ShutdownTrigger};

use async_trait::async_trait;

/// Lets a [`SelfDrain`] resource take part in a coordinated shutdown.
///
/// The resource's own trigger is fired immediately and its completion is
/// awaited inside the coordinator's scope.
pub struct SelfDrainAdapter<R> {
    name: String,
    resource: R,
}

impl<R: SelfDrain> SelfDrainAdapter<R> {
    pub fn new(name: impl Into<String>, resource: R) -> Self {
        Self {
            name: name.into(),
            resource,
        }
    }

    pub fn inner(&self) -> &R {
        &self.resource
    }
}

#[async_trait]
impl<R: SelfDrain> Drainable for SelfDrainAdapter<R> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn drain(&self, scope: DrainScope) -> DrainResult {
        let trigger = ShutdownTrigger::new();
        trigger.cancel_with("coordinated shutdown");

        scope.within(self.resource.drain_with_cancel(trigger)).await
    }
}
