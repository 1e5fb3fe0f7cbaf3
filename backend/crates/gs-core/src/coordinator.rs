use crate::error::{DrainResult, Result};
use crate::{
    DEFAULT_DRAIN_TIMEOUT_SECS, DrainError, DrainOutcome, DrainScope, Drainable, ShutdownCause,
    ShutdownReport, ShutdownSignal, ShutdownTrigger, SignalSubscription,
};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinError;
use tokio::time::Instant;

/// Graceful shutdown coordinator.
///
/// Waits for the first of an OS termination signal or the caller's trigger,
/// then drains every registered resource concurrently within a fresh,
/// fixed-length scope. Each call is independent; no state is kept between
/// calls.
///
/// A drainable that ignores its scope stalls [`Coordinator::drain_all`]
/// unless a hard deadline is set with [`Coordinator::with_hard_deadline`].
#[derive(Debug, Clone)]
pub struct Coordinator {
    drain_timeout: Duration,
    signals: Vec<ShutdownSignal>,
    hard_deadline_grace: Option<Duration>,
}

impl Coordinator {
    pub fn new(drain_timeout: Duration) -> Self {
        Self {
            drain_timeout,
            signals: ShutdownSignal::DEFAULT_SET.to_vec(),
            hard_deadline_grace: None,
        }
    }

    /// Build from validated configuration
    pub fn from_config(config: &gs_config::ShutdownConfig) -> Self {
        let signals = config
            .signals
            .iter()
            .filter_map(|name| match name.parse::<ShutdownSignal>() {
                Ok(signal) => Some(signal),
                Err(e) => {
                    warn!("{}, ignoring", e);
                    None
                }
            })
            .collect();

        let grace = (config.hard_deadline_grace_ms > 0)
            .then(|| Duration::from_millis(config.hard_deadline_grace_ms));

        Self {
            drain_timeout: Duration::from_secs(config.drain_timeout_secs),
            signals,
            hard_deadline_grace: grace,
        }
    }

    /// Replace the watched signal set. An empty set leaves the trigger as
    /// the only way to start a shutdown.
    pub fn with_signals(mut self, signals: impl IntoIterator<Item = ShutdownSignal>) -> Self {
        self.signals = signals.into_iter().collect();
        self
    }

    /// Abandon (abort) any drain still running `grace` after the scope's
    /// deadline and report it as [`DrainError::Abandoned`]
    pub fn with_hard_deadline(mut self, grace: Duration) -> Self {
        self.hard_deadline_grace = Some(grace);
        self
    }

    pub fn drain_timeout(&self) -> Duration {
        self.drain_timeout
    }

    pub fn signals(&self) -> &[ShutdownSignal] {
        &self.signals
    }

    /// Wait for a trigger, drain everything, report
    pub async fn run(
        &self,
        trigger: &ShutdownTrigger,
        drainables: &[Arc<dyn Drainable>],
    ) -> Result<ShutdownReport> {
        let cause = self.wait_for_trigger(trigger).await?;
        let outcomes = self.drain_all(drainables).await;

        Ok(ShutdownReport::new(cause, outcomes, self.drain_timeout))
    }

    /// Suspend until a watched signal arrives or `trigger` fires.
    ///
    /// Signal interest only lives for the duration of this call.
    pub async fn wait_for_trigger(&self, trigger: &ShutdownTrigger) -> Result<ShutdownCause> {
        let mut subscription = SignalSubscription::register(&self.signals)?;

        let cause = tokio::select! {
            biased;
            reason = trigger.cancelled() => ShutdownCause::Cancelled(reason),
            signal = subscription.recv() => ShutdownCause::Signal(signal),
        };
        drop(subscription);

        info!("[graceful] Shutting down due to {}", cause);
        Ok(cause)
    }

    /// Drain every resource concurrently and wait for all of them.
    ///
    /// Outcomes come back in registration order. Failures are logged here,
    /// once each, and never cut sibling drains short.
    pub async fn drain_all(&self, drainables: &[Arc<dyn Drainable>]) -> Vec<DrainOutcome> {
        let scope = DrainScope::start(self.drain_timeout);
        let hard_deadline = self.hard_deadline_grace.map(|grace| scope.deadline() + grace);

        info!(
            "[graceful] Draining {} resource(s), timeout {:?}",
            drainables.len(),
            self.drain_timeout
        );

        let tasks: Vec<_> = drainables
            .iter()
            .map(|drainable| {
                let drainable = Arc::clone(drainable);
                let name = drainable.name().to_string();
                let task_scope = scope.clone();
                let handle = tokio::spawn(async move { drainable.drain(task_scope).await });
                (name, handle)
            })
            .collect();

        let started = scope.started();
        let waits = tasks.into_iter().map(|(name, mut handle)| async move {
            let result = match hard_deadline {
                Some(at) => match tokio::time::timeout_at(at, &mut handle).await {
                    Ok(joined) => flatten(joined),
                    Err(_) => {
                        handle.abort();
                        Err(DrainError::abandoned(started.elapsed()))
                    }
                },
                None => flatten(handle.await),
            };

            DrainOutcome {
                name,
                result,
                elapsed: Instant::now().saturating_duration_since(started),
            }
        });

        let outcomes = futures::future::join_all(waits).await;
        scope.cancel();

        for outcome in &outcomes {
            match &outcome.result {
                Ok(()) => debug!("[graceful] {} drained in {:?}", outcome.name, outcome.elapsed),
                Err(e) => warn!("[graceful] Could not drain {} gracefully: {}", outcome.name, e),
            }
        }

        let failed = outcomes.iter().filter(|o| !o.is_success()).count();
        info!(
            "[graceful] Drain complete: {} ok, {} failed",
            outcomes.len() - failed,
            failed
        );

        outcomes
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_DRAIN_TIMEOUT_SECS))
    }
}

fn flatten(joined: std::result::Result<DrainResult, JoinError>) -> DrainResult {
    joined.unwrap_or_else(|e| Err(DrainError::from_join_error(e)))
}
