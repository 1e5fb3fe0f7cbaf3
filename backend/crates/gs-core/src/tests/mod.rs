mod scope;
mod signals;

use crate::{DrainError, DrainResult, DrainScope, Drainable};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

/// Test drainable that counts starts and completions
pub(crate) struct CountingDrain {
    pub(crate) name: String,
    pub(crate) started: Arc<AtomicUsize>,
    pub(crate) finished: Arc<AtomicUsize>,
    pub(crate) delay: Duration,
    pub(crate) fail: bool,
}

impl CountingDrain {
    pub(crate) fn new(name: &str, started: &Arc<AtomicUsize>, finished: &Arc<AtomicUsize>) -> Self {
        Self {
            name: name.to_string(),
            started: Arc::clone(started),
            finished: Arc::clone(finished),
            delay: Duration::ZERO,
            fail: false,
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl Drainable for CountingDrain {
    fn name(&self) -> &str {
        &self.name
    }

    async fn drain(&self, scope: DrainScope) -> DrainResult {
        self.started.fetch_add(1, Ordering::SeqCst);

        // Honors the scope: a delay past the deadline ends in DeadlineExceeded
        let result = scope.within(tokio::time::sleep(self.delay)).await;
        self.finished.fetch_add(1, Ordering::SeqCst);
        result?;

        if self.fail {
            return Err(DrainError::failed(format!("{} refused to stop", self.name)));
        }
        Ok(())
    }
}

/// Ignores its scope and never returns
pub(crate) struct StubbornDrain;

#[async_trait]
impl Drainable for StubbornDrain {
    async fn drain(&self, _scope: DrainScope) -> DrainResult {
        std::future::pending().await
    }
}

pub(crate) struct PanickingDrain;

#[async_trait]
impl Drainable for PanickingDrain {
    async fn drain(&self, _scope: DrainScope) -> DrainResult {
        panic!("pool already closed");
    }
}

pub(crate) fn counters() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    (Arc::new(AtomicUsize::new(0)), Arc::new(AtomicUsize::new(0)))
}
