use crate::error::DrainResult;
use crate::{DrainError, DrainScope, Drainable};

use std::future::Future;

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Drainable for a spawned serve loop that stops when its token fires.
///
/// Fits `axum::serve(..).with_graceful_shutdown(token.cancelled_owned())`
/// and any worker loop that selects on a `CancellationToken`.
pub struct TaskDrain {
    name: String,
    stop: CancellationToken,
    handle: Mutex<Option<JoinHandle<std::io::Result<()>>>>,
}

impl TaskDrain {
    /// Wrap an already spawned task and the token that stops it
    pub fn new(
        name: impl Into<String>,
        stop: CancellationToken,
        handle: JoinHandle<std::io::Result<()>>,
    ) -> Self {
        Self {
            name: name.into(),
            stop,
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Spawn `f` with a fresh stop token and wrap the resulting task
    pub fn spawn<F, Fut>(name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = std::io::Result<()>> + Send + 'static,
    {
        let stop = CancellationToken::new();
        let handle = tokio::spawn(f(stop.clone()));
        Self::new(name, stop, handle)
    }

    pub fn stop_token(&self) -> CancellationToken {
        self.stop.clone()
    }
}

#[async_trait]
impl Drainable for TaskDrain {
    fn name(&self) -> &str {
        &self.name
    }

    async fn drain(&self, scope: DrainScope) -> DrainResult {
        info!("[{}] Starting shutdown sequence", self.name);
        self.stop.cancel();

        let Some(mut handle) = self.handle.lock().await.take() else {
            return Err(DrainError::failed(format!("{} already drained", self.name)));
        };

        match scope.within(&mut handle).await {
            Ok(Ok(Ok(()))) => {
                debug!("[{}] Drained in {:?}", self.name, scope.started().elapsed());
                Ok(())
            }
            Ok(Ok(Err(e))) => Err(DrainError::from(e)),
            Ok(Err(join_error)) => Err(DrainError::from_join_error(join_error)),
            Err(deadline) => {
                handle.abort();
                Err(deadline)
            }
        }
    }
}
