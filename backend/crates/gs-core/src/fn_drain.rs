use crate::error::DrainResult;
use crate::{DrainScope, Drainable};

use std::future::Future;

use async_trait::async_trait;

/// Drainable backed by a closure
pub struct FnDrain<F> {
    name: String,
    f: F,
}

/// Wrap a closure as a named [`Drainable`]
pub fn drain_fn<F, Fut>(name: impl Into<String>, f: F) -> FnDrain<F>
where
    F: Fn(DrainScope) -> Fut + Send + Sync,
    Fut: Future<Output = DrainResult> + Send + 'static,
{
    FnDrain {
        name: name.into(),
        f,
    }
}

#[async_trait]
impl<F, Fut> Drainable for FnDrain<F>
where
    F: Fn(DrainScope) -> Fut + Send + Sync,
    Fut: Future<Output = DrainResult> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn drain(&self, scope: DrainScope) -> DrainResult {
        (self.f)(scope).await
    }
}
