use crate::DrainScope;
use crate::error::DrainResult;

use async_trait::async_trait;

/// A resource that can shut itself down within a bounded scope.
///
/// The coordinator only borrows the resource for the duration of the call;
/// it never owns the resource's lifecycle.
#[async_trait]
pub trait Drainable: Send + Sync {
    /// Label used when reporting the outcome
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Drain now, respecting `scope`. Implementations are expected to give
    /// up once `scope.cancelled()` resolves.
    async fn drain(&self, scope: DrainScope) -> DrainResult;
}
