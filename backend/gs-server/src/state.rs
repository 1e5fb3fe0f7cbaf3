use gs_core::ShutdownTrigger;

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

/// Shared state handed to every route
#[derive(Clone)]
pub struct AppState {
    /// Firing this starts the coordinated shutdown
    pub trigger: ShutdownTrigger,
    pub worker_ticks: Arc<AtomicU64>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(trigger: ShutdownTrigger) -> Self {
        Self {
            trigger,
            worker_ticks: Arc::new(AtomicU64::new(0)),
            started_at: Instant::now(),
        }
    }
}
