use crate::error::{Result as ServerErrorResult, ServerError};
use crate::routes::build_router;
use crate::state::AppState;
use crate::worker;

use gs_core::{Coordinator, Drainable, ShutdownReport, ShutdownTrigger, TaskDrain};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::net::TcpListener;

/// Bound but not yet running server
pub struct Server {
    config: gs_config::Config,
    listener: TcpListener,
    state: AppState,
}

impl Server {
    /// Bind the listener. `trigger` can start the shutdown from outside
    /// (the admin endpoint fires it too).
    pub async fn bind(config: gs_config::Config, trigger: ShutdownTrigger) -> ServerErrorResult<Self> {
        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr,
                source,
            })?;

        Ok(Self {
            config,
            listener,
            state: AppState::new(trigger),
        })
    }

    /// Actual bound address (important when port is 0 / auto-assigned)
    pub fn local_addr(&self) -> ServerErrorResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until a signal or the trigger fires, then drain the HTTP server
    /// and the worker and return the coordinator's report
    pub async fn run(self) -> ServerErrorResult<ShutdownReport> {
        let Self {
            config,
            listener,
            state,
        } = self;

        info!("Server listening on {}", listener.local_addr()?);

        let router = build_router(state.clone());
        let http = TaskDrain::spawn("http", move |stop| async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(stop.cancelled_owned())
                .await
        });

        let tick = Duration::from_millis(config.server.worker_tick_ms);
        let ticks = Arc::clone(&state.worker_ticks);
        let worker = TaskDrain::spawn("worker", move |stop| worker::run(tick, ticks, stop));

        let drainables: Vec<Arc<dyn Drainable>> = vec![Arc::new(http), Arc::new(worker)];
        let coordinator = Coordinator::from_config(&config.shutdown);

        info!("Server ready to accept connections");
        let report = coordinator.run(&state.trigger, &drainables).await?;

        Ok(report)
    }
}

/// Log the outcome of a shutdown. Per-drain failures were already logged by
/// the coordinator; this is the summary line the operator reads last.
pub fn log_report(report: &ShutdownReport) {
    if report.is_clean() {
        info!(
            "Graceful shutdown complete ({}), {} resource(s) drained",
            report.cause(),
            report.outcomes().len()
        );
        return;
    }

    let failed: Vec<&str> = report.failures().map(|o| o.name.as_str()).collect();
    warn!(
        "Shutdown finished ({}) with {} failed drain(s): {}",
        report.cause(),
        failed.len(),
        failed.join(", ")
    );
}
