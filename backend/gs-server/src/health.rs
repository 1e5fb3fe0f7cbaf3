use crate::state::AppState;

use std::sync::atomic::Ordering;
use std::time::Duration;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - process status, including whether a shutdown has started
pub async fn health_check(State(state): State<AppState>) -> Response {
    let shutting_down = state.trigger.is_cancelled();
    let uptime = Duration::from_secs(state.started_at.elapsed().as_secs());

    let health = json!({
        "status": if shutting_down { "draining" } else { "healthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "uptime": humantime::format_duration(uptime).to_string(),
        "worker_ticks": state.worker_ticks.load(Ordering::Relaxed),
    });

    let status = if shutting_down {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (status, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}
