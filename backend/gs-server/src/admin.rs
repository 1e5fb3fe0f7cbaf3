//! Administrative endpoints for server management.

use crate::state::AppState;

use axum::{Json, extract::State, http::StatusCode};
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShutdownResponse {
    pub status: String,
    pub message: String,
}

/// Graceful shutdown endpoint.
///
/// Fires the shutdown trigger; the coordinator then drains the HTTP server
/// and the worker. The response is sent before the listener stops.
pub async fn shutdown_handler(State(state): State<AppState>) -> (StatusCode, Json<ShutdownResponse>) {
    if state.trigger.is_cancelled() {
        return (
            StatusCode::CONFLICT,
            Json(ShutdownResponse {
                status: "draining".to_string(),
                message: "Shutdown already in progress".to_string(),
            }),
        );
    }

    info!("Graceful shutdown requested via HTTP");
    state.trigger.cancel_with("admin request");

    (
        StatusCode::ACCEPTED,
        Json(ShutdownResponse {
            status: "accepted".to_string(),
            message: "Shutdown started".to_string(),
        }),
    )
}
