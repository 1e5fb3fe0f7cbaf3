use crate::state::AppState;
use crate::{admin, health};

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/admin/shutdown", post(admin::shutdown_handler))
        .with_state(state)
}
