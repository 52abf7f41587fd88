//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/toggle", post(toggle_handler))
        .route("/reset", post(reset_handler))
        .route("/sets/reset", post(reset_sets_handler))
        .route("/snapshot", get(snapshot_handler))
        .route("/restore", post(restore_handler))
        // Host lifecycle events
        .route("/lifecycle/stop", post(host_stop_handler))
        .route("/lifecycle/start", post(host_start_handler))
        .route("/lifecycle/recreate", post(recreate_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
