//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{Action, AppState, Snapshot};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Dispatch an action and wrap its report, logging failures
async fn run_action(
    state: &AppState,
    action: Action,
    message: &str,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.dispatch(action).await {
        Ok(report) => {
            info!("{} endpoint called - {}", action.name(), message);
            Ok(Json(ApiResponse::from_report(message.to_string(), report)))
        }
        Err(e) => {
            error!("Failed to apply '{}': {}", action.name(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /toggle - Start a new set or pause the running one
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_action(&state, Action::ToggleStart, "Stopwatch toggled").await
}

/// Handle POST /reset - Clear the accumulated time (ignored while running)
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_action(&state, Action::Reset, "Reset requested").await
}

/// Handle POST /sets/reset - Clear the set count
pub async fn reset_sets_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_action(&state, Action::ResetSetsCount, "Set count reset").await
}

/// Handle GET /snapshot - Return the four-field snapshot
pub async fn snapshot_handler(State(state): State<Arc<AppState>>) -> Result<Json<Snapshot>, StatusCode> {
    match state.dispatch(Action::Inspect).await {
        Ok(report) => Ok(Json(report.snapshot)),
        Err(e) => {
            error!("Failed to take snapshot: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /restore - Replace the state with the given snapshot
pub async fn restore_handler(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<ApiResponse>, StatusCode> {
    run_action(&state, Action::Restore(snapshot), "Snapshot restored").await
}

/// Handle POST /lifecycle/stop - Host went to the background
pub async fn host_stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_action(&state, Action::HostStop, "Host stopped").await
}

/// Handle POST /lifecycle/start - Host came back to the foreground
pub async fn host_start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_action(&state, Action::HostStart, "Host started").await
}

/// Handle POST /lifecycle/recreate - Tear down and rebuild the controller from its snapshot
pub async fn recreate_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_action(&state, Action::Recreate, "Stopwatch recreated").await
}

/// Handle GET /status - Return current stopwatch status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let stopwatch = match state.dispatch(Action::Inspect).await {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to get stopwatch state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        stopwatch,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
