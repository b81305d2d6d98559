//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::state::{AppError, AppState, WidgetSnapshot};
use super::responses::{ApiResponse, StatusResponse, HealthResponse};

fn status_for(e: &AppError) -> StatusCode {
    match e {
        AppError::UnknownWidget(_) => StatusCode::NOT_FOUND,
        AppError::Timer(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle POST /widgets/:name/tap - Activate a widget
pub async fn tap_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.tap(&name) {
        Ok(widget) => {
            info!("Tap endpoint called for {}", name);
            Ok(Json(ApiResponse::tapped(widget)))
        }
        Err(e @ AppError::UnknownWidget(_)) => {
            warn!("Tap rejected: {}", e);
            Err(status_for(&e))
        }
        Err(e) => {
            error!("Failed to tap {}: {}", name, e);
            Err(status_for(&e))
        }
    }
}

/// Handle GET /widgets/:name - Return what one widget is showing
pub async fn widget_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<WidgetSnapshot>, StatusCode> {
    state.snapshot(&name).map(Json).map_err(|e| {
        warn!("Failed to read widget {}: {}", name, e);
        status_for(&e)
    })
}

/// Handle GET /status - Return every widget and server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let widgets = match state.snapshots() {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to collect widget state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        widgets,
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
