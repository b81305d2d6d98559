//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{state::WidgetSnapshot, timer::Phase};

/// API response structure for tap endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: Phase,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub widget: WidgetSnapshot,
}

impl ApiResponse {
    /// Create a tap response, describing what the tap did
    pub fn tapped(widget: WidgetSnapshot) -> Self {
        let message = match widget.phase {
            Phase::Running => format!("{} counting down from {}s", widget.name, widget.total_seconds),
            Phase::Idle => format!("{} paused at {}s", widget.name, widget.remaining_seconds),
            Phase::Cancelled => format!("{} cancelled", widget.name),
            Phase::Completed => format!("{} finished", widget.name),
        };

        Self {
            status: widget.phase,
            message,
            timestamp: Utc::now(),
            widget,
        }
    }
}

/// Status response covering every widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub widgets: Vec<WidgetSnapshot>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
