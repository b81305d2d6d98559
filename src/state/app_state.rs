//! Main application state management

use std::{
    collections::BTreeMap,
    sync::{Mutex, PoisonError},
    time::Instant,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    error::TimerError,
    timer::{ActivationMode, Color, Phase},
    ui::Label,
    widgets::Widget,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no widget named {0}")]
    UnknownWidget(String),

    #[error(transparent)]
    Timer(#[from] TimerError),
}

/// What a widget looks like right now, as reported by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub name: String,
    pub text: String,
    pub color: Color,
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
    pub mode: ActivationMode,
}

struct WidgetEntry {
    widget: Box<dyn Widget>,
    label: Label,
}

/// Main application state: the widgets on screen and server metadata
pub struct AppState {
    widgets: BTreeMap<String, WidgetEntry>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create an empty AppState
    pub fn new(port: u16, host: String) -> Self {
        Self {
            widgets: BTreeMap::new(),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        }
    }

    /// Put a widget on screen. `label` must be the sink the widget writes to.
    pub fn add_widget(&mut self, widget: Box<dyn Widget>, label: Label) {
        let name = widget.controller().name().to_string();
        info!("Registered widget {}", name);
        self.widgets.insert(name, WidgetEntry { widget, label });
    }

    pub fn widget_names(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }

    /// Deliver a tap to the named widget and report its new state
    pub fn tap(&self, name: &str) -> Result<WidgetSnapshot, AppError> {
        let entry = self.entry(name)?;
        let state = entry.widget.tap()?;
        info!("Tap on {} -> {:?} at {}s", name, state.phase, state.remaining_seconds);

        self.record_action(format!("tap:{}", name));
        self.snapshot(name)
    }

    pub fn snapshot(&self, name: &str) -> Result<WidgetSnapshot, AppError> {
        let entry = self.entry(name)?;
        let controller = entry.widget.controller();
        let state = controller.state()?;
        let content = entry.label.snapshot();

        Ok(WidgetSnapshot {
            name: name.to_string(),
            text: content.text,
            color: content.color,
            phase: state.phase,
            remaining_seconds: state.remaining_seconds,
            total_seconds: controller.config().total_seconds(),
            mode: controller.mode(),
        })
    }

    pub fn snapshots(&self) -> Result<Vec<WidgetSnapshot>, AppError> {
        self.widgets.keys().map(|name| self.snapshot(name)).collect()
    }

    /// Cancel every running countdown, as when the owning screen goes away
    pub fn shutdown_widgets(&self) {
        for (name, entry) in &self.widgets {
            if let Err(e) = entry.widget.shutdown() {
                warn!("Failed to shut down widget {}: {}", name, e);
            }
        }
        info!("All widgets shut down");
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match &*self.last_action.lock().unwrap_or_else(PoisonError::into_inner) {
            Some((action, at)) => (Some(action.clone()), Some(*at)),
            None => (None, None),
        }
    }

    fn record_action(&self, action: String) {
        let mut last = self.last_action.lock().unwrap_or_else(PoisonError::into_inner);
        *last = Some((action, Utc::now()));
    }

    fn entry(&self, name: &str) -> Result<&WidgetEntry, AppError> {
        self.widgets
            .get(name)
            .ok_or_else(|| AppError::UnknownWidget(name.to_string()))
    }
}
