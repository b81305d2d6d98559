//! Host state module
//!
//! The registry of widgets the host drives, plus server metadata.

pub mod app_state;

// Re-export main types
pub use app_state::{AppError, AppState, WidgetSnapshot};
