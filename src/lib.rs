//! Countdown Label - tap-to-start countdown timers for text labels
//!
//! A label starts counting down when tapped, changes color as it passes
//! warning thresholds, and shows an end message at zero. One controller
//! drives the countdown; widget adapters configure it and a dispatcher
//! carries every display write onto the thread that owns the label.

pub mod config;
pub mod error;
pub mod timer;
pub mod ui;
pub mod widgets;
pub mod state;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use timer::{ActivationMode, Color, CountdownController, Phase, TimerConfig, TimerState};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
