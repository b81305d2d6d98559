//! Countdown timer core
//!
//! Configuration, formatting, state, and the controller that runs the
//! cancellable countdown loop.

pub mod color;
pub mod config;
pub mod controller;
pub mod format;
pub mod state;

// Re-export main types
pub use color::Color;
pub use config::{TimerConfig, WarningRule};
pub use controller::{CountdownController, TICK};
pub use format::format_countdown;
pub use state::{ActivationMode, Phase, RunId, RunSeq, TimerState};
