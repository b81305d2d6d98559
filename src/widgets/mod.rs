//! Widget adapters
//!
//! Three ways of putting a countdown on a label. Each one only builds a
//! [`TimerConfig`] and an activation mode; the countdown itself is always the
//! shared [`CountdownController`].

pub mod attributes;
pub mod label;
pub mod screen;
pub mod view;

pub use attributes::TimerAttributes;
pub use label::{LabelTimer, LabelTimerOptions};
pub use screen::ScreenTimer;
pub use view::TimerView;

use crate::{
    error::TimerError,
    timer::{Color, CountdownController, TimerConfig, TimerState, WarningRule},
};

/// Anything tappable that owns a countdown
pub trait Widget: Send + Sync {
    fn controller(&self) -> &CountdownController;

    /// Feed a tap into the controller
    fn tap(&self) -> Result<TimerState, TimerError> {
        self.controller().on_activate()
    }

    /// Tear down with the owning screen
    fn shutdown(&self) -> Result<(), TimerError> {
        self.controller().shutdown()
    }
}

/// The fixed yellow `5..=9` and red `0..=4` bands used by the screen and
/// label timers, whatever their length
fn with_fixed_bands(config: TimerConfig) -> TimerConfig {
    config
        .with_rule(WarningRule::new(5..=9, Color::YELLOW))
        .with_rule(WarningRule::new(0..=4, Color::RED))
}
