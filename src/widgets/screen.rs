//! Countdown embedded directly in a screen

use std::sync::Arc;

use crate::{
    error::TimerError,
    timer::{ActivationMode, Color, CountdownController, TimerConfig},
    ui::{DisplaySink, Dispatcher},
};

use super::{with_fixed_bands, Widget};

pub const SCREEN_SECONDS: i64 = 10;

/// A ten second countdown that shows `Click` until tapped. Tapping again
/// at any point starts over.
pub struct ScreenTimer {
    controller: CountdownController,
}

impl ScreenTimer {
    pub fn config() -> Result<TimerConfig, TimerError> {
        let config = TimerConfig::new(SCREEN_SECONDS)?
            .with_start_text("Click")
            .with_end_text("Done")
            .with_end_text_color(Color::BLACK);
        Ok(with_fixed_bands(config))
    }

    pub fn new(
        name: &str,
        sink: impl DisplaySink + 'static,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Result<Self, TimerError> {
        let controller =
            CountdownController::new(name, Self::config()?, ActivationMode::Restart, sink, dispatcher);
        Ok(Self { controller })
    }
}

impl Widget for ScreenTimer {
    fn controller(&self) -> &CountdownController {
        &self.controller
    }
}
