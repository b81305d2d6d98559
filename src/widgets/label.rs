//! Countdown wrapped around an existing label

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    error::TimerError,
    timer::{ActivationMode, Color, CountdownController, TimerConfig},
    ui::{DisplaySink, Dispatcher},
};

use super::{with_fixed_bands, Widget};

/// Constructor parameters for [`LabelTimer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelTimerOptions {
    pub seconds: i64,
    pub start_text: String,
    pub end_text: String,
}

impl Default for LabelTimerOptions {
    fn default() -> Self {
        Self {
            seconds: 60,
            start_text: String::new(),
            end_text: String::new(),
        }
    }
}

/// Turns a plain label into a tap-to-start countdown. Tapping while it runs
/// starts over.
pub struct LabelTimer {
    controller: CountdownController,
}

impl LabelTimer {
    pub fn config(options: &LabelTimerOptions) -> Result<TimerConfig, TimerError> {
        let config = TimerConfig::new(options.seconds)?
            .with_start_text(options.start_text.as_str())
            .with_end_text(options.end_text.as_str())
            .with_end_text_color(Color::BLACK);
        Ok(with_fixed_bands(config))
    }

    pub fn new(
        name: &str,
        options: &LabelTimerOptions,
        sink: impl DisplaySink + 'static,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Result<Self, TimerError> {
        let config = Self::config(options)?;
        let controller =
            CountdownController::new(name, config, ActivationMode::Restart, sink, dispatcher);
        Ok(Self { controller })
    }
}

impl Widget for LabelTimer {
    fn controller(&self) -> &CountdownController {
        &self.controller
    }
}
