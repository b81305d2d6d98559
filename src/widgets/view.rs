//! Self-contained timer widget configured through attributes

use std::sync::Arc;

use crate::{
    error::TimerError,
    timer::{ActivationMode, CountdownController, TimerState},
    ui::{DisplaySink, Dispatcher},
};

use super::{TimerAttributes, Widget};

/// A countdown whose length, warning bands, texts and colors all come from
/// [`TimerAttributes`]. A tap while running pauses it; the next tap starts
/// over from the full length.
pub struct TimerView {
    controller: CountdownController,
    medium_warning: i64,
    low_warning: i64,
}

impl TimerView {
    pub fn new(
        name: &str,
        attributes: &TimerAttributes,
        sink: impl DisplaySink + 'static,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Result<Self, TimerError> {
        let config = attributes.to_config()?;
        let controller =
            CountdownController::new(name, config, ActivationMode::Toggle, sink, dispatcher);

        Ok(Self {
            controller,
            medium_warning: attributes.medium_warning(),
            low_warning: attributes.low_warning(),
        })
    }

    /// Start, pause, or restart depending on the current phase
    pub fn toggle(&self) -> Result<TimerState, TimerError> {
        self.controller.on_activate()
    }

    pub fn medium_warning(&self) -> i64 {
        self.medium_warning
    }

    pub fn low_warning(&self) -> i64 {
        self.low_warning
    }
}

impl Widget for TimerView {
    fn controller(&self) -> &CountdownController {
        &self.controller
    }
}
