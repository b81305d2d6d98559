//! Display sink capability and the label that implements it

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::timer::Color;

/// The UI-owned target of countdown updates. Only called from jobs posted
/// through a [`Dispatcher`](super::Dispatcher).
pub trait DisplaySink: Send {
    fn set_text(&mut self, text: &str);
    fn set_text_color(&mut self, color: Color);
}

/// What a label is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelContent {
    pub text: String,
    pub color: Color,
}

impl Default for LabelContent {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: Color::BLACK,
        }
    }
}

/// A text label. Clones share the same content so the host can read back
/// what the controller wrote.
#[derive(Debug, Clone)]
pub struct Label {
    name: Arc<str>,
    content: Arc<Mutex<LabelContent>>,
}

impl Label {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            content: Arc::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current text and color
    pub fn snapshot(&self) -> LabelContent {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DisplaySink for Label {
    fn set_text(&mut self, text: &str) {
        debug!(label = %self.name, "text -> {:?}", text);
        let mut content = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        content.text = text.to_string();
    }

    fn set_text_color(&mut self, color: Color) {
        debug!(label = %self.name, "color -> {}", color);
        let mut content = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        content.color = color;
    }
}
