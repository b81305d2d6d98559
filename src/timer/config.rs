//! Immutable timer configuration and warning rules

use std::ops::RangeInclusive;

use crate::error::TimerError;

use super::Color;

/// A threshold range of remaining seconds, both ends inclusive, and the
/// color the label takes while the countdown is inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningRule {
    pub range: RangeInclusive<i64>,
    pub color: Color,
}

impl WarningRule {
    pub fn new(range: RangeInclusive<i64>, color: Color) -> Self {
        Self { range, color }
    }

    pub fn contains(&self, timer: u32) -> bool {
        self.range.contains(&i64::from(timer))
    }
}

/// Everything the controller needs to know about one countdown, resolved
/// once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    total_seconds: u32,
    start_text: String,
    end_text: String,
    start_text_color: Color,
    end_text_color: Color,
    normal_color: Color,
    /// Kept sorted most-urgent-first (lowest bound first)
    rules: Vec<WarningRule>,
}

impl TimerConfig {
    /// Create a configuration with empty warning rules, `Start`/`Done` texts
    /// and black everywhere. Negative lengths are rejected.
    pub fn new(total_seconds: i64) -> Result<Self, TimerError> {
        if total_seconds < 0 {
            return Err(TimerError::InvalidTotalSeconds(total_seconds));
        }
        let total_seconds = u32::try_from(total_seconds)
            .map_err(|_| TimerError::TotalSecondsOutOfRange(total_seconds))?;

        Ok(Self {
            total_seconds,
            start_text: "Start".to_string(),
            end_text: "Done".to_string(),
            start_text_color: Color::BLACK,
            end_text_color: Color::BLACK,
            normal_color: Color::BLACK,
            rules: Vec::new(),
        })
    }

    pub fn with_start_text(mut self, text: impl Into<String>) -> Self {
        self.start_text = text.into();
        self
    }

    pub fn with_end_text(mut self, text: impl Into<String>) -> Self {
        self.end_text = text.into();
        self
    }

    pub fn with_start_text_color(mut self, color: Color) -> Self {
        self.start_text_color = color;
        self
    }

    pub fn with_end_text_color(mut self, color: Color) -> Self {
        self.end_text_color = color;
        self
    }

    pub fn with_normal_color(mut self, color: Color) -> Self {
        self.normal_color = color;
        self
    }

    pub fn with_rule(mut self, rule: WarningRule) -> Self {
        self.rules.push(rule);
        self.rules.sort_by_key(|rule| *rule.range.start());
        self
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn start_text(&self) -> &str {
        &self.start_text
    }

    pub fn end_text(&self) -> &str {
        &self.end_text
    }

    pub fn start_text_color(&self) -> Color {
        self.start_text_color
    }

    pub fn end_text_color(&self) -> Color {
        self.end_text_color
    }

    pub fn normal_color(&self) -> Color {
        self.normal_color
    }

    pub fn rules(&self) -> &[WarningRule] {
        &self.rules
    }

    /// Color for a tick: the first (most urgent) matching rule, else the
    /// normal color
    pub fn color_for(&self, timer: u32) -> Color {
        self.rules
            .iter()
            .find(|rule| rule.contains(timer))
            .map(|rule| rule.color)
            .unwrap_or(self.normal_color)
    }
}
