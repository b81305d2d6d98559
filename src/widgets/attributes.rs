//! Styled attributes for the self-contained timer widget

use serde::{Deserialize, Serialize};

use crate::{
    error::TimerError,
    timer::{Color, TimerConfig, WarningRule},
};

pub const DEFAULT_START_TIME: i64 = 60;
pub const DEFAULT_START_TEXT: &str = "Start";
pub const DEFAULT_END_TEXT: &str = "Done";

/// Externally supplied widget attributes. Anything left unset falls back to
/// its default when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerAttributes {
    pub start_time: Option<i64>,
    pub normal_color: Option<Color>,
    pub medium_warning: Option<i64>,
    pub medium_warning_color: Option<Color>,
    pub low_warning: Option<i64>,
    pub low_warning_color: Option<Color>,
    pub start_text: Option<String>,
    pub start_text_color: Option<Color>,
    pub end_text: Option<String>,
    pub end_text_color: Option<Color>,
}

impl TimerAttributes {
    /// Build attributes from `name`/`value` pairs, e.g. `("start_time", "30")`
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, TimerError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut attributes = Self::default();
        for (name, value) in pairs {
            attributes.set(name.as_ref(), value.as_ref())?;
        }
        Ok(attributes)
    }

    /// Set one attribute from its string form
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), TimerError> {
        match name {
            "start_time" => self.start_time = Some(parse_int(name, value)?),
            "medium_warning" => self.medium_warning = Some(parse_int(name, value)?),
            "low_warning" => self.low_warning = Some(parse_int(name, value)?),
            "normal_color" => self.normal_color = Some(parse_color(name, value)?),
            "medium_warning_color" => self.medium_warning_color = Some(parse_color(name, value)?),
            "low_warning_color" => self.low_warning_color = Some(parse_color(name, value)?),
            "start_text_color" => self.start_text_color = Some(parse_color(name, value)?),
            "end_text_color" => self.end_text_color = Some(parse_color(name, value)?),
            "start_text" => self.start_text = Some(value.to_string()),
            "end_text" => self.end_text = Some(value.to_string()),
            _ => return Err(TimerError::UnknownAttribute(name.to_string())),
        }
        Ok(())
    }

    pub fn start_time(&self) -> i64 {
        self.start_time.unwrap_or(DEFAULT_START_TIME)
    }

    /// Upper bound of the medium band, a fifth of the start time by default
    pub fn medium_warning(&self) -> i64 {
        self.medium_warning.unwrap_or(self.start_time() / 5)
    }

    /// Upper bound of the low band, a twentieth of the start time by default
    pub fn low_warning(&self) -> i64 {
        self.low_warning.unwrap_or(self.start_time() / 20)
    }

    /// Resolve into a timer configuration. The medium band covers
    /// `low_warning + 1 ..= medium_warning` and the low band
    /// `0 ..= low_warning`.
    pub fn to_config(&self) -> Result<TimerConfig, TimerError> {
        let low = self.low_warning();
        let medium = self.medium_warning();

        let config = TimerConfig::new(self.start_time())?
            .with_start_text(self.start_text.as_deref().unwrap_or(DEFAULT_START_TEXT))
            .with_end_text(self.end_text.as_deref().unwrap_or(DEFAULT_END_TEXT))
            .with_start_text_color(self.start_text_color.unwrap_or(Color::BLACK))
            .with_end_text_color(self.end_text_color.unwrap_or(Color::BLACK))
            .with_normal_color(self.normal_color.unwrap_or(Color::BLACK))
            .with_rule(WarningRule::new(
                low.saturating_add(1)..=medium,
                self.medium_warning_color.unwrap_or(Color::YELLOW),
            ))
            .with_rule(WarningRule::new(
                0..=low,
                self.low_warning_color.unwrap_or(Color::RED),
            ));

        Ok(config)
    }
}

fn parse_int(name: &str, value: &str) -> Result<i64, TimerError> {
    value.trim().parse().map_err(|_| TimerError::InvalidAttribute {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_color(name: &str, value: &str) -> Result<Color, TimerError> {
    value.parse().map_err(|_| TimerError::InvalidAttribute {
        name: name.to_string(),
        value: value.to_string(),
    })
}
