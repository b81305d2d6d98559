//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    error::TimerError,
    widgets::{LabelTimerOptions, TimerAttributes},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-label")]
#[command(about = "Tap-to-start countdown labels driven over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Countdown length of the wrapped label, in seconds
    #[arg(long, default_value = "60", allow_negative_numbers = true)]
    pub label_seconds: i64,

    /// Text the wrapped label shows before its first tap
    #[arg(long, default_value = "")]
    pub label_start_text: String,

    /// Text the wrapped label shows when its countdown ends
    #[arg(long, default_value = "")]
    pub label_end_text: String,

    /// Attribute for the timer view, as name=value (repeatable)
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn label_options(&self) -> LabelTimerOptions {
        LabelTimerOptions {
            seconds: self.label_seconds,
            start_text: self.label_start_text.clone(),
            end_text: self.label_end_text.clone(),
        }
    }

    pub fn view_attributes(&self) -> Result<TimerAttributes, TimerError> {
        TimerAttributes::from_pairs(self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

fn parse_attr(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", raw))
}
