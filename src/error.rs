//! Error types shared by the timer and the widget adapters

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The countdown length must not be negative
    #[error("total seconds must be >= 0, got {0}")]
    InvalidTotalSeconds(i64),

    #[error("total seconds must be at most {max}, got {0}", max = u32::MAX)]
    TotalSecondsOutOfRange(i64),

    #[error("unknown timer attribute: {0}")]
    UnknownAttribute(String),

    #[error("invalid value for attribute {name}: {value}")]
    InvalidAttribute { name: String, value: String },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Runs are spawned on the caller's tokio runtime
    #[error("activation requires a tokio runtime")]
    NoRuntime,

    /// A thread panicked while holding the controller lock
    #[error("timer state lock poisoned")]
    Poisoned,
}
