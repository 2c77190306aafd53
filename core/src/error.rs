//! Error types for cron expression parsing.
//!
//! Every failure is terminal: the first failing field aborts the whole parse
//! and the error is handed back to the caller unchanged.

use thiserror::Error;

/// Errors that can occur while parsing or expanding a cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    /// The caller supplied other than exactly one expression string.
    #[error("cron expression must be a single string (got {count} arguments)")]
    InvalidArgumentCount { count: usize },

    /// The expression did not split into six space-separated tokens.
    #[error("invalid cron format: expected 6 components, found {found}")]
    MalformedExpression { found: usize },

    /// One side of a range is not a valid integer.
    #[error("invalid range format \"{pattern}\": both start and end must be valid numbers")]
    MalformedRange { pattern: String },

    /// Range start exceeds range end.
    #[error("invalid range \"{pattern}\": start value ({start}) cannot be greater than end value ({end})")]
    InvertedRange { pattern: String, start: i64, end: i64 },

    /// A value or range endpoint lies outside the field's bounds.
    #[error("value {value} in pattern \"{pattern}\" is out of the allowed range ({lower}-{upper})")]
    OutOfBounds {
        pattern: String,
        value: i64,
        lower: u32,
        upper: u32,
    },

    /// Step increment is zero or negative.
    #[error("increment value {increment} in pattern \"{pattern}\" must be greater than 0")]
    NonPositiveIncrement { pattern: String, increment: i64 },

    /// The renderer was asked for a sequence whose start exceeds its end.
    #[error("start value ({start}) cannot be greater than end value ({end})")]
    InvalidRange { start: u32, end: u32 },

    /// A numeric token could not be read as an integer.
    #[error("invalid number \"{token}\" in pattern \"{pattern}\"")]
    InvalidNumber { pattern: String, token: String },

    /// A recognizer was asked to expand a pattern it does not accept.
    #[error("pattern \"{pattern}\" is not valid for the {grammar} grammar")]
    UnsupportedPattern {
        pattern: String,
        grammar: &'static str,
    },

    /// No grammar recognizes the field text.
    #[error("pattern \"{pattern}\" does not match any supported field syntax")]
    NoGrammarMatch { pattern: String },
}

/// Convenience alias for results with [`CronError`].
pub type Result<T> = std::result::Result<T, CronError>;
