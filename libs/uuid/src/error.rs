//! Error types for UUID generation, parsing, and JSON decoding.

use thiserror::Error;

/// Errors that can occur when generating, parsing, or decoding UUIDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UuidError {
    /// The random source could not produce bytes.
    #[error("random source failed: {0}")]
    RandomSource(String),

    /// The text is not a canonical hyphenated UUID.
    #[error("invalid UUID '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// The JSON value is not a quoted string.
    #[error("invalid UUID in JSON, {input} is not a valid JSON string")]
    Format { input: String },
}

impl UuidError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        UuidError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true if the input text was not a canonical UUID.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, UuidError::Parse { .. })
    }

    /// Returns true if the JSON input was not a string.
    pub fn is_format_error(&self) -> bool {
        matches!(self, UuidError::Format { .. })
    }
}
