//! Error types for workout text ingestion.

use thiserror::Error;

/// Errors that abort a parse. Field-level problems never produce these;
/// they fall back to defaults instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input was empty or contained only whitespace.
    #[error("workout text is empty")]
    EmptyInput,

    /// No input was supplied at all.
    #[error("no workout text was provided")]
    MissingInput,

    /// Input bytes are not UTF-8 text.
    #[error("workout input is not valid UTF-8 text: {0}")]
    NotText(#[from] std::str::Utf8Error),

    /// The upstream document decoder failed.
    #[error("failed to decode workout document: {message}")]
    Decode { message: String },
}

impl ParseError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, ParseError>;
