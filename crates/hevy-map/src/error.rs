//! Error types for lookup table construction.

use thiserror::Error;

/// Errors from building or loading a lookup table.
///
/// Mapping itself never fails; only an invalid table does.
#[derive(Debug, Error)]
pub enum LookupError {
    /// A key normalizes to the empty string.
    #[error("lookup entry {position} has an empty key")]
    EmptyKey { position: usize },

    /// Two entries normalize to the same key.
    #[error("duplicate lookup key '{key}'")]
    DuplicateKey { key: String },

    /// Table JSON could not be parsed.
    #[error("invalid lookup table: {0}")]
    InvalidTable(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
