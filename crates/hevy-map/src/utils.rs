//! Utility functions for name resolution.

/// Normalizes an exercise name for lookup: trims and lowercases.
///
/// Inner whitespace is kept as written.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}
