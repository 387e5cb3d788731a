//! Lenient numeric parsing for scanned workout fields.
//!
//! Scanned logs often carry units or stray characters next to the numbers
//! (`"8 reps"`, `"135lbs"`). Each token is read from its leading numeric
//! prefix; tokens without one, or with a negative value, yield `None`.

use std::sync::LazyLock;

use regex::Regex;

static REAL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid real prefix regex")
});

/// Parse a non-negative integer from the leading digits of `token`.
///
/// - `"8"` and `"8 reps"` give `Some(8)`
/// - `"8.5"` gives `Some(8)`
/// - `"-3"`, `"x8"` and `""` give `None`
pub fn parse_unsigned(token: &str) -> Option<u32> {
    let trimmed = token.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }
    unsigned[..end].parse().ok()
}

/// Parse a non-negative, finite real from the leading numeric prefix of `token`.
pub fn parse_real(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    let prefix = REAL_PREFIX_RE.find(trimmed)?.as_str();
    let value: f64 = prefix.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    // Normalise "-0" so it serializes as 0.
    Some(if value == 0.0 { 0.0 } else { value })
}

/// Parse a comma-separated list of integers, dropping tokens that do not parse.
pub fn parse_unsigneds(list: &str) -> Vec<u32> {
    list.split(',').filter_map(parse_unsigned).collect()
}

/// Parse a comma-separated list of reals, dropping tokens that do not parse.
pub fn parse_reals(list: &str) -> Vec<f64> {
    list.split(',').filter_map(parse_real).collect()
}
