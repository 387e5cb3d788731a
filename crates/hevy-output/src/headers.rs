//! Request headers for the Hevy API.

use std::fmt;

/// Header carrying the Hevy API key.
pub const API_KEY_HEADER: &str = "api-key";
/// Content type of every payload.
pub const CONTENT_TYPE_JSON: &str = "application/json";

const REDACTED: &str = "[REDACTED]";

/// Headers for an outbound Hevy request.
///
/// `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    api_key: String,
}

impl RequestHeaders {
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`](crate::ConfigError::MissingApiKey)
    /// when the key is absent or blank. There is no default key.
    pub fn new(api_key: Option<&str>) -> Result<Self, crate::ConfigError> {
        match api_key.map(str::trim) {
            Some(key) if !key.is_empty() => Ok(Self {
                api_key: key.to_string(),
            }),
            _ => Err(crate::ConfigError::MissingApiKey),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Header name/value pairs in send order.
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (API_KEY_HEADER, self.api_key.as_str()),
            ("Content-Type", CONTENT_TYPE_JSON),
        ]
    }

    /// Header pairs with the key replaced, for logs and previews.
    pub fn redacted_pairs(&self) -> [(&'static str, &'static str); 2] {
        [(API_KEY_HEADER, REDACTED), ("Content-Type", CONTENT_TYPE_JSON)]
    }
}

impl fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHeaders")
            .field("api_key", &REDACTED)
            .finish()
    }
}
