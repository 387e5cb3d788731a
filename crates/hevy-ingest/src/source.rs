//! Boundary to the document decoder that supplies raw text.

use crate::error::Result;

/// Something that can hand over decoded workout text.
///
/// Implementations wrap whatever decoder produced the text (PDF, OCR, a
/// plain file). They report their own failures as
/// [`ParseError::Decode`](crate::ParseError::Decode); the parser calls
/// `read_text` once and does not retry.
pub trait TextSource {
    fn read_text(&self) -> Result<String>;
}

impl TextSource for str {
    fn read_text(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl TextSource for String {
    fn read_text(&self) -> Result<String> {
        Ok(self.clone())
    }
}
