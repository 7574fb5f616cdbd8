//! Byte-length validation for text fields under a configured encoding.

use super::encoding::TextEncoding;
use super::Verdict;

/// Validates text against an encoded byte budget.
///
/// Over-limit input is Intermediate rather than Invalid so the editor can
/// auto-correct it; text that cannot be encoded at all is rejected.
#[derive(Debug, Clone)]
pub struct ByteTextValidator {
    byte_limit: u32,
    encoding: TextEncoding,
}

impl ByteTextValidator {
    pub fn new(byte_limit: u32, encoding: TextEncoding) -> Self {
        Self {
            byte_limit,
            encoding,
        }
    }

    pub fn validate(&self, input: &str) -> Verdict {
        if input.is_empty() {
            return Verdict::Acceptable;
        }
        match self.encoding.byte_len(input) {
            Err(_) => Verdict::Invalid,
            Ok(len) if self.byte_limit == 0 || len <= self.byte_limit as usize => {
                Verdict::Acceptable
            }
            Ok(_) => Verdict::Intermediate,
        }
    }

    /// Truncate to the byte budget, then trim trailing bytes until the
    /// remainder decodes cleanly so no code point is ever split.
    ///
    /// `None` if the input cannot be encoded at all.
    pub fn fixup(&self, input: &str) -> Option<String> {
        let encoded = self.encoding.encode(input).ok()?;
        if self.byte_limit == 0 || encoded.len() <= self.byte_limit as usize {
            return Some(input.to_string());
        }
        let mut truncated = &encoded[..self.byte_limit as usize];
        while !truncated.is_empty() {
            if let Some(text) = self.encoding.decode(truncated) {
                return Some(text);
            }
            truncated = &truncated[..truncated.len() - 1];
        }
        Some(String::new())
    }
}
