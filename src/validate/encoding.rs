//! Text encodings the byte-limited validator can measure against.
//!
//! Legacy fixed-width columns cap the *encoded* byte length, not the
//! character count, so the validator needs to encode candidate text and to
//! re-decode truncated byte prefixes without splitting a code point.

use thiserror::Error;

/// A character that cannot be represented in the target encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("character {ch:?} is not representable in {encoding}")]
pub struct EncodeError {
    pub ch: char,
    pub encoding: &'static str,
}

/// Supported target encodings for byte-limited text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
    Ascii,
}

impl TextEncoding {
    /// Resolve an encoding label as reported by the storage back-end.
    ///
    /// Unknown labels fall back to UTF-8 (the panel is best-effort display;
    /// a wrong byte count is preferable to refusing to edit).
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => TextEncoding::Latin1,
            "ascii" | "us-ascii" => TextEncoding::Ascii,
            "utf-8" | "utf8" => TextEncoding::Utf8,
            other => {
                tracing::debug!("unknown encoding label {:?}, assuming utf-8", other);
                TextEncoding::Utf8
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Ascii => "us-ascii",
        }
    }

    /// Encode `text`, failing on the first unmappable character
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, EncodeError> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Latin1 => text
                .chars()
                .map(|ch| {
                    u8::try_from(u32::from(ch)).map_err(|_| EncodeError {
                        ch,
                        encoding: self.name(),
                    })
                })
                .collect(),
            TextEncoding::Ascii => text
                .chars()
                .map(|ch| {
                    if ch.is_ascii() {
                        Ok(ch as u8)
                    } else {
                        Err(EncodeError {
                            ch,
                            encoding: self.name(),
                        })
                    }
                })
                .collect(),
        }
    }

    /// Decode a byte sequence; `None` if it is not valid in this encoding
    /// (for UTF-8 this includes a trailing partial code point)
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            TextEncoding::Ascii => {
                if bytes.is_ascii() {
                    Some(bytes.iter().map(|&b| char::from(b)).collect())
                } else {
                    None
                }
            }
        }
    }

    /// Encoded byte length, or an error for unmappable text
    pub fn byte_len(&self, text: &str) -> Result<usize, EncodeError> {
        match self {
            // No allocation needed for UTF-8
            TextEncoding::Utf8 => Ok(text.len()),
            _ => self.encode(text).map(|b| b.len()),
        }
    }
}
