//! Width/precision/byte-limit rules for a single field.
//!
//! A `LengthConstraint` captures the storage back-end's column rules in a
//! form the validators can act on. Legacy back-ends (fixed-width tabular
//! formats) reserve exactly `total_digits` character slots per column, so a
//! minus sign consumes one of them; modern back-ends grant the sign for free.

use serde::{Deserialize, Serialize};

use super::encoding::TextEncoding;

/// Which family of rules applies to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    Integer,
    Decimal,
    ByteText,
}

/// Storage rules for one field.
///
/// `total_digits == 0` (numeric) or `byte_limit == 0` (text) means the
/// field is unconstrained.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthConstraint {
    pub kind: ConstraintKind,
    /// Total digit budget for numeric fields (0 = unconstrained)
    pub total_digits: u32,
    /// Digits after the decimal point (Decimal only)
    pub fraction_digits: u32,
    /// Encoded byte budget for text fields (0 = unconstrained)
    pub byte_limit: u32,
    /// Fixed-width storage: the sign shares the digit budget and text is
    /// truncated byte-exactly
    pub legacy_mode: bool,
    /// Target encoding for byte-limited text
    pub encoding: TextEncoding,
}

impl LengthConstraint {
    /// Integer field with a digit budget (`0` = unconstrained)
    pub fn integer(total_digits: u32, legacy_mode: bool) -> Self {
        Self {
            kind: ConstraintKind::Integer,
            total_digits,
            fraction_digits: 0,
            byte_limit: 0,
            legacy_mode,
            encoding: TextEncoding::Utf8,
        }
    }

    /// Decimal field with digit/precision budget.
    ///
    /// `fraction_digits` is clamped into the total budget.
    pub fn decimal(total_digits: u32, fraction_digits: u32, legacy_mode: bool) -> Self {
        Self {
            kind: ConstraintKind::Decimal,
            total_digits,
            fraction_digits: fraction_digits.min(total_digits),
            byte_limit: 0,
            legacy_mode,
            encoding: TextEncoding::Utf8,
        }
    }

    /// Byte-capped text field under the given encoding (`0` = unconstrained)
    pub fn byte_text(byte_limit: u32, encoding: TextEncoding, legacy_mode: bool) -> Self {
        Self {
            kind: ConstraintKind::ByteText,
            total_digits: 0,
            fraction_digits: 0,
            byte_limit,
            legacy_mode,
            encoding,
        }
    }

    /// True when the field carries no effective limit
    pub fn is_unconstrained(&self) -> bool {
        match self.kind {
            ConstraintKind::Integer | ConstraintKind::Decimal => self.total_digits == 0,
            ConstraintKind::ByteText => self.byte_limit == 0,
        }
    }
}
