//! Incremental input validation for constrained fields.
//!
//! Each validator consumes the full candidate text on every keystroke and
//! answers with a ternary verdict: commit-ready, keep-editing, or reject
//! the keystroke outright. The rules reproduce the width/precision/byte
//! conventions of the storage back-ends the panel edits, including legacy
//! fixed-width columns where the sign shares the digit budget and string
//! columns are capped by encoded byte length.

mod constraint;
mod decimal;
mod encoding;
mod integer;
mod text;

pub use constraint::{ConstraintKind, LengthConstraint};
pub use decimal::{max_column_value, DecimalValidator};
pub use encoding::{EncodeError, TextEncoding};
pub use integer::IntegerValidator;
pub use text::ByteTextValidator;

/// Ternary validation verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Commit-ready
    Acceptable,
    /// Syntactically plausible but not committable yet; may be auto-corrected
    Intermediate,
    /// Reject the keystroke
    Invalid,
}

/// One validator per constraint kind, selected at construction.
///
/// Legacy/non-legacy behavior is a policy flag inside each variant rather
/// than a separate validator type.
#[derive(Debug, Clone)]
pub enum LengthValidator {
    Integer(IntegerValidator),
    Decimal(DecimalValidator),
    ByteText(ByteTextValidator),
}

impl LengthValidator {
    /// Build the validator matching a field's constraint
    pub fn for_constraint(constraint: &LengthConstraint) -> Self {
        match constraint.kind {
            ConstraintKind::Integer => LengthValidator::Integer(IntegerValidator::new(
                constraint.total_digits,
                constraint.legacy_mode,
            )),
            ConstraintKind::Decimal => LengthValidator::Decimal(DecimalValidator::new(
                constraint.total_digits,
                constraint.fraction_digits,
                constraint.legacy_mode,
            )),
            ConstraintKind::ByteText => LengthValidator::ByteText(ByteTextValidator::new(
                constraint.byte_limit,
                constraint.encoding,
            )),
        }
    }

    pub fn validate(&self, input: &str) -> Verdict {
        match self {
            LengthValidator::Integer(v) => v.validate(input),
            LengthValidator::Decimal(v) => v.validate(input),
            LengthValidator::ByteText(v) => v.validate(input),
        }
    }

    /// Best-effort correction of Intermediate input; `None` when no
    /// correction exists (unencodable text) or the variant has no fixup
    pub fn fixup(&self, input: &str) -> Option<String> {
        match self {
            LengthValidator::Integer(_) => None,
            LengthValidator::Decimal(v) => Some(v.fixup(input)),
            LengthValidator::ByteText(v) => v.fixup(input),
        }
    }

    pub fn supports_fixup(&self) -> bool {
        !matches!(self, LengthValidator::Integer(_))
    }
}
