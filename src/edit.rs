//! Single-line constrained editor.
//!
//! Wraps one `LengthValidator` and owns the interactive correction loop:
//! the first programmatic population stores a baseline and is never
//! re-validated; once ready, every change is validated in full. Invalid
//! text silently reverts to the last known-good value (it only occurs
//! transiently mid-keystroke), and Intermediate text in legacy mode is
//! auto-corrected in place with the cursor clamped to the new length.

use crate::model::{str_to_bool, FieldDescriptor, FieldType, Value};
use crate::validate::{ConstraintKind, LengthValidator, Verdict};

/// What happened to a user change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Change happened before the editor was populated; not a user edit
    Ignored,
    /// Text accepted as commit-ready
    Accepted,
    /// Text accepted but not committable yet (mid-edit state)
    Pending,
    /// Text replaced by the validator's fixup
    Corrected,
    /// Text reverted to the last known-good value
    Reverted,
}

/// Single-line text input bound to at most one validator.
///
/// `None` validator means the field is either unconstrained or covered by
/// a plain character cap (`max_chars`), which suffices for non-legacy text
/// columns.
#[derive(Debug, Clone)]
pub struct ConstrainedEdit {
    validator: Option<LengthValidator>,
    max_chars: Option<usize>,
    legacy_mode: bool,
    text: String,
    cursor: usize,
    /// Last text proven Acceptable (or the populated baseline)
    last_good: String,
    /// Set by the first `populate`; changes before that are programmatic
    ready: bool,
    /// Re-entrancy guard around fixup rewrites
    updating: bool,
    /// True once the user actually changed something (no-op commit guard)
    dirty: bool,
}

impl ConstrainedEdit {
    pub fn with_validator(validator: LengthValidator, legacy_mode: bool) -> Self {
        Self {
            validator: Some(validator),
            max_chars: None,
            legacy_mode,
            text: String::new(),
            cursor: 0,
            last_good: String::new(),
            ready: false,
            updating: false,
            dirty: false,
        }
    }

    /// Plain character cap, no validation
    pub fn with_char_cap(max_chars: usize) -> Self {
        Self {
            validator: None,
            max_chars: Some(max_chars),
            legacy_mode: false,
            text: String::new(),
            cursor: 0,
            last_good: String::new(),
            ready: false,
            updating: false,
            dirty: false,
        }
    }

    /// No constraint at all
    pub fn unconstrained() -> Self {
        Self {
            validator: None,
            max_chars: None,
            legacy_mode: false,
            text: String::new(),
            cursor: 0,
            last_good: String::new(),
            ready: false,
            updating: false,
            dirty: false,
        }
    }

    /// Build the editor a field needs, per its constraint.
    ///
    /// Non-legacy byte-capped text skips the validator entirely: a host
    /// level character cap suffices there, only legacy fixed-byte columns
    /// need byte-accurate truncation mid-input.
    pub fn for_field(field: &FieldDescriptor) -> Self {
        let c = &field.constraint;
        match field.field_type {
            FieldType::Int | FieldType::Long | FieldType::Double => {
                Self::with_validator(LengthValidator::for_constraint(c), c.legacy_mode)
            }
            FieldType::Text => {
                if c.byte_limit == 0 {
                    Self::unconstrained()
                } else if c.legacy_mode {
                    Self::with_validator(LengthValidator::for_constraint(c), true)
                } else {
                    Self::with_char_cap(c.byte_limit as usize)
                }
            }
            _ => Self::unconstrained(),
        }
    }

    /// First programmatic population: stores the baseline without
    /// validating it and arms the editor for user input
    pub fn populate(&mut self, text: &str) {
        self.text = text.to_string();
        self.last_good = text.to_string();
        self.cursor = text.chars().count();
        self.ready = true;
        self.dirty = false;
    }

    /// Apply a user change (full candidate text plus cursor position)
    pub fn input(&mut self, text: &str, cursor: usize) -> EditOutcome {
        if !self.ready || self.updating {
            return EditOutcome::Ignored;
        }

        let Some(validator) = self.validator.clone() else {
            // Static clamp path
            let clamped = match self.max_chars {
                Some(max) if text.chars().count() > max => {
                    text.chars().take(max).collect::<String>()
                }
                _ => text.to_string(),
            };
            self.cursor = cursor.min(clamped.chars().count());
            self.text = clamped;
            self.last_good = self.text.clone();
            self.dirty = true;
            return EditOutcome::Accepted;
        };

        match validator.validate(text) {
            Verdict::Invalid => {
                // Transient mid-keystroke garbage: revert silently
                self.text = self.last_good.clone();
                self.cursor = self.cursor.min(self.text.chars().count());
                EditOutcome::Reverted
            }
            Verdict::Intermediate => {
                if self.legacy_mode && validator.supports_fixup() && !text.is_empty() {
                    self.updating = true;
                    let outcome = match validator.fixup(text) {
                        Some(fixed) => {
                            // Clamp the cursor for mid-text insertions
                            self.cursor = cursor.min(fixed.chars().count());
                            self.text = fixed.clone();
                            self.last_good = fixed;
                            self.dirty = true;
                            EditOutcome::Corrected
                        }
                        None => {
                            self.text = self.last_good.clone();
                            self.cursor = self.cursor.min(self.text.chars().count());
                            EditOutcome::Reverted
                        }
                    };
                    self.updating = false;
                    outcome
                } else {
                    self.text = text.to_string();
                    self.cursor = cursor.min(self.text.chars().count());
                    self.dirty = true;
                    EditOutcome::Pending
                }
            }
            Verdict::Acceptable => {
                self.text = text.to_string();
                self.cursor = cursor.min(self.text.chars().count());
                self.last_good = text.to_string();
                self.dirty = true;
                EditOutcome::Accepted
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the user changed something; untouched editors commit
    /// nothing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the current text is commit-ready
    pub fn is_committable(&self) -> bool {
        match &self.validator {
            Some(v) => v.validate(&self.text) == Verdict::Acceptable,
            None => true,
        }
    }

    /// Empty text commits as null
    pub fn is_null(&self) -> bool {
        self.text.is_empty()
    }

    /// Parse the current text into a typed value for commit.
    ///
    /// `None` means the text does not parse for the field type and the
    /// commit is skipped (mirrors the transient-invalid taxonomy: never a
    /// surfaced error).
    pub fn commit_value(&self, field_type: FieldType) -> Option<Value> {
        if self.text.is_empty() {
            return Some(Value::Null);
        }
        let text = self.text.as_str();
        match field_type {
            FieldType::Bool => Some(Value::Bool(str_to_bool(text))),
            FieldType::Int | FieldType::Long => text.parse().ok().map(Value::Int),
            FieldType::Double => text.parse().ok().map(Value::Double),
            FieldType::Date => text.parse().ok().map(Value::Date),
            FieldType::Time => text.parse().ok().map(Value::Time),
            FieldType::DateTime => chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(Value::DateTime),
            _ => Some(Value::Text(text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{LengthConstraint, TextEncoding};

    fn integer_edit(digits: u32, legacy: bool) -> ConstrainedEdit {
        let c = LengthConstraint::integer(digits, legacy);
        ConstrainedEdit::with_validator(LengthValidator::for_constraint(&c), legacy)
    }

    #[test]
    fn test_not_ready_ignores_changes() {
        let mut edit = integer_edit(2, false);
        assert_eq!(edit.input("junk", 4), EditOutcome::Ignored);
        assert_eq!(edit.text(), "");
    }

    #[test]
    fn test_populate_is_not_validated() {
        // The stored value may predate the constraint; it must survive
        let mut edit = integer_edit(2, false);
        edit.populate("999");
        assert_eq!(edit.text(), "999");
        assert!(!edit.is_dirty());
    }

    #[test]
    fn test_invalid_reverts_to_last_good() {
        let mut edit = integer_edit(2, false);
        edit.populate("42");
        assert_eq!(edit.input("42x", 3), EditOutcome::Reverted);
        assert_eq!(edit.text(), "42");

        assert_eq!(edit.input("9", 1), EditOutcome::Accepted);
        assert_eq!(edit.input("9!", 2), EditOutcome::Reverted);
        assert_eq!(edit.text(), "9");
    }

    #[test]
    fn test_minus_progression() {
        // "-" is a mid-edit state, then "-9" becomes committable
        let mut edit = integer_edit(2, false);
        edit.populate("");
        assert_eq!(edit.input("-", 1), EditOutcome::Pending);
        assert!(!edit.is_committable());
        assert_eq!(edit.input("-9", 2), EditOutcome::Accepted);
        assert!(edit.is_committable());
    }

    #[test]
    fn test_cursor_clamped_on_every_path() {
        let mut edit = integer_edit(2, false);
        edit.populate("");
        // Hosts may report a cursor past the text end mid-change
        assert_eq!(edit.input("-", 9), EditOutcome::Pending);
        assert_eq!(edit.cursor(), 1);
        assert_eq!(edit.input("-9", 9), EditOutcome::Accepted);
        assert_eq!(edit.cursor(), 2);
    }

    #[test]
    fn test_legacy_decimal_fixup() {
        let c = LengthConstraint::decimal(4, 2, true);
        let mut edit = ConstrainedEdit::with_validator(LengthValidator::for_constraint(&c), true);
        edit.populate("-9.90");
        // -9.995 fits the format but exceeds the legacy negative bound
        assert_eq!(edit.input("-9.995", 6), EditOutcome::Corrected);
        assert_eq!(edit.text(), "-9.99");
        assert_eq!(edit.cursor(), 5);
    }

    #[test]
    fn test_legacy_byte_fixup_preserves_cursor() {
        let c = LengthConstraint::byte_text(10, TextEncoding::Utf8, true);
        let mut edit = ConstrainedEdit::with_validator(LengthValidator::for_constraint(&c), true);
        edit.populate("あいう");
        // Inserting a 4th three-byte character trips the 10-byte cap
        assert_eq!(edit.input("あいうえ", 4), EditOutcome::Corrected);
        assert_eq!(edit.text(), "あいう");
        assert_eq!(edit.cursor(), 3);
    }

    #[test]
    fn test_char_cap_mode() {
        let mut edit = ConstrainedEdit::with_char_cap(3);
        edit.populate("");
        assert_eq!(edit.input("abcd", 4), EditOutcome::Accepted);
        assert_eq!(edit.text(), "abc");
    }

    #[test]
    fn test_commit_values() {
        let mut edit = ConstrainedEdit::unconstrained();
        edit.populate("");
        edit.input("42", 2);
        assert_eq!(edit.commit_value(FieldType::Int), Some(Value::Int(42)));

        edit.input("", 0);
        assert_eq!(edit.commit_value(FieldType::Int), Some(Value::Null));

        edit.input("off", 3);
        assert_eq!(edit.commit_value(FieldType::Bool), Some(Value::Bool(false)));

        edit.input("not a number", 12);
        assert_eq!(edit.commit_value(FieldType::Double), None);
    }
}
