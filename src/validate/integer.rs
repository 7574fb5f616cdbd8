//! Keystroke-by-keystroke validation for fixed-width integer fields.

use super::Verdict;

/// Validates integer input against a digit budget.
///
/// Accepted shapes are `0` or an optional `-` followed by a run of digits
/// with no leading zero. In legacy mode the sign shares the digit budget;
/// otherwise a negative value gets one extra character of width.
#[derive(Debug, Clone)]
pub struct IntegerValidator {
    total_digits: u32,
    legacy_mode: bool,
}

impl IntegerValidator {
    pub fn new(total_digits: u32, legacy_mode: bool) -> Self {
        Self {
            total_digits,
            legacy_mode,
        }
    }

    pub fn validate(&self, input: &str) -> Verdict {
        // Empty = null-pending, always commit-ready
        if input.is_empty() {
            return Verdict::Acceptable;
        }
        if matches_integer(input) {
            if self.total_digits == 0 {
                return Verdict::Acceptable;
            }
            let negative = input.starts_with('-');
            let sign_allowance = usize::from(!self.legacy_mode && negative);
            if input.len() <= self.total_digits as usize + sign_allowance {
                return Verdict::Acceptable;
            }
        }
        if input == "-" {
            // A single-digit legacy column has no room for a sign at all
            if !(self.legacy_mode && self.total_digits == 1) {
                return Verdict::Intermediate;
            }
        }
        Verdict::Invalid
    }
}

/// `0 | -?[1-9][0-9]*`
fn matches_integer(s: &str) -> bool {
    if s == "0" {
        return true;
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(b'1'..=b'9') => bytes.all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_acceptable() {
        let v = IntegerValidator::new(2, false);
        assert_eq!(v.validate(""), Verdict::Acceptable);
    }

    #[test]
    fn test_digit_budget() {
        let v = IntegerValidator::new(2, false);
        assert_eq!(v.validate("99"), Verdict::Acceptable);
        assert_eq!(v.validate("100"), Verdict::Invalid);
        assert_eq!(v.validate("0"), Verdict::Acceptable);
    }

    #[test]
    fn test_sign_allowance_non_legacy() {
        // Non-legacy: the sign does not consume a digit slot
        let v = IntegerValidator::new(2, false);
        assert_eq!(v.validate("-99"), Verdict::Acceptable);
        assert_eq!(v.validate("-100"), Verdict::Invalid);
    }

    #[test]
    fn test_sign_counts_in_legacy() {
        let v = IntegerValidator::new(2, true);
        assert_eq!(v.validate("-9"), Verdict::Acceptable);
        assert_eq!(v.validate("-99"), Verdict::Invalid);
    }

    #[test]
    fn test_lone_minus() {
        assert_eq!(
            IntegerValidator::new(2, false).validate("-"),
            Verdict::Intermediate
        );
        // Single-digit legacy field cannot hold a sign
        assert_eq!(
            IntegerValidator::new(1, true).validate("-"),
            Verdict::Invalid
        );
        assert_eq!(
            IntegerValidator::new(1, false).validate("-"),
            Verdict::Intermediate
        );
    }

    #[test]
    fn test_rejects_malformed() {
        let v = IntegerValidator::new(5, false);
        assert_eq!(v.validate("007"), Verdict::Invalid);
        assert_eq!(v.validate("-0"), Verdict::Invalid);
        assert_eq!(v.validate("1a"), Verdict::Invalid);
        assert_eq!(v.validate("+1"), Verdict::Invalid);
        assert_eq!(v.validate("1.5"), Verdict::Invalid);
    }

    #[test]
    fn test_unconstrained() {
        let v = IntegerValidator::new(0, false);
        assert_eq!(v.validate("123456789012345678"), Verdict::Acceptable);
    }
}
