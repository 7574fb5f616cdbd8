//! Keystroke-by-keystroke validation for fixed-width decimal fields.

use super::Verdict;

/// Largest value a `total_digits`/`fraction_digits` column can hold.
///
/// Exact for budgets up to 15 digits (within f64 integer precision); wider
/// budgets use the largest float strictly below `10^(total - fraction)` to
/// avoid overflow artifacts.
pub fn max_column_value(total_digits: i32, fraction_digits: i32) -> f64 {
    if total_digits <= 15 {
        (10f64.powi(total_digits) - 1.0) / 10f64.powi(fraction_digits)
    } else {
        10f64.powi(total_digits - fraction_digits).next_down()
    }
}

/// Validates decimal input against a digit/precision budget.
///
/// The integer part fits in `total_digits - fraction_digits` characters
/// (plus a sign allowance outside legacy mode) and the fraction in
/// `fraction_digits`. Values inside the format but outside the column's
/// numeric range are Intermediate, not Invalid: `fixup` clamps them.
#[derive(Debug, Clone)]
pub struct DecimalValidator {
    total_digits: u32,
    fraction_digits: u32,
    legacy_mode: bool,
    top: f64,
    bottom: f64,
}

impl DecimalValidator {
    pub fn new(total_digits: u32, fraction_digits: u32, legacy_mode: bool) -> Self {
        let fraction_digits = if total_digits == 0 {
            fraction_digits
        } else {
            fraction_digits.min(total_digits)
        };
        let total = total_digits as i32;
        let fraction = fraction_digits as i32;
        let top = max_column_value(total, fraction);
        // Legacy storage spends one character slot on the sign, so the
        // negative bound is one digit narrower than the positive one.
        let bottom = -max_column_value(total - i32::from(legacy_mode), fraction);
        Self {
            total_digits,
            fraction_digits,
            legacy_mode,
            top,
            bottom,
        }
    }

    pub fn validate(&self, input: &str) -> Verdict {
        if input.is_empty() {
            return Verdict::Acceptable;
        }
        if matches_decimal(input) {
            if self.total_digits == 0 {
                return Verdict::Acceptable;
            }
            if let Ok(v) = input.parse::<f64>() {
                let dot = input.find('.').unwrap_or(input.len());
                let width = self.total_digits as i64
                    + i64::from(!self.legacy_mode && v < 0.0);
                let int_budget = width - self.fraction_digits as i64;
                let within_int = dot as i64 <= int_budget;
                let within_fraction =
                    input.len() as i64 <= dot as i64 + 1 + self.fraction_digits as i64;
                if within_int && within_fraction {
                    if v < self.bottom || v > self.top {
                        return Verdict::Intermediate;
                    }
                    return Verdict::Acceptable;
                }
            }
        }
        if input == "-" {
            // No sign slot when the legacy integer part is a single character
            let int_chars = self.total_digits as i64 - self.fraction_digits as i64;
            if !(self.legacy_mode && int_chars == 1) {
                return Verdict::Intermediate;
            }
        }
        Verdict::Invalid
    }

    /// Clamp an out-of-range value to the nearest bound and render it with
    /// exactly `fraction_digits` decimal places. Unparseable text is
    /// returned unchanged (mid-edit states like a lone `-`), as is any
    /// input on an unconstrained column, whose bounds are meaningless.
    pub fn fixup(&self, input: &str) -> String {
        if self.total_digits == 0 {
            return input.to_string();
        }
        let Ok(v) = input.parse::<f64>() else {
            return input.to_string();
        };
        let clamped = v.clamp(self.bottom, self.top);
        format!("{:.*}", self.fraction_digits as usize, clamped)
    }
}

/// `-?\.\d+ | -?0(\.\d*)? | -?[1-9]\d*(\.\d*)?`
fn matches_decimal(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    if body.is_empty() {
        return false;
    }
    // `.5` form: fraction digits are mandatory
    if let Some(fraction) = body.strip_prefix('.') {
        return !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit());
    }
    let (int_part, fraction) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let int_ok = int_part == "0"
        || (matches!(int_part.bytes().next(), Some(b'1'..=b'9'))
            && int_part.bytes().all(|b| b.is_ascii_digit()));
    let fraction_ok = fraction.is_none_or(|f| f.bytes().all(|b| b.is_ascii_digit()));
    int_ok && fraction_ok
}
