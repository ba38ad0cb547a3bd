use locale_format::to_latin_digits;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Character filters applied after digit canonicalization.
///
/// `ascii_only` takes precedence when both flags are set.
pub struct NormalizeMode {
    /// Keep only ASCII digits and `.`.
    pub digits_only: bool,
    /// Keep only ASCII letters, ASCII digits, `@`, and `.`.
    pub ascii_only: bool,
}

impl NormalizeMode {
    /// Mode that only canonicalizes digits.
    pub const PASSTHROUGH: Self = Self {
        digits_only: false,
        ascii_only: false,
    };
    /// Numeric field mode.
    pub const DIGITS_ONLY: Self = Self {
        digits_only: true,
        ascii_only: false,
    };
    /// English-only / email field mode.
    pub const ASCII_ONLY: Self = Self {
        digits_only: false,
        ascii_only: true,
    };
}

/// Sanitizes a raw keystroke value before it is committed to a field.
///
/// Persian digits are always rewritten to ASCII first, then the mode's filter runs. The
/// result is a fixed point: `normalize(&normalize(x, m), m) == normalize(x, m)`.
pub fn normalize(raw: &str, mode: NormalizeMode) -> String {
    let canonical = to_latin_digits(raw);
    if mode.ascii_only {
        canonical.chars().filter(|ch| is_ascii_field_char(*ch)).collect()
    } else if mode.digits_only {
        canonical.chars().filter(|ch| is_numeric_field_char(*ch)).collect()
    } else {
        canonical
    }
}

fn is_ascii_field_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '@' || ch == '.'
}

fn is_numeric_field_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}
