//! Latin <-> Persian digit script conversion.

use std::fmt::Display;

/// Persian digit glyphs indexed by their numeric value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replaces every ASCII digit with the Persian glyph of the same value.
///
/// Every other character, including Arabic-Indic digits, is copied unchanged.
pub fn to_persian_digits(input: impl Display) -> String {
    input
        .to_string()
        .chars()
        .map(|ch| match ch.to_digit(10) {
            Some(value) if ch.is_ascii_digit() => PERSIAN_DIGITS[value as usize],
            _ => ch,
        })
        .collect()
}

/// Replaces every Persian digit glyph with its ASCII digit.
pub fn to_latin_digits(input: impl Display) -> String {
    input
        .to_string()
        .chars()
        .map(|ch| persian_digit_value(ch).map_or(ch, |value| char::from(b'0' + value)))
        .collect()
}

pub(crate) fn persian_digit_value(ch: char) -> Option<u8> {
    PERSIAN_DIGITS
        .iter()
        .position(|glyph| *glyph == ch)
        .map(|index| index as u8)
}
