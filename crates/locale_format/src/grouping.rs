//! Thousands-separator grouping.

use std::fmt::Display;

use crate::digits::to_latin_digits;
use crate::DisplayLocale;

const SEPARATOR: char = ',';

/// Groups the integer digits of `value` in threes and renders them in Persian digits.
///
/// `group_thousands(1234)` yields `"۱,۲۳۴"`. Only the leading integer run is grouped; a
/// fractional tail such as `".5"` is kept as-is. Input that does not start with a digit
/// run (`NaN`, `inf`, free text) is rendered ungrouped.
pub fn group_thousands(value: impl Display) -> String {
    group_thousands_with(value, DisplayLocale::Persian)
}

/// Same as [`group_thousands`] with the digit script of `locale`.
pub fn group_thousands_with(value: impl Display, locale: DisplayLocale) -> String {
    let raw = to_latin_digits(value);
    let grouped = group_integer_digits(&raw).unwrap_or(raw);
    locale.render_digits(&grouped)
}

fn group_integer_digits(raw: &str) -> Option<String> {
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let int_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }

    let (integer, tail) = unsigned.split_at(int_len);
    let mut out = String::with_capacity(raw.len() + int_len / 3);
    out.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (int_len - index) % 3 == 0 {
            out.push(SEPARATOR);
        }
        out.push(digit);
    }
    out.push_str(tail);
    Some(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn short_numbers_are_not_grouped() {
        assert_eq!(group_thousands(12), "۱۲");
        assert_eq!(group_thousands(0), "۰");
        assert_eq!(group_thousands(999), "۹۹۹");
    }

    #[test]
    fn leading_group_may_be_shorter_than_three() {
        assert_eq!(group_thousands(1234), "۱,۲۳۴");
        assert_eq!(group_thousands(12_345), "۱۲,۳۴۵");
        assert_eq!(group_thousands(123_456), "۱۲۳,۴۵۶");
        assert_eq!(group_thousands(1_234_567_890_u64), "۱,۲۳۴,۵۶۷,۸۹۰");
    }

    #[test]
    fn sign_and_fraction_survive_grouping() {
        assert_eq!(group_thousands_with(-1234, DisplayLocale::English), "-1,234");
        assert_eq!(group_thousands_with(1234.5, DisplayLocale::English), "1,234.5");
    }

    #[test]
    fn persian_digit_input_is_canonicalized_first() {
        assert_eq!(group_thousands("۱۲۳۴۵"), "۱۲,۳۴۵");
    }

    #[test]
    fn non_numeric_input_falls_back_to_raw_rendering() {
        assert_eq!(group_thousands(f64::NAN), "NaN");
        assert_eq!(group_thousands("n/a 12"), "n/a ۱۲");
    }
}
