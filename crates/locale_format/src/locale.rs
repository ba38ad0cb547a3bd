use serde::{Deserialize, Serialize};

use crate::digits::{to_latin_digits, to_persian_digits};
use crate::FormatError;

const PERSIAN_MONTHS: [&str; 12] = [
    "فروردين",
    "ارديبهشت",
    "خرداد",
    "تير",
    "مرداد",
    "شهريور",
    "مهر",
    "آبان",
    "آذر",
    "دي",
    "بهمن",
    "اسفند",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Display locale selecting digit script, phrase table, and month names.
pub enum DisplayLocale {
    /// Persian (fa-IR): Persian digits and phrases.
    Persian,
    /// English: Latin digits and transliterated Jalali month names.
    English,
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self::Persian
    }
}

impl DisplayLocale {
    /// BCP 47 language tag for the locale.
    pub fn lang_tag(self) -> &'static str {
        match self {
            Self::Persian => "fa",
            Self::English => "en",
        }
    }

    /// Renders every digit in `input` in this locale's script.
    pub fn render_digits(self, input: &str) -> String {
        match self {
            Self::Persian => to_persian_digits(input),
            Self::English => to_latin_digits(input),
        }
    }

    /// Looks up a Jalali month name by its 1-based number.
    pub fn month_name(self, month: u32) -> Result<&'static str, FormatError> {
        let table = match self {
            Self::Persian => &PERSIAN_MONTHS,
            Self::English => &ENGLISH_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|index| table.get(index as usize))
            .copied()
            .ok_or(FormatError::MonthOutOfRange(month))
    }

    pub(crate) fn moments_ago(self) -> &'static str {
        match self {
            Self::Persian => "چند لحظه پیش",
            Self::English => "moments ago",
        }
    }

    pub(crate) fn minutes_ago(self, minutes: i64) -> String {
        match (self, minutes) {
            (Self::English, 1) => "1 minute ago".to_string(),
            (Self::English, n) => format!("{n} minutes ago"),
            (Self::Persian, n) => format!("{} دقیقه پیش", to_persian_digits(n)),
        }
    }

    pub(crate) fn hours_ago(self, hours: i64) -> String {
        match (self, hours) {
            (Self::English, 1) => "1 hour ago".to_string(),
            (Self::English, n) => format!("{n} hours ago"),
            (Self::Persian, n) => format!("{} ساعت پیش", to_persian_digits(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn month_table_is_one_based() {
        assert_eq!(DisplayLocale::Persian.month_name(1), Ok("فروردين"));
        assert_eq!(DisplayLocale::Persian.month_name(12), Ok("اسفند"));
        assert_eq!(DisplayLocale::English.month_name(7), Ok("Mehr"));
    }

    #[test]
    fn month_outside_table_is_rejected() {
        assert_eq!(
            DisplayLocale::Persian.month_name(0),
            Err(FormatError::MonthOutOfRange(0))
        );
        assert_eq!(
            DisplayLocale::English.month_name(13),
            Err(FormatError::MonthOutOfRange(13))
        );
    }

    #[test]
    fn singular_phrases_match_numeric_ones() {
        assert_eq!(DisplayLocale::Persian.minutes_ago(1), "۱ دقیقه پیش");
        assert_eq!(DisplayLocale::Persian.hours_ago(1), "۱ ساعت پیش");
        assert_eq!(DisplayLocale::English.minutes_ago(1), "1 minute ago");
        assert_eq!(DisplayLocale::English.hours_ago(3), "3 hours ago");
    }

    #[test]
    fn locale_uses_lowercase_serde_names() {
        let locale: DisplayLocale = serde_json::from_str("\"english\"").expect("known locale");
        assert_eq!(locale, DisplayLocale::English);
        assert_eq!(
            serde_json::to_string(&DisplayLocale::Persian).expect("serialize"),
            "\"persian\""
        );
        assert_eq!(DisplayLocale::default().lang_tag(), "fa");
    }
}
