//! Gregorian to Jalali (Solar Hijri) calendar conversion.
//!
//! Uses the arithmetic 33-year cycle approximation, which agrees with the astronomical
//! calendar for the Gregorian years 1 through well past 2100.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::FormatError;

/// Cumulative day counts at the start of each Gregorian month in a common year.
const GREGORIAN_MONTH_OFFSETS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Aligns the proleptic Gregorian day count with the start of a 33-year Jalali cycle.
const EPOCH_OFFSET: i64 = 355_666;
const DAYS_PER_33_YEARS: i64 = 12_053;
const DAYS_PER_4_YEARS: i64 = 1_461;
/// Day-of-year at which the 30-day months start (six 31-day months precede it).
const FIRST_HALF_DAYS: i64 = 186;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// A date in the Jalali calendar.
pub struct JalaliDate {
    /// Solar Hijri year.
    pub year: i32,
    /// Month number, `1..=12` (Farvardin is 1).
    pub month: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
}

impl JalaliDate {
    /// Converts a proleptic Gregorian date.
    ///
    /// Dates before 0001-01-01 return [`FormatError::DateOutOfRange`].
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, FormatError> {
        let year = i64::from(date.year());
        if year < 1 {
            return Err(FormatError::DateOutOfRange);
        }
        let month = i64::from(date.month());
        let day = i64::from(date.day());

        let leap_year = if month > 2 { year + 1 } else { year };
        let mut days = EPOCH_OFFSET
            + 365 * year
            + (leap_year + 3) / 4
            - (leap_year + 99) / 100
            + (leap_year + 399) / 400
            + day
            + GREGORIAN_MONTH_OFFSETS[(month - 1) as usize];

        let mut jalali_year = -1595 + 33 * (days / DAYS_PER_33_YEARS);
        days %= DAYS_PER_33_YEARS;
        jalali_year += 4 * (days / DAYS_PER_4_YEARS);
        days %= DAYS_PER_4_YEARS;
        if days > 365 {
            jalali_year += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        let (jalali_month, jalali_day) = if days < FIRST_HALF_DAYS {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - FIRST_HALF_DAYS) / 30, 1 + (days - FIRST_HALF_DAYS) % 30)
        };

        Ok(Self {
            year: i32::try_from(jalali_year).map_err(|_| FormatError::DateOutOfRange)?,
            month: jalali_month as u32,
            day: jalali_day as u32,
        })
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn jalali(year: i32, month: u32, day: u32) -> JalaliDate {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid gregorian date");
        JalaliDate::from_gregorian(date).expect("convertible date")
    }

    fn expected(year: i32, month: u32, day: u32) -> JalaliDate {
        JalaliDate { year, month, day }
    }

    #[test]
    fn nowruz_starts_the_year() {
        assert_eq!(jalali(2024, 3, 20), expected(1403, 1, 1));
        assert_eq!(jalali(2025, 3, 21), expected(1404, 1, 1));
        assert_eq!(jalali(2021, 3, 21), expected(1400, 1, 1));
    }

    #[test]
    fn last_day_of_year_tracks_leap_years() {
        assert_eq!(jalali(2024, 3, 19), expected(1402, 12, 29));
        assert_eq!(jalali(2025, 3, 20), expected(1403, 12, 30));
    }

    #[test]
    fn second_half_of_year_uses_thirty_day_months() {
        assert_eq!(jalali(2024, 9, 22), expected(1403, 7, 1));
        assert_eq!(jalali(2024, 12, 21), expected(1403, 10, 1));
        assert_eq!(jalali(2000, 1, 1), expected(1378, 10, 11));
    }

    #[test]
    fn displays_as_slash_separated_date() {
        assert_eq!(jalali(2026, 10, 19).to_string(), "1405/07/27");
    }

    #[test]
    fn years_before_common_era_are_rejected() {
        let date = NaiveDate::from_ymd_opt(0, 6, 1).expect("valid proleptic date");
        assert_eq!(
            JalaliDate::from_gregorian(date),
            Err(FormatError::DateOutOfRange)
        );
    }
}
