//! Locale-aware presentation formatting for Persian (fa-IR) and English displays.
//!
//! Everything in this crate is pure: digit-script conversion, thousands grouping,
//! Gregorian to Jalali calendar conversion, and the short-date / "time ago" phrases
//! rendered next to timestamps. Nothing here touches the DOM or a global clock except
//! [`format_relative_time`], which reads [`chrono::Local::now`]; every other entry point
//! takes its inputs explicitly so it can be tested against a fixed instant.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod digits;
mod error;
mod grouping;
pub mod jalali;
mod locale;
mod time;

pub use digits::{to_latin_digits, to_persian_digits, PERSIAN_DIGITS};
pub use error::FormatError;
pub use grouping::{group_thousands, group_thousands_with};
pub use jalali::JalaliDate;
pub use locale::DisplayLocale;
pub use time::{
    format_relative_time, format_relative_time_at, format_relative_time_in, format_short_date,
    format_short_date_in, parse_timestamp, RelativeSpan,
};
