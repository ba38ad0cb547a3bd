//! Jalali short dates and relative "time ago" phrases.

use chrono::{DateTime, Duration, FixedOffset, Local, TimeZone, Timelike};

use crate::digits::to_latin_digits;
use crate::{DisplayLocale, FormatError, JalaliDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Elapsed-time bucket used to choose a relative phrase.
pub enum RelativeSpan {
    /// Under one minute, including timestamps in the future.
    Moments,
    /// One to two minutes.
    OneMinute,
    /// Whole minutes, `2..60`.
    Minutes(i64),
    /// One to two hours.
    OneHour,
    /// Whole hours, `2..24`.
    Hours(i64),
    /// A day or more; rendered as a short date instead.
    Older,
}

impl RelativeSpan {
    /// Buckets an elapsed duration. Negative durations clamp to zero.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let elapsed = elapsed.num_seconds().max(0);
        match elapsed {
            secs if secs < 60 => Self::Moments,
            secs if secs < 2 * 60 => Self::OneMinute,
            secs if secs < 60 * 60 => Self::Minutes(secs / 60),
            secs if secs < 2 * 60 * 60 => Self::OneHour,
            secs if secs < 24 * 60 * 60 => Self::Hours(secs / (60 * 60)),
            _ => Self::Older,
        }
    }
}

/// Renders `"<day> <month> <HH:MM>"` in the Jalali calendar with Persian names and digits.
///
/// The wall clock of `timestamp`'s own zone is used, so pass a `DateTime<Local>` for the
/// viewer's local time.
pub fn format_short_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Result<String, FormatError> {
    format_short_date_in(DisplayLocale::Persian, timestamp)
}

/// Same as [`format_short_date`] for an explicit locale.
pub fn format_short_date_in<Tz: TimeZone>(
    locale: DisplayLocale,
    timestamp: &DateTime<Tz>,
) -> Result<String, FormatError> {
    let wall_clock = timestamp.naive_local();
    let date = JalaliDate::from_gregorian(wall_clock.date())?;
    let month = locale.month_name(date.month)?;
    let time = format!("{:02}:{:02}", wall_clock.hour(), wall_clock.minute());

    Ok(format!(
        "{} {} {}",
        locale.render_digits(&date.day.to_string()),
        month,
        locale.render_digits(&time)
    ))
}

/// Describes how long ago `timestamp` was, measured against the local clock.
pub fn format_relative_time<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Result<String, FormatError> {
    format_relative_time_at(timestamp, &Local::now())
}

/// Same as [`format_relative_time`] measured against `now`.
pub fn format_relative_time_at<Tz: TimeZone, Now: TimeZone>(
    timestamp: &DateTime<Tz>,
    now: &DateTime<Now>,
) -> Result<String, FormatError> {
    format_relative_time_in(DisplayLocale::Persian, timestamp, now)
}

/// Relative phrase for `timestamp` in `locale`, measured against `now`.
///
/// Anything a day old or older is rendered with [`format_short_date_in`].
pub fn format_relative_time_in<Tz: TimeZone, Now: TimeZone>(
    locale: DisplayLocale,
    timestamp: &DateTime<Tz>,
    now: &DateTime<Now>,
) -> Result<String, FormatError> {
    let elapsed = Duration::milliseconds(now.timestamp_millis() - timestamp.timestamp_millis());

    Ok(match RelativeSpan::from_elapsed(elapsed) {
        RelativeSpan::Moments => locale.moments_ago().to_string(),
        RelativeSpan::OneMinute => locale.minutes_ago(1),
        RelativeSpan::Minutes(minutes) => locale.minutes_ago(minutes),
        RelativeSpan::OneHour => locale.hours_ago(1),
        RelativeSpan::Hours(hours) => locale.hours_ago(hours),
        RelativeSpan::Older => format_short_date_in(locale, timestamp)?,
    })
}

/// Parses an RFC 3339 timestamp, accepting Persian digits.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, FormatError> {
    let canonical = to_latin_digits(raw.trim());
    DateTime::parse_from_rfc3339(&canonical)
        .map_err(|_| FormatError::InvalidTimestamp(raw.to_string()))
}
