use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures raised while rendering calendar-backed strings.
pub enum FormatError {
    /// A resolved Jalali month fell outside `1..=12`.
    #[error("month index {0} is outside 1..=12")]
    MonthOutOfRange(u32),
    /// The Gregorian date precedes the supported calendar range.
    #[error("date is outside the supported calendar range")]
    DateOutOfRange,
    /// A textual timestamp could not be parsed as RFC 3339.
    #[error("invalid timestamp `{0}`")]
    InvalidTimestamp(String),
}
