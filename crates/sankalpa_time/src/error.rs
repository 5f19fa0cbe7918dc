//! Error types for civil-date and time-scale conversions.

use thiserror::Error;

/// Errors from civil date handling and instant conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day triple does not name a calendar day.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Text could not be parsed as `YYYY-MM-DD`.
    #[error("date parse error: {0}")]
    Parse(String),
    /// Timezone offset outside [-14, +14] hours or not finite.
    #[error("timezone offset {0} h outside [-14, +14]")]
    InvalidOffset(f64),
    /// Julian Date or instant outside the representable range.
    #[error("time out of range: {0}")]
    OutOfRange(&'static str),
}
