//! Julian Date conversions for UTC instants.
//!
//! Instants are `chrono::DateTime<Utc>`. Julian Dates are plain `f64` days.
//! No leap-second or TT offset is applied: the analytic theories used in
//! this workspace take UTC directly as their time argument.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of a UTC instant, millisecond resolution.
pub fn instant_to_jd(instant: &DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + instant.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// UTC instant for a Julian Date, rounded to the nearest millisecond.
pub fn jd_to_instant(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::OutOfRange("Julian Date is not finite"));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if millis.abs() > i64::MAX as f64 / 2.0 {
        return Err(TimeError::OutOfRange("Julian Date beyond chrono range"));
    }
    Utc.timestamp_millis_opt(millis as i64)
        .single()
        .ok_or(TimeError::OutOfRange("Julian Date beyond chrono range"))
}

/// Julian Date at 0h UTC of a calendar day.
pub fn date_to_jd_0h(date: NaiveDate) -> f64 {
    // 1970-01-01 is day 719163 counted from 0001-01-01 (CE day 1).
    let days_from_unix = i64::from(date.num_days_from_ce()) - 719_163;
    UNIX_EPOCH_JD + days_from_unix as f64
}

/// Julian centuries since J2000.0: `T = (JD - 2451545.0) / 36525`.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
