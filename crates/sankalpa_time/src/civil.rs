//! Location-local civil dates and signed timezone offsets.
//!
//! A [`CivilDate`] carries no time of day. Combined with a [`TzOffset`] it
//! yields the UTC instants the sunrise search is anchored on.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Largest accepted timezone offset magnitude in hours.
pub const MAX_OFFSET_HOURS: f64 = 14.0;

/// A calendar date in the observer's local civil calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Build from year/month/day, rejecting impossible days.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The underlying `chrono` date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Current local date for an observer at `offset`, given a UTC clock reading.
    pub fn today_at(now: &DateTime<Utc>, offset: TzOffset) -> Self {
        Self((now.naive_utc() + offset.duration()).date())
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| TimeError::Parse(format!("{s:?}: {e}")))
    }
}

/// Signed offset of local civil time from UTC, in hours (may be fractional).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TzOffset(f64);

impl TzOffset {
    pub const UTC: Self = Self(0.0);

    /// Validate an offset in hours. Must be finite and within ±14 h.
    pub fn from_hours(hours: f64) -> Result<Self, TimeError> {
        if hours.is_finite() && hours.abs() <= MAX_OFFSET_HOURS {
            Ok(Self(hours))
        } else {
            Err(TimeError::InvalidOffset(hours))
        }
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    /// Offset as a duration, rounded to whole seconds.
    pub fn duration(&self) -> Duration {
        Duration::seconds((self.0 * 3600.0).round() as i64)
    }
}

impl TryFrom<f64> for TzOffset {
    type Error = TimeError;

    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        Self::from_hours(hours)
    }
}

impl From<TzOffset> for f64 {
    fn from(tz: TzOffset) -> Self {
        tz.0
    }
}

impl Display for TzOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UTC{:+}", self.0)
    }
}

/// UTC instant of local midnight (00:00 local) on `date`.
///
/// `midnight_utc = date 00:00 - offset`
pub fn local_midnight_utc(date: CivilDate, offset: TzOffset) -> DateTime<Utc> {
    let naive = date.naive().and_time(NaiveTime::MIN);
    Utc.from_utc_datetime(&naive) - offset.duration()
}

/// UTC instant of local civil noon (12:00 local) on `date`.
///
/// `noon_utc = date 00:00 + 12 h - offset`
pub fn local_noon_utc(date: CivilDate, offset: TzOffset) -> DateTime<Utc> {
    local_midnight_utc(date, offset) + Duration::hours(12)
}
