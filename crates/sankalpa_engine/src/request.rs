//! Caller-facing request parameters.

use chrono::{DateTime, Utc};
use sankalpa_ephem::GeoObserver;
use sankalpa_time::{CivilDate, TzOffset};
use serde::Serialize;

use crate::error::SankalpaError;

/// One panchanga computation: where, which local date, and the local offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangaRequest {
    pub observer: GeoObserver,
    /// Local civil date; `None` means today at `tz`.
    pub date: Option<CivilDate>,
    pub tz: TzOffset,
    /// Free-text place name forwarded to the provider.
    pub location_label: Option<String>,
}

impl PanchangaRequest {
    /// Validate coordinates and offset.
    pub fn new(latitude_deg: f64, longitude_deg: f64, tz_hours: f64) -> Result<Self, SankalpaError> {
        Ok(Self {
            observer: GeoObserver::new(latitude_deg, longitude_deg)?,
            date: None,
            tz: TzOffset::from_hours(tz_hours)?,
            location_label: None,
        })
    }

    pub fn with_date(mut self, date: CivilDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_location(mut self, label: impl Into<String>) -> Self {
        self.location_label = Some(label.into());
        self
    }

    /// The requested date, or the observer's current local date.
    pub fn resolve_date(&self, now: &DateTime<Utc>) -> CivilDate {
        self.date
            .unwrap_or_else(|| CivilDate::today_at(now, self.tz))
    }

    /// Location label, falling back to `default` when absent or blank.
    pub fn label_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.location_label.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => default,
        }
    }
}
