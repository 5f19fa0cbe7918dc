//! Self-contained analytic ephemeris backing the [`Ephemeris`] trait.

use chrono::{DateTime, Utc};
use sankalpa_time::{centuries_since_j2000, instant_to_jd};
use tracing::debug;

use crate::error::EphemerisError;
use crate::lunar::moon_longitude_deg;
use crate::observer::GeoObserver;
use crate::riseset::next_sunrise_after;
use crate::riseset_types::RiseSetConfig;
use crate::solar::solar_position;
use crate::Ephemeris;

/// Sun and Moon from closed-form series; no kernel files, no I/O.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticEphemeris {
    riseset: RiseSetConfig,
}

impl AnalyticEphemeris {
    pub fn new(riseset: RiseSetConfig) -> Self {
        Self { riseset }
    }

    pub fn riseset_config(&self) -> &RiseSetConfig {
        &self.riseset
    }
}

fn centuries(at: &DateTime<Utc>) -> f64 {
    centuries_since_j2000(instant_to_jd(at))
}

impl Ephemeris for AnalyticEphemeris {
    fn sun_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(solar_position(centuries(at)).longitude_deg)
    }

    fn moon_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(moon_longitude_deg(centuries(at)))
    }

    fn next_sunrise(
        &self,
        observer: &GeoObserver,
        after: &DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        let rise = next_sunrise_after(observer, after, &self.riseset)?;
        debug!(?observer, %after, ?rise, "sunrise search");
        Ok(rise)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn new_moon_2024_04_08() {
        // Total solar eclipse: Sun and Moon in conjunction near 18:21 UTC.
        let eph = AnalyticEphemeris::default();
        let at = Utc.with_ymd_and_hms(2024, 4, 8, 18, 21, 0).unwrap();
        let sun = eph.sun_longitude(&at).unwrap();
        let moon = eph.moon_longitude(&at).unwrap();
        let sep = (moon - sun + 540.0).rem_euclid(360.0) - 180.0;
        assert!(sep.abs() < 0.2, "elongation at new moon = {sep}");
    }

    #[test]
    fn full_moon_2025_10_07() {
        // Full moon 2025-10-07 03:48 UTC.
        let eph = AnalyticEphemeris::default();
        let at = Utc.with_ymd_and_hms(2025, 10, 7, 3, 48, 0).unwrap();
        let d = (eph.moon_longitude(&at).unwrap() - eph.sun_longitude(&at).unwrap())
            .rem_euclid(360.0);
        assert!((d - 180.0).abs() < 0.2, "elongation at full moon = {d}");
    }

    #[test]
    fn sun_at_equinox() {
        // March equinox 2025-03-20 09:01 UTC.
        let eph = AnalyticEphemeris::default();
        let at = Utc.with_ymd_and_hms(2025, 3, 20, 9, 1, 0).unwrap();
        let lon = eph.sun_longitude(&at).unwrap();
        let off = (lon + 180.0).rem_euclid(360.0) - 180.0;
        assert!(off.abs() < 0.02, "Sun longitude at equinox = {lon}");
    }
}
