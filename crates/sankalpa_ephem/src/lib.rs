//! Ephemeris capability consumed by the panchanga engine.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait: apparent Sun/Moon longitudes and a next-sunrise search
//! - [`GeoObserver`], a validated observer position
//! - [`AnalyticEphemeris`], a closed-form implementation (solar and lunar
//!   series plus an iterative sunrise solver)
//!
//! Longitudes are apparent geocentric ecliptic longitudes of date in degrees,
//! i.e. tropical (Sayana).

pub mod analytic;
pub mod error;
pub mod lunar;
pub mod nutation;
pub mod observer;
pub mod riseset;
pub mod riseset_types;
pub mod solar;

use chrono::{DateTime, Utc};

pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;
pub use observer::GeoObserver;
pub use riseset::{approximate_local_noon_jd, compute_sunrise, next_sunrise_after};
pub use riseset_types::{RiseSetConfig, RiseSetResult};
pub use solar::{SolarPosition, solar_position};

/// Position and sunrise queries for one observer and instant.
///
/// Implementations must bound their own work: `next_sunrise` returns
/// `Ok(None)` rather than searching indefinitely.
pub trait Ephemeris {
    /// Apparent geocentric ecliptic longitude of the Sun, degrees.
    fn sun_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Apparent geocentric ecliptic longitude of the Moon, degrees.
    fn moon_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// First sunrise at or after `after`, or `None` if none is found.
    fn next_sunrise(
        &self,
        observer: &GeoObserver,
        after: &DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn sun_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).sun_longitude(at)
    }

    fn moon_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).moon_longitude(at)
    }

    fn next_sunrise(
        &self,
        observer: &GeoObserver,
        after: &DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        (**self).next_sunrise(observer, after)
    }
}
