//! Geographic observer position.

use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;

/// Geographic position of an observer on Earth's surface.
///
/// Only constructible through [`GeoObserver::new`] (or deserialization, which
/// applies the same range checks).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ObserverFields", into = "ObserverFields")]
pub struct GeoObserver {
    latitude_deg: f64,
    longitude_deg: f64,
}

/// Wire form of [`GeoObserver`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ObserverFields {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl TryFrom<ObserverFields> for GeoObserver {
    type Error = EphemerisError;

    fn try_from(f: ObserverFields) -> Result<Self, Self::Error> {
        Self::new(f.latitude_deg, f.longitude_deg)
    }
}

impl From<GeoObserver> for ObserverFields {
    fn from(o: GeoObserver) -> Self {
        Self {
            latitude_deg: o.latitude_deg,
            longitude_deg: o.longitude_deg,
        }
    }
}

impl GeoObserver {
    /// Validate and build an observer.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EphemerisError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemerisError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemerisError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
