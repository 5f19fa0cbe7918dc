//! Types for the sunrise search.

use serde::{Deserialize, Serialize};

/// Configurable parameters for sunrise computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// How many days past the starting instant the search may run before
    /// giving up. Default: 2.
    pub search_horizon_days: u32,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            search_horizon_days: 2,
        }
    }
}

impl RiseSetConfig {
    /// Geometric altitude of the Sun's centre at the moment of sunrise, degrees.
    ///
    /// `h0 = -(refraction + semidiameter) / 60`, about -0.8333 deg by default.
    pub fn target_altitude_deg(&self) -> f64 {
        -(self.refraction_arcmin + self.semidiameter_arcmin) / 60.0
    }
}

/// Outcome of a single-day sunrise computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Sunrise at the given Julian Date (UTC).
    Event { jd_utc: f64 },
    /// Sun stays below the horizon all day (polar night).
    NeverRises,
    /// Sun stays above the horizon all day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// Event Julian Date, if the Sun rises.
    pub fn jd_utc(self) -> Option<f64> {
        match self {
            Self::Event { jd_utc } => Some(jd_utc),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}
