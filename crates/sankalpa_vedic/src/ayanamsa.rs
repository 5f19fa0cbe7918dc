//! Ayanamsa: the offset between the tropical and sidereal zodiacs.
//!
//! Two correctors are provided:
//! - [`LinearAyanamsa`]: `base + rate × T`, default 23.85° + 1.4°/century.
//!   A short-range approximation, good to a few arcminutes over 2000-2050
//!   and degrading silently outside it.
//! - [`LahiriAyanamsa`]: Lahiri J2000 reference plus IAU 2006 general
//!   precession, for callers that need longer validity.
//!
//! `T` is Julian centuries since J2000.0 (2000-01-01T12:00).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::longitude::{Longitude, Nirayana, Sayana};
use crate::precession::general_precession_deg;

/// Lahiri (Chitrapaksha) ayanamsa at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// A tropical-to-sidereal corrector.
pub trait Ayanamsa {
    /// Offset in degrees at `t` Julian centuries from J2000.0.
    fn offset_deg(&self, t_centuries: f64) -> f64;

    /// Convert a tropical longitude to sidereal at `t`.
    fn to_nirayana(&self, lon: Longitude<Sayana>, t_centuries: f64) -> Longitude<Nirayana> {
        lon.to_nirayana(self.offset_deg(t_centuries))
    }
}

/// `offset = base_deg + rate_deg_per_century × T`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearAyanamsa {
    pub base_deg: f64,
    pub rate_deg_per_century: f64,
}

impl LinearAyanamsa {
    pub const DEFAULT_BASE_DEG: f64 = 23.85;
    pub const DEFAULT_RATE_DEG_PER_CENTURY: f64 = 1.4;

    pub fn new(base_deg: f64, rate_deg_per_century: f64) -> Self {
        Self {
            base_deg,
            rate_deg_per_century,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.base_deg.is_finite() && self.rate_deg_per_century.is_finite()
    }
}

impl Default for LinearAyanamsa {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_DEG, Self::DEFAULT_RATE_DEG_PER_CENTURY)
    }
}

impl Ayanamsa for LinearAyanamsa {
    fn offset_deg(&self, t_centuries: f64) -> f64 {
        self.base_deg + self.rate_deg_per_century * t_centuries
    }
}

/// Lahiri reference value advanced by general precession.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LahiriAyanamsa;

impl Ayanamsa for LahiriAyanamsa {
    fn offset_deg(&self, t_centuries: f64) -> f64 {
        LAHIRI_J2000_DEG + general_precession_deg(t_centuries)
    }
}

/// Configurable choice of corrector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum AyanamsaModel {
    Linear(LinearAyanamsa),
    Lahiri,
}

impl AyanamsaModel {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::Lahiri => "lahiri",
        }
    }
}

impl Default for AyanamsaModel {
    fn default() -> Self {
        Self::Linear(LinearAyanamsa::default())
    }
}

impl Ayanamsa for AyanamsaModel {
    fn offset_deg(&self, t_centuries: f64) -> f64 {
        match self {
            Self::Linear(linear) => linear.offset_deg(t_centuries),
            Self::Lahiri => LahiriAyanamsa.offset_deg(t_centuries),
        }
    }
}

impl Display for AyanamsaModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear(l) => write!(
                f,
                "linear ({} + {} T)",
                l.base_deg, l.rate_deg_per_century
            ),
            Self::Lahiri => f.write_str("lahiri (23.853 + p_A)"),
        }
    }
}

/// Model name not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAyanamsa(pub String);

impl Display for UnknownAyanamsa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown ayanamsa model {:?} (expected linear or lahiri)", self.0)
    }
}

impl std::error::Error for UnknownAyanamsa {}

impl FromStr for AyanamsaModel {
    type Err = UnknownAyanamsa;

    /// `linear` yields the default linear parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::default()),
            "lahiri" => Ok(Self::Lahiri),
            other => Err(UnknownAyanamsa(other.to_string())),
        }
    }
}
