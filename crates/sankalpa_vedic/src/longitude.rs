//! Ecliptic longitudes tagged with their reference frame.
//!
//! `Longitude<Sayana>` (tropical) and `Longitude<Nirayana>` (sidereal) are
//! distinct types, so mixing frames in arithmetic does not compile. The only
//! crossing is through an ayanamsa offset.

use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;

use serde::{Serialize, Serializer};

use crate::util::normalize_360;

mod sealed {
    pub trait Sealed {}
}

/// Reference frame marker for [`Longitude`].
pub trait Frame: sealed::Sealed + Copy + Debug + PartialEq {
    const NAME: &'static str;
}

/// Tropical frame, measured from the moving vernal equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sayana;

/// Sidereal frame, measured from a fixed-star origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nirayana;

impl sealed::Sealed for Sayana {}
impl sealed::Sealed for Nirayana {}

impl Frame for Sayana {
    const NAME: &'static str = "sayana";
}

impl Frame for Nirayana {
    const NAME: &'static str = "nirayana";
}

/// An ecliptic longitude in [0, 360) degrees in frame `F`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Longitude<F: Frame> {
    deg: f64,
    frame: PhantomData<F>,
}

impl<F: Frame> Longitude<F> {
    /// Wrap any angle in degrees, normalizing into [0, 360).
    pub fn new(deg: f64) -> Self {
        Self {
            deg: normalize_360(deg),
            frame: PhantomData,
        }
    }

    pub fn degrees(self) -> f64 {
        self.deg
    }

    /// Forward angular distance from `other` to `self`, in [0, 360).
    pub fn separation_from(self, other: Self) -> f64 {
        normalize_360(self.deg - other.deg)
    }

    /// Sum of the two longitudes, normalized into [0, 360).
    pub fn sum_with(self, other: Self) -> f64 {
        normalize_360(self.deg + other.deg)
    }
}

impl Longitude<Sayana> {
    /// Sidereal longitude: `(sayana - ayanamsa) mod 360`.
    pub fn to_nirayana(self, ayanamsa_deg: f64) -> Longitude<Nirayana> {
        Longitude::new(self.deg - ayanamsa_deg)
    }
}

impl Longitude<Nirayana> {
    /// Tropical longitude: `(nirayana + ayanamsa) mod 360`.
    pub fn to_sayana(self, ayanamsa_deg: f64) -> Longitude<Sayana> {
        Longitude::new(self.deg + ayanamsa_deg)
    }
}

impl<F: Frame> Display for Longitude<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}° {}", self.deg, F::NAME)
    }
}

/// Serializes as the bare degree value.
impl<F: Frame> Serialize for Longitude<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.deg)
    }
}
