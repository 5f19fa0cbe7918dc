//! Low-precision apparent geocentric Sun.
//!
//! Mean longitude and anomaly, equation of centre, then the aberration and
//! nutation correction on the apparent longitude (Meeus, *Astronomical
//! Algorithms*, ch. 25). Accuracy about 0.01 deg over 1950-2050.

use std::f64::consts::TAU;

/// Apparent solar coordinates at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent ecliptic longitude of date, degrees [0, 360).
    pub longitude_deg: f64,
    /// Apparent obliquity of the ecliptic, degrees.
    pub obliquity_deg: f64,
    /// Apparent right ascension, radians [0, 2π).
    pub right_ascension_rad: f64,
    /// Apparent declination, radians.
    pub declination_rad: f64,
}

/// Longitude of the Moon's mean ascending node, degrees.
pub(crate) fn lunar_node_deg(t: f64) -> f64 {
    125.04452 - 1934.136261 * t
}

/// Apparent Sun for `t` Julian centuries from J2000.0.
pub fn solar_position(t: f64) -> SolarPosition {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let omega = lunar_node_deg(t).to_radians();
    let lambda = (l0 + c - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0);

    let eps0 = 23.439291 - 0.0130042 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t;
    let eps = eps0 + 0.00256 * omega.cos();

    let (lam, e) = (lambda.to_radians(), eps.to_radians());
    let ra = (e.cos() * lam.sin()).atan2(lam.cos()).rem_euclid(TAU);
    let dec = (e.sin() * lam.sin()).asin();

    SolarPosition {
        longitude_deg: lambda,
        obliquity_deg: eps,
        right_ascension_rad: ra,
        declination_rad: dec,
    }
}
