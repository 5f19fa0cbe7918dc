//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! UTC is used in place of UT1 (|UT1 - UTC| < 0.9 s), which moves a
//! sunrise by well under a second.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Utc};

use crate::julian::{J2000_JD, centuries_since_j2000, instant_to_jd};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians [0, 2π) at a Julian Date.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × (JD − 2451545.0))
pub fn earth_rotation_angle_rad(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians [0, 2π) at a Julian Date.
pub fn gmst_rad(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (earth_rotation_angle_rad(jd) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// GMST in radians for a UTC instant.
pub fn gmst_at(instant: &DateTime<Utc>) -> f64 {
    gmst_rad(instant_to_jd(instant))
}

/// Local sidereal time in radians [0, 2π) from GMST and east longitude.
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
