//! Iterative sunrise computation.
//!
//! Finds the instant the Sun's geocentric altitude crosses the target
//! altitude on the rising side: start from the transit estimated through
//! sidereal time, step back by the semi-diurnal arc, then refine against the
//! Sun's position at each trial instant.

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Utc};
use sankalpa_time::{
    centuries_since_j2000, gmst_rad, instant_to_jd, jd_to_instant, local_sidereal_time_rad,
};

use crate::error::EphemerisError;
use crate::observer::GeoObserver;
use crate::riseset_types::{RiseSetConfig, RiseSetResult};
use crate::solar::solar_position;

/// Maximum iterations for the refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Hour angle advance in radians per solar day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Wrap an angle into [-π, π].
fn wrap_pi(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}

/// Cosine of the hour angle at which the Sun reaches `h0_rad`.
fn cos_hour_angle(h0_rad: f64, phi: f64, dec: f64) -> f64 {
    (h0_rad.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Sunrise for the solar day around `jd_utc_noon`.
///
/// `jd_utc_noon` is approximate local noon, see [`approximate_local_noon_jd`].
pub fn compute_sunrise(
    observer: &GeoObserver,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemerisError> {
    let phi = observer.latitude_rad();
    let h0_rad = config.target_altitude_deg().to_radians();

    let noon = solar_position(centuries_since_j2000(jd_utc_noon));
    let cos_h0 = cos_hour_angle(h0_rad, phi, noon.declination_rad);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    let lst_noon = local_sidereal_time_rad(gmst_rad(jd_utc_noon), observer.longitude_rad());
    let ha_noon = wrap_pi(lst_noon - noon.right_ascension_rad);

    let jd_transit = jd_utc_noon - ha_noon / SIDEREAL_RATE;
    let mut jd_event = jd_transit - cos_h0.acos() / SIDEREAL_RATE;

    for _ in 0..MAX_ITERATIONS {
        let sun = solar_position(centuries_since_j2000(jd_event));
        let cos_h = cos_hour_angle(h0_rad, phi, sun.declination_rad);
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        // Rising side: target hour angle is negative.
        let ha_target = -cos_h.acos();

        let lst = local_sidereal_time_rad(gmst_rad(jd_event), observer.longitude_rad());
        let ha_actual = wrap_pi(lst - sun.right_ascension_rad);

        let correction = wrap_pi(ha_target - ha_actual) / SIDEREAL_RATE;
        jd_event += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    if !jd_event.is_finite() {
        return Err(EphemerisError::NoConvergence("sunrise iteration diverged"));
    }
    Ok(RiseSetResult::Event { jd_utc: jd_event })
}

/// First sunrise at or after `after`, scanning day by day from the
/// observer's local mean date of `after`.
///
/// Returns `Ok(None)` when no sunrise falls within
/// `config.search_horizon_days` of `after` (polar night, midnight sun).
pub fn next_sunrise_after(
    observer: &GeoObserver,
    after: &DateTime<Utc>,
    config: &RiseSetConfig,
) -> Result<Option<DateTime<Utc>>, EphemerisError> {
    let jd_after = instant_to_jd(after);
    let horizon = f64::from(config.search_horizon_days);

    // 0h UT of the calendar day holding local mean time at `after`.
    let lmt_day = (jd_after + 0.5 + observer.longitude_deg() / 360.0).floor();
    let jd_0h = lmt_day - 0.5;

    for day in 0..=config.search_horizon_days + 1 {
        let jd_noon = approximate_local_noon_jd(jd_0h + f64::from(day), observer.longitude_deg());
        let Some(jd_rise) = compute_sunrise(observer, jd_noon, config)?.jd_utc() else {
            continue;
        };
        if jd_rise < jd_after {
            continue;
        }
        if jd_rise - jd_after > horizon {
            break;
        }
        return Ok(Some(jd_to_instant(jd_rise)?));
    }
    Ok(None)
}
