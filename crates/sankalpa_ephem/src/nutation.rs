//! Nutation in longitude, four-term low-accuracy series (about 0.5″).

use crate::solar::lunar_node_deg;

/// Δψ in degrees for `t` Julian centuries from J2000.0.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    let omega = lunar_node_deg(t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}
