//! General precession in ecliptic longitude (IAU 2006, Capitaine et al. 2003).

/// Accumulated precession p_A in arcseconds for `t` Julian centuries from J2000.0.
///
/// The linear term dominates: ~5028.80″/century ≈ 1.3969°/century.
pub fn general_precession_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

pub fn general_precession_deg(t: f64) -> f64 {
    general_precession_arcsec(t) / 3600.0
}
