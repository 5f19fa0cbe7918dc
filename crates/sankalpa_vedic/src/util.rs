//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` rounds tiny negative inputs up to exactly 360.0, which is
/// folded back to 0.0 here.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
