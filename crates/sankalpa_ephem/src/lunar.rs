//! Geocentric apparent longitude of the Moon.
//!
//! Periodic-term lunar theory in the form given by Meeus, *Astronomical
//! Algorithms*, ch. 47: fundamental arguments D, M, M', F, the 60 longitude
//! terms of Table 47.A with eccentricity factor E, the three additive
//! Venus/Jupiter/flattening terms, and nutation in longitude.
//! Accuracy about 10″ against the full ELP theory.

use crate::nutation::nutation_longitude_deg;

/// One row of the longitude series: multiples of (D, M, M', F) and the
/// sine coefficient in 1e-6 degrees.
struct LonTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sin_coeff: i32,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, sin_coeff: i32) -> LonTerm {
    LonTerm {
        d,
        m,
        mp,
        f,
        sin_coeff,
    }
}

#[rustfmt::skip]
const LONGITUDE_TERMS: [LonTerm; 59] = [
    term(0, 0, 1, 0, 6_288_774), term(2, 0, -1, 0, 1_274_027),
    term(2, 0, 0, 0, 658_314),   term(0, 0, 2, 0, 213_618),
    term(0, 1, 0, 0, -185_116),  term(0, 0, 0, 2, -114_332),
    term(2, 0, -2, 0, 58_793),   term(2, -1, -1, 0, 57_066),
    term(2, 0, 1, 0, 53_322),    term(2, -1, 0, 0, 45_758),
    term(0, 1, -1, 0, -40_923),  term(1, 0, 0, 0, -34_720),
    term(0, 1, 1, 0, -30_383),   term(2, 0, 0, -2, 15_327),
    term(0, 0, 1, 2, -12_528),   term(0, 0, 1, -2, 10_980),
    term(4, 0, -1, 0, 10_675),   term(0, 0, 3, 0, 10_034),
    term(4, 0, -2, 0, 8_548),    term(2, 1, -1, 0, -7_888),
    term(2, 1, 0, 0, -6_766),    term(1, 0, -1, 0, -5_163),
    term(1, 1, 0, 0, 4_987),     term(2, -1, 1, 0, 4_036),
    term(2, 0, 2, 0, 3_994),     term(4, 0, 0, 0, 3_861),
    term(2, 0, -3, 0, 3_665),    term(0, 1, -2, 0, -2_689),
    term(2, 0, -1, 2, -2_602),   term(2, -1, -2, 0, 2_390),
    term(1, 0, 1, 0, -2_348),    term(2, -2, 0, 0, 2_236),
    term(0, 1, 2, 0, -2_120),    term(0, 2, 0, 0, -2_069),
    term(2, -2, -1, 0, 2_048),   term(2, 0, 1, -2, -1_773),
    term(2, 0, 0, 2, -1_595),    term(4, -1, -1, 0, 1_215),
    term(0, 0, 2, 2, -1_110),    term(3, 0, -1, 0, -892),
    term(2, 1, 1, 0, -810),      term(4, -1, -2, 0, 759),
    term(0, 2, -1, 0, -713),     term(2, 2, -1, 0, -700),
    term(2, 1, -2, 0, 691),      term(2, -1, 0, -2, 596),
    term(4, 0, 1, 0, 549),       term(0, 0, 4, 0, 537),
    term(4, -1, 0, 0, 520),      term(1, 0, -2, 0, -487),
    term(2, 1, 0, -2, -399),     term(0, 0, 2, -2, -381),
    term(1, 1, 1, 0, 351),       term(3, 0, -2, 0, -340),
    term(4, 0, -3, 0, 330),      term(2, -1, 2, 0, 327),
    term(0, 2, 1, 0, -323),      term(1, 1, -1, 0, 299),
    term(2, 0, 3, 0, 294),
];

/// Apparent geocentric ecliptic longitude of the Moon in degrees [0, 360),
/// for `t` Julian centuries from J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479264.290 * t;

    // Eccentricity of Earth's orbit, scales terms in M.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let (d, m, mp, f) = (d.to_radians(), m.to_radians(), mp.to_radians(), f.to_radians());

    let mut sum_l: f64 = LONGITUDE_TERMS
        .iter()
        .map(|tm| {
            let arg = f64::from(tm.d) * d
                + f64::from(tm.m) * m
                + f64::from(tm.mp) * mp
                + f64::from(tm.f) * f;
            let scale = match tm.m.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            f64::from(tm.sin_coeff) * scale * arg.sin()
        })
        .sum();

    sum_l += 3958.0 * a1.to_radians().sin()
        + 1962.0 * (lp.to_radians() - f).sin()
        + 318.0 * a2.to_radians().sin();

    (lp + sum_l / 1.0e6 + nutation_longitude_deg(t)).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_47a() {
        // 1992-04-12 0h TD: apparent λ = 133.162655°
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let lon = moon_longitude_deg(t);
        assert!((lon - 133.162655).abs() < 0.005, "Moon λ = {lon}");
    }

    #[test]
    fn mean_motion_about_13_deg_per_day() {
        let t0 = 0.25;
        let dt = 1.0 / 36_525.0;
        let a = moon_longitude_deg(t0);
        let b = moon_longitude_deg(t0 + dt);
        let step = (b - a).rem_euclid(360.0);
        assert!((11.5..15.5).contains(&step), "daily motion = {step}");
    }

    #[test]
    fn always_normalized() {
        for i in 0..500 {
            let lon = moon_longitude_deg(-0.5 + i as f64 * 0.002);
            assert!((0.0..360.0).contains(&lon), "lon = {lon}");
        }
    }
}
