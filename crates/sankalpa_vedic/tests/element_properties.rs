//! Range, periodicity and frame properties of the element lookups.

use proptest::prelude::*;
use sankalpa_vedic::{
    Ayana, Ayanamsa, LinearAyanamsa, Longitude, Nirayana, Paksha, Sayana, Tithi,
    ayana_from_month_day, karana_from_elongation, masa_from_sun, nakshatra_from_longitude,
    tithi_from_elongation, tithi_from_longitudes, yoga_from_sum,
};

proptest! {
    #[test]
    fn tithi_index_and_paksha_agree(delta in -720.0f64..720.0) {
        let t = tithi_from_elongation(delta);
        prop_assert!((1..=30).contains(&t.index));
        prop_assert!((1..=15).contains(&t.tithi_in_paksha));
        match t.paksha {
            Paksha::Shukla => prop_assert!(t.index <= 15),
            Paksha::Krishna => prop_assert!(t.index >= 16),
        }
        prop_assert_eq!(t.tithi == Tithi::Purnima, t.index == 15);
        prop_assert_eq!(t.tithi == Tithi::Amavasya, t.index == 30);
    }

    #[test]
    fn nakshatra_in_range(lon in -1000.0f64..1000.0) {
        let n = nakshatra_from_longitude(Longitude::<Nirayana>::new(lon));
        prop_assert!((1..=27).contains(&n.number));
        prop_assert_eq!(n.nakshatra.index() + 1, n.number);
    }

    #[test]
    fn masa_in_range_and_periodic(lon in 0.0f64..360.0, turns in -3i32..3) {
        let base = masa_from_sun(Longitude::<Nirayana>::new(lon));
        let shifted = masa_from_sun(Longitude::<Nirayana>::new(lon + 360.0 * f64::from(turns)));
        prop_assert!(base.index <= 11);
        prop_assert_eq!(base.index, shifted.index);
        prop_assert_eq!(base.index, (base.solar_sign + 1) % 12);
    }

    #[test]
    fn yoga_and_karana_in_range(x in -720.0f64..720.0) {
        prop_assert!((1..=27).contains(&yoga_from_sum(x).number));
        prop_assert!((1..=60).contains(&karana_from_elongation(x).number));
    }

    #[test]
    fn tithi_unaffected_by_ayanamsa(moon in 0.0f64..360.0, sun in 0.0f64..360.0, t in -0.5f64..0.5) {
        let ayanamsa = LinearAyanamsa::default();
        let (m, s) = (Longitude::<Sayana>::new(moon), Longitude::<Sayana>::new(sun));
        let sayana = tithi_from_longitudes(m, s);
        let nirayana = tithi_from_longitudes(ayanamsa.to_nirayana(m, t), ayanamsa.to_nirayana(s, t));
        // Allow for a float wobble straddling a boundary.
        let d = m.separation_from(s);
        let near_edge = (d % 12.0) < 1e-9 || (12.0 - d % 12.0) < 1e-9;
        if !near_edge {
            prop_assert_eq!(sayana.index, nirayana.index);
        }
    }

    #[test]
    fn ayana_independent_of_year(month in 1u32..=12, day in 1u32..=28) {
        let code = month * 100 + day;
        let expected = if (115..=715).contains(&code) {
            Ayana::Uttarayana
        } else {
            Ayana::Dakshinayana
        };
        prop_assert_eq!(ayana_from_month_day(month, day), expected);
    }
}

#[test]
fn ayana_reference_dates() {
    assert_eq!(ayana_from_month_day(3, 1), Ayana::Uttarayana);
    assert_eq!(ayana_from_month_day(8, 1), Ayana::Dakshinayana);
    assert_eq!(ayana_from_month_day(1, 14), Ayana::Dakshinayana);
    assert_eq!(ayana_from_month_day(1, 15), Ayana::Uttarayana);
}

#[test]
fn nakshatra_wrap_boundary() {
    let just_below = nakshatra_from_longitude(Longitude::new(359.999_999));
    let at_360 = nakshatra_from_longitude(Longitude::new(360.0));
    let just_above = nakshatra_from_longitude(Longitude::new(0.000_001));
    assert_eq!(just_below.number, 27);
    assert_eq!(at_360.number, 27);
    assert_eq!(just_above.number, 1);
}

#[test]
fn boundaries_follow_ceiling_rule() {
    assert_eq!(nakshatra_from_longitude(Longitude::new(0.0)).number, 27);
    assert_eq!(nakshatra_from_longitude(Longitude::new(40.0)).number, 3);
    assert_eq!(tithi_from_elongation(12.0).index, 1);
    assert_eq!(tithi_from_elongation(180.0).index, 15);
    assert_eq!(tithi_from_elongation(180.0).paksha, Paksha::Shukla);
    assert_eq!(karana_from_elongation(6.0).number, 1);
    assert_eq!(yoga_from_sum(0.0).number, 27);
}

proptest! {
    #[test]
    fn indices_match_ceiling_formula(x in 0.001f64..359.999) {
        let expected_tithi = (x / 12.0).ceil() as u8;
        prop_assert_eq!(tithi_from_elongation(x).index, expected_tithi);
        let expected_nak = (x * 27.0 / 360.0).ceil() as u8;
        prop_assert_eq!(nakshatra_from_longitude(Longitude::new(x)).number, expected_nak);
    }
}
