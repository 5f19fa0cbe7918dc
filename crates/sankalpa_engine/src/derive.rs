//! Element Deriver: local tithi, nakshatra, masa, yoga and karana.
//!
//! Any ephemeris failure yields [`LocalComputation::Unavailable`]; callers
//! then fall back to the provider's elements as a whole.

use chrono::{DateTime, Utc};
use sankalpa_ephem::{Ephemeris, EphemerisError};
use sankalpa_time::{centuries_since_j2000, instant_to_jd};
use sankalpa_vedic::{
    Ayanamsa, KaranaInfo, Longitude, MasaInfo, NakshatraInfo, Nirayana, Sayana, TithiInfo,
    YogaInfo, karana_from_elongation, masa_from_sun, nakshatra_from_longitude,
    tithi_from_longitudes, yoga_from_longitudes,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Elements derived from Sun and Moon longitudes at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalElements {
    pub at: DateTime<Utc>,
    pub ayanamsa_deg: f64,
    pub sun_sayana: Longitude<Sayana>,
    pub moon_sayana: Longitude<Sayana>,
    pub sun_nirayana: Longitude<Nirayana>,
    pub moon_nirayana: Longitude<Nirayana>,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub masa: MasaInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
}

/// Outcome of local derivation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LocalComputation {
    Success(LocalElements),
    Unavailable { reason: String },
}

impl LocalComputation {
    pub fn elements(&self) -> Option<&LocalElements> {
        match self {
            Self::Success(e) => Some(e),
            Self::Unavailable { .. } => None,
        }
    }
}

fn finite(deg: f64, what: &'static str) -> Result<f64, EphemerisError> {
    if deg.is_finite() {
        Ok(deg)
    } else {
        Err(EphemerisError::Unavailable(format!("{what} longitude is not finite")))
    }
}

fn try_derive<E: Ephemeris, A: Ayanamsa>(
    ephemeris: &E,
    ayanamsa: &A,
    at: &DateTime<Utc>,
) -> Result<LocalElements, EphemerisError> {
    let sun = Longitude::<Sayana>::new(finite(ephemeris.sun_longitude(at)?, "sun")?);
    let moon = Longitude::<Sayana>::new(finite(ephemeris.moon_longitude(at)?, "moon")?);

    let t = centuries_since_j2000(instant_to_jd(at));
    let offset = ayanamsa.offset_deg(t);
    let sun_nirayana = sun.to_nirayana(offset);
    let moon_nirayana = moon.to_nirayana(offset);

    Ok(LocalElements {
        at: *at,
        ayanamsa_deg: offset,
        sun_sayana: sun,
        moon_sayana: moon,
        sun_nirayana,
        moon_nirayana,
        tithi: tithi_from_longitudes(moon, sun),
        nakshatra: nakshatra_from_longitude(moon_nirayana),
        masa: masa_from_sun(sun_nirayana),
        yoga: yoga_from_longitudes(moon_nirayana, sun_nirayana),
        karana: karana_from_elongation(moon.separation_from(sun)),
    })
}

/// Derive all local elements at the anchor instant `at`.
pub fn derive_elements<E: Ephemeris, A: Ayanamsa>(
    ephemeris: &E,
    ayanamsa: &A,
    at: &DateTime<Utc>,
) -> LocalComputation {
    match try_derive(ephemeris, ayanamsa, at) {
        Ok(elements) => {
            debug!(
                %at,
                tithi = elements.tithi.index,
                nakshatra = elements.nakshatra.number,
                masa = elements.masa.index,
                ayanamsa = elements.ayanamsa_deg,
                "local elements derived"
            );
            LocalComputation::Success(elements)
        }
        Err(e) => {
            warn!(%at, error = %e, "local derivation unavailable");
            LocalComputation::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use sankalpa_ephem::GeoObserver;
    use sankalpa_vedic::{LinearAyanamsa, Masa, Paksha, Tithi};

    use super::*;

    /// Fixed longitudes, or a failure on the moon query.
    struct Fixed {
        sun: f64,
        moon: Result<f64, ()>,
    }

    impl Ephemeris for Fixed {
        fn sun_longitude(&self, _: &DateTime<Utc>) -> Result<f64, EphemerisError> {
            Ok(self.sun)
        }
        fn moon_longitude(&self, _: &DateTime<Utc>) -> Result<f64, EphemerisError> {
            self.moon
                .map_err(|_| EphemerisError::Unavailable("moon offline".into()))
        }
        fn next_sunrise(
            &self,
            _: &GeoObserver,
            _: &DateTime<Utc>,
        ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
            Ok(None)
        }
    }

    fn j2000() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn derives_from_fixed_longitudes() {
        // Ayanamsa at J2000 is exactly 23.85.
        let eph = Fixed { sun: 280.0, moon: Ok(101.0) };
        let r = derive_elements(&eph, &LinearAyanamsa::default(), &j2000());
        let e = r.elements().unwrap();
        assert!((e.ayanamsa_deg - 23.85).abs() < 1e-9);
        // Δ = 181 → first tithi of Krishna paksha
        assert_eq!(e.tithi.index, 16);
        assert_eq!(e.tithi.paksha, Paksha::Krishna);
        assert_eq!(e.tithi.tithi, Tithi::Pratipad);
        // Moon nirayana 77.15 → 6th nakshatra (Ardra spans 66.67-80)
        assert_eq!(e.nakshatra.number, 6);
        // Sun nirayana 256.15 → Dhanu → Pausha
        assert_eq!(e.masa.masa, Masa::Pausha);
    }

    #[test]
    fn exact_opposition_is_purnima() {
        let eph = Fixed { sun: 280.0, moon: Ok(100.0) };
        let r = derive_elements(&eph, &LinearAyanamsa::default(), &j2000());
        let e = r.elements().unwrap();
        assert_eq!(e.tithi.index, 15);
        assert_eq!(e.tithi.tithi, Tithi::Purnima);
        assert_eq!(e.tithi.paksha, Paksha::Shukla);
    }

    #[test]
    fn moon_failure_is_unavailable() {
        let eph = Fixed { sun: 10.0, moon: Err(()) };
        let r = derive_elements(&eph, &LinearAyanamsa::default(), &j2000());
        assert!(matches!(r, LocalComputation::Unavailable { .. }));
        assert!(r.elements().is_none());
    }

    #[test]
    fn non_finite_is_unavailable() {
        let eph = Fixed { sun: f64::NAN, moon: Ok(0.0) };
        let r = derive_elements(&eph, &LinearAyanamsa::default(), &j2000());
        assert!(matches!(r, LocalComputation::Unavailable { .. }));
    }

    #[test]
    fn new_moon_is_amavasya_side() {
        let eph = Fixed { sun: 100.0, moon: Ok(99.5) };
        let r = derive_elements(&eph, &LinearAyanamsa::default(), &j2000());
        let e = r.elements().unwrap();
        assert_eq!(e.tithi.tithi, Tithi::Amavasya);
        assert_eq!(e.karana.number, 60);
    }
}
