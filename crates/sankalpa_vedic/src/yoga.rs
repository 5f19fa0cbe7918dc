//! Yoga: 27 divisions of the sidereal Sun + Moon longitude sum.

use serde::Serialize;

use crate::longitude::{Longitude, Nirayana};
use crate::util::normalize_360;

/// Span of one yoga: 360/27 degrees.
pub const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Viṣkambha",
            Self::Priti => "Prīti",
            Self::Ayushman => "Āyuṣmān",
            Self::Saubhagya => "Saubhāgya",
            Self::Shobhana => "Śobhana",
            Self::Atiganda => "Atigaṇḍa",
            Self::Sukarma => "Sukarmā",
            Self::Dhriti => "Dhṛti",
            Self::Shula => "Śūla",
            Self::Ganda => "Gaṇḍa",
            Self::Vriddhi => "Vṛddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyāghāta",
            Self::Harshana => "Harṣaṇa",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatīpāta",
            Self::Variyan => "Varīyān",
            Self::Parigha => "Parigha",
            Self::Shiva => "Śiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sādhya",
            Self::Shubha => "Śubha",
            Self::Shukla => "Śukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhṛti",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 1-based number (1-27).
    pub number: u8,
}

/// Yoga from a longitude sum in degrees (normalized first).
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let s = normalize_360(sum_deg);
    // Same ceiling rule as the nakshatra: 0° closes Vaidhṛti.
    let number = match (s * 27.0 / 360.0).ceil() as u8 {
        0 => 27,
        n => n.min(27),
    };
    YogaInfo {
        yoga: ALL_YOGAS[usize::from(number - 1)],
        number,
    }
}

/// Yoga from sidereal Moon and Sun longitudes.
pub fn yoga_from_longitudes(moon: Longitude<Nirayana>, sun: Longitude<Nirayana>) -> YogaInfo {
    yoga_from_sum(moon.sum_with(sun))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(yoga_from_sum(0.5).yoga, Yoga::Vishkambha);
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vaidhriti);
        assert_eq!(yoga_from_sum(359.0).yoga, Yoga::Vaidhriti);
        assert_eq!(yoga_from_sum(359.0).number, 27);
    }

    #[test]
    fn sum_wraps() {
        let moon = Longitude::<Nirayana>::new(300.0);
        let sun = Longitude::<Nirayana>::new(100.0);
        // 400 mod 360 = 40, the closing edge of the third yoga
        assert_eq!(yoga_from_longitudes(moon, sun).yoga, Yoga::Ayushman);
        let moon = Longitude::<Nirayana>::new(300.5);
        assert_eq!(yoga_from_longitudes(moon, sun).yoga, Yoga::Saubhagya);
    }

    #[test]
    fn spans_cover_circle() {
        let mut seen = [false; 27];
        for i in 0..27 {
            let mid = (i as f64 + 0.5) * YOGA_SPAN_DEG;
            seen[(yoga_from_sum(mid).number - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
