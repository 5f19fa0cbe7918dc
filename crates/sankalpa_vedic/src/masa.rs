//! Masa (lunar month) by the Amanta rule.
//!
//! The month is named after the solar sign that follows the one the
//! sidereal Sun occupies: Sun in Mesha (sign 0) gives Vaiśākha (1), Sun in
//! Mina (sign 11) gives Caitra (0).

use serde::Serialize;

use crate::longitude::{Longitude, Nirayana};

/// Span of one solar sign (rashi) in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 lunar months, Chaitra first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Caitra",
            Self::Vaishakha => "Vaiśākha",
            Self::Jyeshtha => "Jyeṣṭha",
            Self::Ashadha => "Āṣāḍha",
            Self::Shravana => "Śrāvaṇa",
            Self::Bhadrapada => "Bhādrapada",
            Self::Ashvina => "Āśvina",
            Self::Kartika => "Kārttika",
            Self::Margashirsha => "Mārgaśīrṣa",
            Self::Pausha => "Pauṣa",
            Self::Magha => "Māgha",
            Self::Phalguna => "Phālguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Result of masa lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MasaInfo {
    pub masa: Masa,
    /// 0-based month index (0-11).
    pub index: u8,
    /// 0-based solar sign of the sidereal Sun (0 = Mesha).
    pub solar_sign: u8,
}

/// Amanta month for a sidereal Sun longitude.
pub fn masa_from_sun(sun: Longitude<Nirayana>) -> MasaInfo {
    let solar_sign = ((sun.degrees() / RASHI_SPAN_DEG).floor() as u8).min(11);
    let index = (solar_sign + 1) % 12;
    MasaInfo {
        masa: ALL_MASAS[index as usize],
        index,
        solar_sign,
    }
}
