//! Nakshatra (lunar mansion) from the Moon's sidereal longitude.
//!
//! The sidereal ecliptic is divided into 27 equal nakshatras of 13°20'.
//! A longitude exactly on a division belongs to the nakshatra starting there,
//! and 360° wraps to Aśvinī.

use serde::Serialize;

use crate::longitude::{Longitude, Nirayana};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// IAST name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Aśvinī",
            Self::Bharani => "Bharaṇī",
            Self::Krittika => "Kṛttikā",
            Self::Rohini => "Rohiṇī",
            Self::Mrigashira => "Mṛgaśīrṣā",
            Self::Ardra => "Ārdrā",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Puṣya",
            Self::Ashlesha => "Āśleṣā",
            Self::Magha => "Maghā",
            Self::PurvaPhalguni => "Pūrvaphalgunī",
            Self::UttaraPhalguni => "Uttaraphalgunī",
            Self::Hasta => "Hasta",
            Self::Chitra => "Citrā",
            Self::Swati => "Svātī",
            Self::Vishakha => "Viśākhā",
            Self::Anuradha => "Anurādhā",
            Self::Jyeshtha => "Jyeṣṭhā",
            Self::Mula => "Mūla",
            Self::PurvaAshadha => "Pūrvāṣāḍhā",
            Self::UttaraAshadha => "Uttarāṣāḍhā",
            Self::Shravana => "Śravaṇa",
            Self::Dhanishtha => "Dhaniṣṭhā",
            Self::Shatabhisha => "Śatabhiṣak",
            Self::PurvaBhadrapada => "Pūrvabhādrapadā",
            Self::UttaraBhadrapada => "Uttarabhādrapadā",
            Self::Revati => "Revatī",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 1-based number (1 = Ashwini, 27 = Revati).
    pub number: u8,
    /// Degrees already traversed within the nakshatra, (0, 13.333...].
    pub degrees_in_nakshatra: f64,
}

/// Nakshatra occupied by a sidereal Moon longitude.
pub fn nakshatra_from_longitude(moon: Longitude<Nirayana>) -> NakshatraInfo {
    let lon = moon.degrees();
    // ceil(lon × 27 / 360); 0° is the closing edge of Revati.
    // Multiplying first keeps whole-degree boundaries such as 40° exact.
    let number = match (lon * 27.0 / 360.0).ceil() as u8 {
        0 => 27,
        n => n.min(27),
    };
    let start = f64::from(number - 1) * NAKSHATRA_SPAN_DEG;
    let degrees_in_nakshatra = if lon == 0.0 {
        NAKSHATRA_SPAN_DEG
    } else {
        lon - start
    };
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[usize::from(number - 1)],
        number,
        degrees_in_nakshatra,
    }
}
