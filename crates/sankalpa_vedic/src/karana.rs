//! Karana: half-tithi, 60 per synodic month.
//!
//! Numbering 1-60 by 6 deg of elongation. The fixed karanas sit at the ends
//! of the month (1 Kiṃstughna, 58 Śakuni, 59 Catuṣpada, 60 Nāga); numbers
//! 2-57 cycle through the seven movable karanas eight times.

use serde::Serialize;

use crate::util::normalize_360;

/// Span of one karana in degrees of elongation.
pub const KARANA_SPAN_DEG: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// Movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Bālava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vaṇija",
            Self::Vishti => "Viṣṭi",
            Self::Shakuni => "Śakuni",
            Self::Chatushpada => "Catuṣpada",
            Self::Naga => "Nāga",
            Self::Kimstughna => "Kiṃstughna",
        }
    }

    /// Karana for a 1-based sequence number (1-60, clamped).
    pub const fn from_number(n: u8) -> Self {
        match n {
            0 | 1 => Self::Kimstughna,
            58 => Self::Shakuni,
            59 => Self::Chatushpada,
            60.. => Self::Naga,
            _ => MOVABLE_KARANAS[((n - 2) % 7) as usize],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 1-based sequence number within the synodic month (1-60).
    pub number: u8,
}

/// Karana from Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let d = normalize_360(elongation_deg);
    // ceil(Δ/6), with conjunction opening Kiṃstughna like Pratipad.
    let number = ((d / KARANA_SPAN_DEG).ceil() as u8).clamp(1, 60);
    KaranaInfo {
        karana: Karana::from_number(number),
        number,
    }
}
