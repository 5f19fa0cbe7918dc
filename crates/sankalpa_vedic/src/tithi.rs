//! Tithi (lunar day) and paksha (fortnight) from Moon-Sun elongation.
//!
//! The elongation circle is cut into 30 tithis of 12 deg. Tithis 1-15 fall in
//! Shukla paksha (waxing), 16-30 in Krishna paksha (waning). The 15th of each
//! paksha carries its own name: Purnima (full moon) closing Shukla, Amavasya
//! (new moon) closing Krishna.
//!
//! An elongation exactly on a 12 deg boundary belongs to the tithi that
//! begins there.

use serde::Serialize;

use crate::longitude::{Frame, Longitude};
use crate::util::normalize_360;

/// Span of one tithi in degrees of elongation.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    Shukla,
    /// Waning half, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Śukla",
            Self::Krishna => "Kṛṣṇa",
        }
    }

    /// Locative form used in the sankalpam ("in the bright fortnight").
    pub const fn locative(self) -> &'static str {
        match self {
            Self::Shukla => "Śukla Pakṣe",
            Self::Krishna => "Kṛṣṇa Pakṣe",
        }
    }
}

/// Tithi names. The first fourteen repeat in both pakshas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    Pratipad,
    Dvitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dvadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

/// The fourteen tithis shared by both pakshas, in order.
pub const PAKSHA_TITHIS: [Tithi; 14] = [
    Tithi::Pratipad,
    Tithi::Dvitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dvadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    /// IAST name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipad => "Pratipad",
            Self::Dvitiya => "Dvitīyā",
            Self::Tritiya => "Tṛtīyā",
            Self::Chaturthi => "Caturthī",
            Self::Panchami => "Pañcamī",
            Self::Shashthi => "Ṣaṣṭhī",
            Self::Saptami => "Saptamī",
            Self::Ashtami => "Aṣṭamī",
            Self::Navami => "Navamī",
            Self::Dashami => "Daśamī",
            Self::Ekadashi => "Ekādaśī",
            Self::Dvadashi => "Dvādaśī",
            Self::Trayodashi => "Trayodaśī",
            Self::Chaturdashi => "Caturdaśī",
            Self::Purnima => "Pūrṇimā",
            Self::Amavasya => "Amāvāsyā",
        }
    }

    /// Tithi at 1-based position `n` (1-15) within `paksha`.
    ///
    /// Position 15 resolves to Purnima or Amavasya; out-of-range positions
    /// are clamped.
    pub const fn in_paksha(paksha: Paksha, n: u8) -> Self {
        if n >= 15 {
            return match paksha {
                Paksha::Shukla => Self::Purnima,
                Paksha::Krishna => Self::Amavasya,
            };
        }
        let i = if n == 0 { 0 } else { n - 1 };
        PAKSHA_TITHIS[i as usize]
    }
}

/// Result of tithi lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// Absolute 1-based index in the lunar month (1-30).
    pub index: u8,
    pub paksha: Paksha,
    /// 1-based position within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation already elapsed in this tithi, (0, 12]; 0 only
    /// exactly at conjunction.
    pub degrees_in_tithi: f64,
}

/// Tithi from Moon-Sun elongation in degrees (any value; normalized first).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let d = normalize_360(elongation_deg);
    // ceil(Δ/12): an exact multiple of 12° closes the outgoing tithi.
    let index = ((d / TITHI_SPAN_DEG).ceil() as u8).clamp(1, 30);
    let (paksha, tithi_in_paksha) = if index <= 15 {
        (Paksha::Shukla, index)
    } else {
        (Paksha::Krishna, index - 15)
    };

    TithiInfo {
        tithi: Tithi::in_paksha(paksha, tithi_in_paksha),
        index,
        paksha,
        tithi_in_paksha,
        degrees_in_tithi: d - f64::from(index - 1) * TITHI_SPAN_DEG,
    }
}

/// Tithi from Moon and Sun longitudes in the same frame.
///
/// The ayanamsa cancels in the difference, so either frame gives the same
/// result; mixing frames is rejected at compile time.
pub fn tithi_from_longitudes<F: Frame>(moon: Longitude<F>, sun: Longitude<F>) -> TithiInfo {
    tithi_from_elongation(moon.separation_from(sun))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::longitude::Sayana;

    #[test]
    fn first_tithi() {
        let t = tithi_from_elongation(0.0);
        assert_eq!(t.index, 1);
        assert_eq!(t.tithi, Tithi::Pratipad);
        assert_eq!(t.paksha, Paksha::Shukla);
    }

    #[test]
    fn exact_multiple_closes_outgoing_tithi() {
        assert_eq!(tithi_from_elongation(12.0).index, 1);
        assert_eq!(tithi_from_elongation(12.000_001).index, 2);
        assert_eq!(tithi_from_elongation(24.0).index, 2);
        assert!((tithi_from_elongation(12.0).degrees_in_tithi - 12.0).abs() < 1e-9);
    }

    #[test]
    fn opposition_is_purnima() {
        let t = tithi_from_elongation(180.0);
        assert_eq!(t.index, 15);
        assert_eq!(t.tithi, Tithi::Purnima);
        assert_eq!(t.paksha, Paksha::Shukla);

        let t = tithi_from_elongation(180.5);
        assert_eq!(t.index, 16);
        assert_eq!(t.tithi, Tithi::Pratipad);
        assert_eq!(t.paksha, Paksha::Krishna);
    }

    #[test]
    fn conjunction_starts_pratipad() {
        let t = tithi_from_elongation(0.0);
        assert_eq!(t.index, 1);
        assert_eq!(t.degrees_in_tithi, 0.0);
        assert_eq!(tithi_from_elongation(360.0).index, 1);
    }

    #[test]
    fn purnima_is_distinguished() {
        let t = tithi_from_elongation(170.0);
        assert_eq!(t.index, 15);
        assert_eq!(t.tithi, Tithi::Purnima);
        assert_eq!(t.tithi.name(), "Pūrṇimā");
        assert_eq!(t.paksha, Paksha::Shukla);
    }

    #[test]
    fn amavasya_is_distinguished() {
        let t = tithi_from_elongation(355.0);
        assert_eq!(t.index, 30);
        assert_eq!(t.tithi_in_paksha, 15);
        assert_eq!(t.tithi, Tithi::Amavasya);
        assert_eq!(t.paksha, Paksha::Krishna);
    }

    #[test]
    fn krishna_reuses_names() {
        let t = tithi_from_elongation(200.0);
        assert_eq!(t.index, 17);
        assert_eq!(t.tithi_in_paksha, 2);
        assert_eq!(t.tithi, Tithi::Dvitiya);
        assert_eq!(t.paksha.locative(), "Kṛṣṇa Pakṣe");
    }

    #[test]
    fn wraps_negative_and_large() {
        assert_eq!(tithi_from_elongation(-5.0).index, 30);
        assert_eq!(tithi_from_elongation(365.0).index, 1);
    }

    #[test]
    fn from_longitudes_across_zero() {
        let moon = Longitude::<Sayana>::new(20.0);
        let sun = Longitude::<Sayana>::new(350.0);
        let t = tithi_from_longitudes(moon, sun);
        assert_eq!(t.index, 3);
        assert!((t.degrees_in_tithi - 6.0).abs() < 1e-9);
    }

    #[test]
    fn in_paksha_positions() {
        assert_eq!(Tithi::in_paksha(Paksha::Krishna, 1), Tithi::Pratipad);
        assert_eq!(Tithi::in_paksha(Paksha::Shukla, 14), Tithi::Chaturdashi);
        assert_eq!(Tithi::in_paksha(Paksha::Shukla, 15), Tithi::Purnima);
        assert_eq!(Tithi::in_paksha(Paksha::Krishna, 15), Tithi::Amavasya);
    }
}
