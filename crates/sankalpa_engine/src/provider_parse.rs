//! Recovering paksha and tithi name from a provider's free-text tithi field.
//!
//! Used only when local derivation is unavailable. Matching runs in three
//! tiers:
//! 1. exact IAST marker ("Śukla" / "Kṛṣṇa") in the NFC text;
//! 2. transliteration variants after folding (NFD, combining marks
//!    stripped, lowercased): "shukla", "sukla", "krishna", "krsna", ...;
//! 3. the bare "Pakṣe" label when neither marker is present.
//!
//! A structured provider can replace this module without touching the
//! element derivation.

use sankalpa_vedic::Paksha;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Label used when no paksha marker is recognised.
pub const UNKNOWN_PAKSHA_LABEL: &str = "Pakṣe";

/// Which tier produced the paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Variant,
    Default,
}

/// Paksha and display name recovered from provider text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTithi {
    pub paksha: Option<Paksha>,
    pub tier: MatchTier,
    /// Tithi name for the sankalpam.
    pub display_name: String,
}

impl ParsedTithi {
    /// Locative paksha label ("Śukla Pakṣe", "Kṛṣṇa Pakṣe" or "Pakṣe").
    pub fn paksha_label(&self) -> &'static str {
        self.paksha.map_or(UNKNOWN_PAKSHA_LABEL, Paksha::locative)
    }
}

const SHUKLA_VARIANTS: [&str; 1] = ["ukla"];
const KRISHNA_VARIANTS: [&str; 3] = ["krsna", "rishna", "krshna"];

/// Strip diacritics and case: "Kṛṣṇa" → "krsna", "Śukla" → "sukla".
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Paksha marker present in `text`, with the tier that found it.
pub fn paksha_from_text(text: &str) -> (Option<Paksha>, MatchTier) {
    let composed: String = text.nfc().collect();
    if composed.contains(Paksha::Shukla.name()) {
        return (Some(Paksha::Shukla), MatchTier::Exact);
    }
    if composed.contains(Paksha::Krishna.name()) {
        return (Some(Paksha::Krishna), MatchTier::Exact);
    }

    let folded = fold(text);
    if SHUKLA_VARIANTS.iter().any(|v| folded.contains(v)) {
        return (Some(Paksha::Shukla), MatchTier::Variant);
    }
    if KRISHNA_VARIANTS.iter().any(|v| folded.contains(v)) {
        return (Some(Paksha::Krishna), MatchTier::Variant);
    }
    (None, MatchTier::Default)
}

/// Display name: the last word when the field has more than two words
/// ("Kṛṣṇa Pakṣa Tṛtīyā" → "Tṛtīyā"), otherwise the whole trimmed field.
pub fn tithi_display_name(text: &str) -> &str {
    let words: Vec<&str> = text.split_whitespace().collect();
    match words.as_slice() {
        [.., last] if words.len() > 2 => *last,
        _ => text.trim(),
    }
}

/// Parse a provider tithi field.
pub fn parse_provider_tithi(text: &str) -> ParsedTithi {
    let (paksha, tier) = paksha_from_text(text);
    ParsedTithi {
        paksha,
        tier,
        display_name: tithi_display_name(text).to_string(),
    }
}
