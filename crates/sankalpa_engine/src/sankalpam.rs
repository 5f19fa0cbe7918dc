//! The sankalpam sentence rendered from an element set.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::elements::ElementSet;

/// A complete sankalpam declaration in IAST.
///
/// Order is fixed: samvatsara, ayana, ritu, masa, paksha and tithi, vara,
/// nakshatra, then the closing clause. The text ends with a full stop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SankalpamText(String);

impl SankalpamText {
    pub fn render(elements: &ElementSet) -> Self {
        let ElementSet {
            samvatsara,
            ayana,
            ritu,
            masa,
            paksha,
            tithi,
            vara,
            nakshatra,
            ..
        } = elements;
        Self(format!(
            "Śrī Śubha {samvatsara} Nāma Samvatsare, {ayana}, {ritu} Ṛtau, \
             {masa} Māse, {paksha}, {tithi} Śubha Tithau, \
             {vara} Vāsara Yuktāyām, {nakshatra} Nakṣatra Yuktāyām, \
             Śubha Yoga Śubha Karaṇa Evaṃ Guṇa Viśeṣaṇa Viśiṣṭāyām, \
             Asyāṃ Śubha Tithau."
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for SankalpamText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SankalpamText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
