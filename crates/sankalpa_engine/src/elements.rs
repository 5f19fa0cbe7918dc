//! The reconciled, immutable element set.

use serde::Serialize;

/// Where the tithi, nakshatra, masa and paksha values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementSource {
    /// Derived locally from Sun/Moon longitudes at sunrise.
    Local,
    /// Parsed from the external provider's record.
    Provider,
}

/// Numeric indices, present only for locally derived elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementIndices {
    /// 1-30
    pub tithi: u8,
    /// 1-27
    pub nakshatra: u8,
    /// 0-11, Chaitra = 0
    pub masa: u8,
}

/// The names interpolated into the sankalpam.
///
/// `samvatsara`, `ritu` and `vara` always come from the provider; `ayana` is
/// always computed from the civil date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSet {
    pub samvatsara: String,
    /// Locative ayana label.
    pub ayana: String,
    pub ritu: String,
    pub masa: String,
    /// Locative paksha label.
    pub paksha: String,
    pub tithi: String,
    pub vara: String,
    pub nakshatra: String,
    pub yoga: Option<String>,
    pub karana: Option<String>,
    pub indices: Option<ElementIndices>,
    pub source: ElementSource,
}
