//! Reconciliation of local and provider elements.
//!
//! Local values override the provider's tithi, paksha, nakshatra and masa.
//! If local derivation is unavailable, all four come from the provider
//! record together; they are never mixed.

use sankalpa_time::CivilDate;
use sankalpa_vedic::ayana_from_month_day;
use tracing::debug;

use crate::derive::LocalComputation;
use crate::elements::{ElementIndices, ElementSet, ElementSource};
use crate::provider::ProviderRecord;
use crate::provider_parse::parse_provider_tithi;

/// Merge `local` with `record` for `date` into one element set.
pub fn reconcile(record: &ProviderRecord, local: &LocalComputation, date: CivilDate) -> ElementSet {
    let ayana = ayana_from_month_day(date.month(), date.day()).locative().to_string();

    match local {
        LocalComputation::Success(e) => ElementSet {
            samvatsara: record.samvatsara.clone(),
            ayana,
            ritu: record.ritu.clone(),
            masa: e.masa.masa.name().to_string(),
            paksha: e.tithi.paksha.locative().to_string(),
            tithi: e.tithi.tithi.name().to_string(),
            vara: record.vara.clone(),
            nakshatra: e.nakshatra.nakshatra.name().to_string(),
            yoga: Some(e.yoga.yoga.name().to_string()),
            karana: Some(e.karana.karana.name().to_string()),
            indices: Some(ElementIndices {
                tithi: e.tithi.index,
                nakshatra: e.nakshatra.number,
                masa: e.masa.index,
            }),
            source: ElementSource::Local,
        },
        LocalComputation::Unavailable { reason } => {
            let parsed = parse_provider_tithi(&record.tithi);
            debug!(%reason, tier = ?parsed.tier, "using provider elements");
            ElementSet {
                samvatsara: record.samvatsara.clone(),
                ayana,
                ritu: record.ritu.clone(),
                masa: record.masa.clone(),
                paksha: parsed.paksha_label().to_string(),
                tithi: parsed.display_name,
                vara: record.vara.clone(),
                nakshatra: record.nakshatra.clone(),
                yoga: None,
                karana: None,
                indices: None,
                source: ElementSource::Provider,
            }
        }
    }
}
