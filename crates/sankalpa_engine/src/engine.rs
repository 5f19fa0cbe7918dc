//! The [`Sankalpa`] engine: provider lookup, sunrise anchoring, local
//! derivation, reconciliation and rendering for one request.

use chrono::{DateTime, Duration, Utc};
use sankalpa_ephem::Ephemeris;
use sankalpa_time::CivilDate;
use sankalpa_vedic::AyanamsaModel;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::SankalpaConfig;
use crate::derive::{LocalComputation, derive_elements};
use crate::elements::ElementSet;
use crate::error::SankalpaError;
use crate::provider::{CalendarProvider, ProviderQuery};
use crate::reconcile::reconcile;
use crate::request::PanchangaRequest;
use crate::sankalpam::SankalpamText;
use crate::sunrise::{SunriseAnchor, locate_sunrise};

/// Result of a full panchanga request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangaReport {
    pub date: CivilDate,
    pub location_label: String,
    pub anchor: SunriseAnchor,
    pub elements: ElementSet,
    pub sankalpam: SankalpamText,
}

/// Local derivation only, without the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalReport {
    pub date: CivilDate,
    pub anchor: SunriseAnchor,
    pub local: LocalComputation,
}

/// Panchanga engine over an ephemeris `E` and a calendar provider `P`.
///
/// Holds no per-request state; every call is independent and the same
/// inputs always produce the same report.
#[derive(Debug, Clone)]
pub struct Sankalpa<E, P> {
    ephemeris: E,
    provider: P,
    config: SankalpaConfig,
    margin: Duration,
}

impl<E: Ephemeris, P: CalendarProvider> Sankalpa<E, P> {
    pub fn new(ephemeris: E, provider: P, config: SankalpaConfig) -> Result<Self, SankalpaError> {
        config.validate()?;
        let margin = Duration::from_std(config.sunrise_margin)
            .map_err(|_| SankalpaError::InvalidConfig("sunrise_margin is out of range"))?;
        Ok(Self {
            ephemeris,
            provider,
            config,
            margin,
        })
    }

    pub fn config(&self) -> &SankalpaConfig {
        &self.config
    }

    pub fn ayanamsa(&self) -> &AyanamsaModel {
        &self.config.ayanamsa
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Full panchanga for `request`, resolving a missing date against the
    /// current clock.
    pub fn panchanga(&self, request: &PanchangaRequest) -> Result<PanchangaReport, SankalpaError> {
        self.panchanga_at(request, &Utc::now())
    }

    /// Full panchanga with `now` standing in for the clock.
    ///
    /// Provider failures propagate. Ephemeris failures do not: they resolve
    /// to a noon anchor or to the provider's own elements.
    pub fn panchanga_at(
        &self,
        request: &PanchangaRequest,
        now: &DateTime<Utc>,
    ) -> Result<PanchangaReport, SankalpaError> {
        let date = request.resolve_date(now);
        let label = request.label_or(&self.config.default_location_label);

        let record = self.provider.fetch(&ProviderQuery {
            date,
            observer: request.observer,
            tz: request.tz,
            location_label: label,
        })?;
        if let Some(echoed) = record.date.filter(|d| *d != date) {
            warn!(%date, %echoed, "provider answered for a different date");
        }

        let anchor = self.sunrise_on(request, date);
        let local = derive_elements(&self.ephemeris, &self.config.ayanamsa, &anchor.instant);
        let elements = reconcile(&record, &local, date);
        let sankalpam = SankalpamText::render(&elements);

        info!(
            %date,
            location = label,
            anchor = %anchor.instant,
            source = ?elements.source,
            "panchanga computed"
        );

        Ok(PanchangaReport {
            date,
            location_label: label.to_string(),
            anchor,
            elements,
            sankalpam,
        })
    }

    /// Local elements only; never contacts the provider.
    pub fn local_elements(&self, request: &PanchangaRequest) -> LocalReport {
        self.local_elements_at(request, &Utc::now())
    }

    pub fn local_elements_at(&self, request: &PanchangaRequest, now: &DateTime<Utc>) -> LocalReport {
        let date = request.resolve_date(now);
        let anchor = self.sunrise_on(request, date);
        let local = derive_elements(&self.ephemeris, &self.config.ayanamsa, &anchor.instant);
        LocalReport { date, anchor, local }
    }

    /// Sunrise anchor for the request's date.
    pub fn sunrise(&self, request: &PanchangaRequest) -> SunriseAnchor {
        self.sunrise_at(request, &Utc::now())
    }

    pub fn sunrise_at(&self, request: &PanchangaRequest, now: &DateTime<Utc>) -> SunriseAnchor {
        self.sunrise_on(request, request.resolve_date(now))
    }

    fn sunrise_on(&self, request: &PanchangaRequest, date: CivilDate) -> SunriseAnchor {
        locate_sunrise(
            &self.ephemeris,
            &request.observer,
            date,
            request.tz,
            self.margin,
        )
    }
}
