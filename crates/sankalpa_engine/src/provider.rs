//! External calendar provider: contract, response record and HTTP client.
//!
//! The provider supplies the samvatsara (era year), ritu (season) and vara
//! (weekday) that have no local derivation, plus its own tithi, nakshatra and
//! masa estimates used when local derivation is unavailable.

use std::time::Duration;

use reqwest::blocking::Client;
use sankalpa_ephem::GeoObserver;
use sankalpa_time::{CivilDate, TzOffset};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::SankalpaConfig;
use crate::error::ProviderError;

/// Parameters of one provider lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderQuery<'a> {
    pub date: CivilDate,
    pub observer: GeoObserver,
    pub tz: TzOffset,
    pub location_label: &'a str,
}

/// Element names as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderRecord {
    pub samvatsara: String,
    pub ritu: String,
    pub masa: String,
    /// Full tithi text, often including the paksha (e.g. "Kṛṣṇa Pakṣa Tṛtīyā").
    pub tithi: String,
    pub vara: String,
    pub nakshatra: String,
    /// Date the provider says it answered for, when echoed.
    pub date: Option<CivilDate>,
}

/// Reads `{ "<field>": { "name": "..." } }`.
fn named(body: &Value, field: &'static str) -> Result<String, ProviderError> {
    body.get(field)
        .and_then(|v| v.get("name"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ProviderError::Malformed(format!("missing field {field}.name")))
}

fn echoed_date(body: &Value) -> Result<Option<CivilDate>, ProviderError> {
    let Some(date) = body.get("date") else {
        return Ok(None);
    };
    let part = |key: &str| date.get(key).and_then(Value::as_i64);
    match (part("year"), part("month"), part("day")) {
        (Some(y), Some(m), Some(d)) => {
            let (y, m, d) = (
                i32::try_from(y).map_err(|_| bad_date())?,
                u32::try_from(m).map_err(|_| bad_date())?,
                u32::try_from(d).map_err(|_| bad_date())?,
            );
            CivilDate::new(y, m, d).map(Some).map_err(|_| bad_date())
        }
        _ => Err(bad_date()),
    }
}

fn bad_date() -> ProviderError {
    ProviderError::Malformed("date must hold integer year, month and day".into())
}

impl ProviderRecord {
    /// Interpret a decoded provider response body.
    ///
    /// A top-level `"error"` string is a provider-reported failure. Any
    /// missing element is malformed; no partial record is produced.
    pub fn from_json(body: &Value) -> Result<Self, ProviderError> {
        if let Some(err) = body.get("error") {
            let msg = err.as_str().map_or_else(|| err.to_string(), str::to_owned);
            return Err(ProviderError::Remote(msg));
        }
        Ok(Self {
            samvatsara: named(body, "samvatsara")?,
            ritu: named(body, "ritu")?,
            masa: named(body, "masa")?,
            tithi: named(body, "tithi")?,
            vara: named(body, "vara")?,
            nakshatra: named(body, "nakshatra")?,
            date: echoed_date(body)?,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, ProviderError> {
        let body: Value =
            serde_json::from_str(text).map_err(|e| ProviderError::Malformed(e.to_string()))?;
        Self::from_json(&body)
    }
}

/// Source of provider records.
pub trait CalendarProvider {
    fn fetch(&self, query: &ProviderQuery<'_>) -> Result<ProviderRecord, ProviderError>;
}

impl<P: CalendarProvider + ?Sized> CalendarProvider for &P {
    fn fetch(&self, query: &ProviderQuery<'_>) -> Result<ProviderRecord, ProviderError> {
        (**self).fetch(query)
    }
}

/// Provider reached over HTTP GET with query parameters
/// `year, month, day, latitude, longitude, timezone, locationName`.
///
/// Every request is bounded by the client timeout; no retries are made.
#[derive(Debug, Clone)]
pub struct HttpCalendarProvider {
    base_url: String,
    client: Client,
}

impl HttpCalendarProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn from_config(config: &SankalpaConfig) -> Result<Self, ProviderError> {
        Self::new(config.provider_url.clone(), config.provider_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Query-string pairs for a lookup.
pub fn query_params(query: &ProviderQuery<'_>) -> [(&'static str, String); 7] {
    [
        ("year", query.date.year().to_string()),
        ("month", query.date.month().to_string()),
        ("day", query.date.day().to_string()),
        ("latitude", query.observer.latitude_deg().to_string()),
        ("longitude", query.observer.longitude_deg().to_string()),
        ("timezone", query.tz.hours().to_string()),
        ("locationName", query.location_label.to_string()),
    ]
}

impl CalendarProvider for HttpCalendarProvider {
    fn fetch(&self, query: &ProviderQuery<'_>) -> Result<ProviderRecord, ProviderError> {
        debug!(url = %self.base_url, date = %query.date, "provider request");
        let response = self
            .client
            .get(&self.base_url)
            .query(&query_params(query))
            .send()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }
        let body: Value = response
            .json()
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;
        ProviderRecord::from_json(&body)
    }
}
