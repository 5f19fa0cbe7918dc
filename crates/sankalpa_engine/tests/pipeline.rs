//! End-to-end tests of the panchanga pipeline with an in-memory provider.

use std::cell::Cell;

use chrono::{DateTime, Duration, TimeZone, Utc};
use sankalpa_engine::{
    AnchorKind, CalendarProvider, ElementSource, LocalComputation, PanchangaRequest,
    ProviderError, ProviderQuery, ProviderRecord, Sankalpa, SankalpaConfig, SankalpaError,
};
use sankalpa_ephem::{AnalyticEphemeris, Ephemeris, EphemerisError, GeoObserver};
use sankalpa_time::CivilDate;

/// Returns one canned record (or error) and counts calls.
#[derive(Debug)]
struct FakeProvider {
    result: Result<ProviderRecord, ProviderError>,
    calls: Cell<usize>,
    last_label: Cell<Option<&'static str>>,
}

impl FakeProvider {
    fn ok(record: ProviderRecord) -> Self {
        Self {
            result: Ok(record),
            calls: Cell::new(0),
            last_label: Cell::new(None),
        }
    }

    fn failing(err: ProviderError) -> Self {
        Self {
            result: Err(err),
            calls: Cell::new(0),
            last_label: Cell::new(None),
        }
    }
}

impl CalendarProvider for FakeProvider {
    fn fetch(&self, query: &ProviderQuery<'_>) -> Result<ProviderRecord, ProviderError> {
        self.calls.set(self.calls.get() + 1);
        let known = ["Frisco", "Unknown"];
        self.last_label
            .set(known.into_iter().find(|l| *l == query.location_label));
        self.result.clone()
    }
}

/// Fixed longitudes with sunrise seven hours after the search start.
struct FixedEphemeris {
    sun: f64,
    moon: f64,
}

impl Ephemeris for FixedEphemeris {
    fn sun_longitude(&self, _: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(self.sun)
    }
    fn moon_longitude(&self, _: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(self.moon)
    }
    fn next_sunrise(
        &self,
        _: &GeoObserver,
        after: &DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        Ok(Some(*after + Duration::hours(7)))
    }
}

/// Every query fails.
struct BrokenEphemeris;

impl Ephemeris for BrokenEphemeris {
    fn sun_longitude(&self, _: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable("sun offline".into()))
    }
    fn moon_longitude(&self, _: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable("moon offline".into()))
    }
    fn next_sunrise(
        &self,
        _: &GeoObserver,
        _: &DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        Err(EphemerisError::Unavailable("sunrise offline".into()))
    }
}

fn record(tithi: &str) -> ProviderRecord {
    ProviderRecord {
        samvatsara: "Viśvāvasu".into(),
        ritu: "Hemanta".into(),
        masa: "Mārgaśīrṣa".into(),
        tithi: tithi.into(),
        vara: "Maṅgala".into(),
        nakshatra: "Anurādhā".into(),
        date: None,
    }
}

fn frisco_request() -> PanchangaRequest {
    PanchangaRequest::new(33.15, -96.82, -6.0)
        .unwrap()
        .with_date(CivilDate::new(2025, 12, 23).unwrap())
        .with_location("Frisco")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 23, 15, 0, 0).unwrap()
}

#[test]
fn local_elements_override_provider() {
    // Sun 280, Moon 101: Kṛṣṇa Pratipad, Ārdrā, Pauṣa.
    let engine = Sankalpa::new(
        FixedEphemeris { sun: 280.0, moon: 101.0 },
        FakeProvider::ok(record("Śukla Pakṣa Pañcamī")),
        SankalpaConfig::default(),
    )
    .unwrap();
    let report = engine.panchanga_at(&frisco_request(), &now()).unwrap();
    let e = &report.elements;

    assert_eq!(e.source, ElementSource::Local);
    assert_eq!(e.tithi, "Pratipad");
    assert_eq!(e.paksha, "Kṛṣṇa Pakṣe");
    assert_eq!(e.nakshatra, "Ārdrā");
    assert_eq!(e.masa, "Pauṣa");
    let idx = e.indices.unwrap();
    assert_eq!((idx.tithi, idx.nakshatra, idx.masa), (16, 6, 9));
    assert!(e.yoga.is_some());
    assert!(e.karana.is_some());

    // Never derived locally.
    assert_eq!(e.samvatsara, "Viśvāvasu");
    assert_eq!(e.ritu, "Hemanta");
    assert_eq!(e.vara, "Maṅgala");
    assert_eq!(e.ayana, "Dakṣiṇāyane");
}

#[test]
fn total_fallback_uses_provider_elements() {
    let engine = Sankalpa::new(
        BrokenEphemeris,
        FakeProvider::ok(record("Śukla Pakṣa Tṛtīyā")),
        SankalpaConfig::default(),
    )
    .unwrap();
    let report = engine.panchanga_at(&frisco_request(), &now()).unwrap();
    let e = &report.elements;

    assert_eq!(report.anchor.kind, AnchorKind::NoonFallback);
    assert_eq!(
        report.anchor.instant,
        Utc.with_ymd_and_hms(2025, 12, 23, 18, 0, 0).unwrap()
    );
    assert_eq!(e.source, ElementSource::Provider);
    assert_eq!(e.tithi, "Tṛtīyā");
    assert_eq!(e.paksha, "Śukla Pakṣe");
    assert_eq!(e.nakshatra, "Anurādhā");
    assert_eq!(e.masa, "Mārgaśīrṣa");
    assert!(e.indices.is_none());
    assert!(e.yoga.is_none());
    assert!(report.sankalpam.as_str().contains("Tṛtīyā Śubha Tithau"));
}

#[test]
fn fallback_paksha_from_variant_and_default() {
    let variant = Sankalpa::new(
        BrokenEphemeris,
        FakeProvider::ok(record("Krishna Paksha Dashami")),
        SankalpaConfig::default(),
    )
    .unwrap();
    let r = variant.panchanga_at(&frisco_request(), &now()).unwrap();
    assert_eq!(r.elements.paksha, "Kṛṣṇa Pakṣe");
    assert_eq!(r.elements.tithi, "Dashami");

    let bare = Sankalpa::new(
        BrokenEphemeris,
        FakeProvider::ok(record("Ekādaśī")),
        SankalpaConfig::default(),
    )
    .unwrap();
    let r = bare.panchanga_at(&frisco_request(), &now()).unwrap();
    assert_eq!(r.elements.paksha, "Pakṣe");
    assert_eq!(r.elements.tithi, "Ekādaśī");
}

#[test]
fn identical_requests_give_identical_reports() {
    let engine = Sankalpa::new(
        AnalyticEphemeris::default(),
        FakeProvider::ok(record("Śukla Pakṣa Tṛtīyā")),
        SankalpaConfig::default(),
    )
    .unwrap();
    let a = engine.panchanga_at(&frisco_request(), &now()).unwrap();
    let b = engine.panchanga_at(&frisco_request(), &now()).unwrap();
    assert_eq!(a, b);
    assert_eq!(engine_calls(&engine), 2);
}

fn engine_calls(engine: &Sankalpa<AnalyticEphemeris, FakeProvider>) -> usize {
    // The provider is consulted once per request.
    engine.provider().calls.get()
}

#[test]
fn frisco_december_sunrise() {
    let engine = Sankalpa::new(
        AnalyticEphemeris::default(),
        FakeProvider::ok(record("Śukla Pakṣa Tṛtīyā")),
        SankalpaConfig::default(),
    )
    .unwrap();
    let report = engine.panchanga_at(&frisco_request(), &now()).unwrap();

    assert_eq!(
        report.anchor.search_start,
        Utc.with_ymd_and_hms(2025, 12, 23, 5, 0, 0).unwrap()
    );
    assert_eq!(report.anchor.kind, AnchorKind::Sunrise);
    assert!(report.anchor.instant > Utc.with_ymd_and_hms(2025, 12, 23, 6, 0, 0).unwrap());
    assert!(report.anchor.instant < Utc.with_ymd_and_hms(2025, 12, 23, 14, 0, 0).unwrap());

    // A few days after the 20 December new moon, Sun in sidereal Dhanu.
    let e = &report.elements;
    assert_eq!(e.source, ElementSource::Local);
    assert_eq!(e.paksha, "Śukla Pakṣe");
    assert_eq!(e.masa, "Pauṣa");
    let idx = e.indices.unwrap();
    assert!((3..=5).contains(&idx.tithi), "tithi {}", idx.tithi);
    assert_eq!(e.ayana, "Dakṣiṇāyane");
    assert_eq!(report.location_label, "Frisco");
    assert_eq!(engine.provider().last_label.get(), Some("Frisco"));
}

#[test]
fn missing_label_uses_default() {
    let engine = Sankalpa::new(
        FixedEphemeris { sun: 0.0, moon: 30.0 },
        FakeProvider::ok(record("Dvitīyā")),
        SankalpaConfig::default(),
    )
    .unwrap();
    let request = PanchangaRequest::new(33.15, -96.82, -6.0)
        .unwrap()
        .with_date(CivilDate::new(2025, 12, 23).unwrap());
    let report = engine.panchanga_at(&request, &now()).unwrap();
    assert_eq!(report.location_label, "Unknown");
    assert_eq!(engine.provider().last_label.get(), Some("Unknown"));
}

#[test]
fn missing_date_resolves_to_local_today() {
    let engine = Sankalpa::new(
        FixedEphemeris { sun: 0.0, moon: 30.0 },
        FakeProvider::ok(record("Dvitīyā")),
        SankalpaConfig::default(),
    )
    .unwrap();
    let request = PanchangaRequest::new(33.15, -96.82, -6.0).unwrap();
    // 03:00Z on the 24th is still the 23rd at UTC-6.
    let late = Utc.with_ymd_and_hms(2025, 12, 24, 3, 0, 0).unwrap();
    let report = engine.panchanga_at(&request, &late).unwrap();
    assert_eq!(report.date, CivilDate::new(2025, 12, 23).unwrap());
}

#[test]
fn provider_failure_propagates() {
    let engine = Sankalpa::new(
        AnalyticEphemeris::default(),
        FakeProvider::failing(ProviderError::Status(503)),
        SankalpaConfig::default(),
    )
    .unwrap();
    let err = engine.panchanga_at(&frisco_request(), &now()).unwrap_err();
    assert_eq!(err, SankalpaError::Provider(ProviderError::Status(503)));
}

#[test]
fn local_elements_skip_provider() {
    let engine = Sankalpa::new(
        FixedEphemeris { sun: 280.0, moon: 101.0 },
        FakeProvider::failing(ProviderError::Transport("down".into())),
        SankalpaConfig::default(),
    )
    .unwrap();
    let report = engine.local_elements_at(&frisco_request(), &now());
    assert!(matches!(report.local, LocalComputation::Success(_)));
    assert_eq!(engine.provider().calls.get(), 0);
}

#[test]
fn invalid_config_rejected() {
    let config = SankalpaConfig {
        provider_url: " ".into(),
        ..SankalpaConfig::default()
    };
    let err = Sankalpa::new(
        AnalyticEphemeris::default(),
        FakeProvider::ok(record("Dvitīyā")),
        config,
    )
    .unwrap_err();
    assert!(matches!(err, SankalpaError::InvalidConfig(_)));
}
