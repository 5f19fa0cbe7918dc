//! Panchanga derivation and sankalpam rendering.
//!
//! This crate provides:
//! - [`Sankalpa`], the request engine combining an [`Ephemeris`] with a
//!   [`CalendarProvider`]
//! - The pipeline stages it runs: [`locate_sunrise`], [`derive_elements`],
//!   [`reconcile`] and [`SankalpamText::render`]
//! - [`HttpCalendarProvider`], the HTTP provider client
//! - [`SankalpaConfig`], environment-driven configuration
//!
//! [`Ephemeris`]: sankalpa_ephem::Ephemeris

pub mod config;
pub mod derive;
pub mod elements;
pub mod engine;
pub mod error;
pub mod provider;
pub mod provider_parse;
pub mod reconcile;
pub mod request;
pub mod sankalpam;
pub mod sunrise;

pub use config::{DEFAULT_LOCATION_LABEL, DEFAULT_PROVIDER_URL, SankalpaConfig};
pub use derive::{LocalComputation, LocalElements, derive_elements};
pub use elements::{ElementIndices, ElementSet, ElementSource};
pub use engine::{LocalReport, PanchangaReport, Sankalpa};
pub use error::{ProviderError, SankalpaError};
pub use provider::{
    CalendarProvider, HttpCalendarProvider, ProviderQuery, ProviderRecord, query_params,
};
pub use provider_parse::{MatchTier, ParsedTithi, parse_provider_tithi};
pub use reconcile::reconcile;
pub use request::PanchangaRequest;
pub use sankalpam::SankalpamText;
pub use sunrise::{AnchorKind, SunriseAnchor, locate_sunrise, sunrise_search_start};
