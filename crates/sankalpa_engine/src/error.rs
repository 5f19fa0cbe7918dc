//! Error types for the panchanga engine.

use sankalpa_ephem::EphemerisError;
use sankalpa_time::TimeError;
use thiserror::Error;

/// Failures of the external calendar provider.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("provider transport error: {0}")]
    Transport(String),
    /// Non-success HTTP status.
    #[error("provider returned HTTP {0}")]
    Status(u16),
    /// The provider answered with an explicit error message.
    #[error("provider error: {0}")]
    Remote(String),
    /// Response body missing an expected field or not valid JSON.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Errors surfaced to callers of [`crate::Sankalpa`].
///
/// Ephemeris failures never appear here during a panchanga request; they
/// resolve through the noon-anchor and provider fallbacks instead.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SankalpaError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("invalid request: {0}")]
    Time(#[from] TimeError),
    #[error("invalid request: {0}")]
    Location(#[from] EphemerisError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
