//! Error types for the ephemeris capability.

use sankalpa_time::TimeError;
use thiserror::Error;

/// Errors raised while querying positions or searching for sunrise.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Instant or Julian Date conversion failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Iterative algorithm produced a non-finite value.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// The backing ephemeris could not answer the query.
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
}
