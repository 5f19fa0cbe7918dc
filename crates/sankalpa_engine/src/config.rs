//! Engine configuration: defaults, validation and environment overlay.

use std::time::Duration;

use sankalpa_ephem::RiseSetConfig;
use sankalpa_vedic::{AyanamsaModel, LinearAyanamsa};
use serde::{Deserialize, Serialize};

use crate::error::SankalpaError;

pub const DEFAULT_PROVIDER_URL: &str = "http://localhost:8080/api/panchanga";
pub const DEFAULT_LOCATION_LABEL: &str = "Unknown";

pub const ENV_PROVIDER_URL: &str = "PANCHANGAM_API_URL";
pub const ENV_PROVIDER_TIMEOUT: &str = "SANKALPA_PROVIDER_TIMEOUT_SECS";
pub const ENV_AYANAMSA: &str = "SANKALPA_AYANAMSA";
pub const ENV_AYANAMSA_BASE: &str = "SANKALPA_AYANAMSA_BASE_DEG";
pub const ENV_AYANAMSA_RATE: &str = "SANKALPA_AYANAMSA_RATE_DEG";

/// Runtime configuration for a [`crate::Sankalpa`] instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankalpaConfig {
    /// Base URL of the external calendar provider.
    pub provider_url: String,
    /// Upper bound on one provider round trip.
    pub provider_timeout: Duration,
    /// Tropical-to-sidereal corrector.
    pub ayanamsa: AyanamsaModel,
    /// How far before local midnight the sunrise search begins.
    pub sunrise_margin: Duration,
    /// Days past the search start the sunrise search may cover.
    pub sunrise_horizon_days: u32,
    /// Label sent to the provider when the request carries none.
    pub default_location_label: String,
}

impl Default for SankalpaConfig {
    fn default() -> Self {
        Self {
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            provider_timeout: Duration::from_secs(10),
            ayanamsa: AyanamsaModel::default(),
            sunrise_margin: Duration::from_secs(3600),
            sunrise_horizon_days: 2,
            default_location_label: DEFAULT_LOCATION_LABEL.to_string(),
        }
    }
}

impl SankalpaConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, SankalpaError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SankalpaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_PROVIDER_URL) {
            config.provider_url = url;
        }
        if let Some(secs) = lookup(ENV_PROVIDER_TIMEOUT) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| SankalpaError::InvalidConfig("provider timeout must be whole seconds"))?;
            config.provider_timeout = Duration::from_secs(secs);
        }
        if let Some(model) = lookup(ENV_AYANAMSA) {
            config.ayanamsa = model
                .parse()
                .map_err(|_| SankalpaError::InvalidConfig("ayanamsa model must be linear or lahiri"))?;
        }

        let base = lookup(ENV_AYANAMSA_BASE).map(|v| parse_deg(&v)).transpose()?;
        let rate = lookup(ENV_AYANAMSA_RATE).map(|v| parse_deg(&v)).transpose()?;
        if base.is_some() || rate.is_some() {
            let AyanamsaModel::Linear(current) = config.ayanamsa else {
                return Err(SankalpaError::InvalidConfig(
                    "ayanamsa base/rate apply only to the linear model",
                ));
            };
            config.ayanamsa = AyanamsaModel::Linear(LinearAyanamsa::new(
                base.unwrap_or(current.base_deg),
                rate.unwrap_or(current.rate_deg_per_century),
            ));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SankalpaError> {
        if self.provider_url.trim().is_empty() {
            return Err(SankalpaError::InvalidConfig("provider_url must not be empty"));
        }
        if self.provider_timeout.is_zero() {
            return Err(SankalpaError::InvalidConfig(
                "provider_timeout must be greater than zero",
            ));
        }
        if let AyanamsaModel::Linear(linear) = &self.ayanamsa {
            if !linear.is_finite() {
                return Err(SankalpaError::InvalidConfig(
                    "ayanamsa parameters must be finite",
                ));
            }
        }
        if self.sunrise_horizon_days == 0 {
            return Err(SankalpaError::InvalidConfig(
                "sunrise_horizon_days must be greater than zero",
            ));
        }
        if self.default_location_label.trim().is_empty() {
            return Err(SankalpaError::InvalidConfig(
                "default_location_label must not be empty",
            ));
        }
        Ok(())
    }

    /// Sunrise solver settings derived from this configuration.
    pub fn riseset(&self) -> RiseSetConfig {
        RiseSetConfig {
            search_horizon_days: self.sunrise_horizon_days,
            ..RiseSetConfig::default()
        }
    }
}

fn parse_deg(v: &str) -> Result<f64, SankalpaError> {
    v.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or(SankalpaError::InvalidConfig("ayanamsa degrees must be a finite number"))
}
