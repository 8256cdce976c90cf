//! Runtime configuration for the funnel binary.
//!
//! Settings come from a `funnel.toml` next to the binary (or wherever
//! `--config` points). A missing file is not an error: every field has a
//! default, and without endpoints the app falls back to the dry-run
//! gateway.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Booking page shown on the confirmation screen when none is configured.
const DEFAULT_CALENDAR_URL: &str = "https://calendly.com/boteasyai/30min";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FunnelConfig {
    /// Endpoint receiving lead submissions.
    pub leads_endpoint: Option<String>,
    /// Endpoint receiving consultation bookings.
    pub booking_endpoint: Option<String>,
    /// Bearer token for both endpoints. Overridable via `FUNNEL_API_KEY`.
    pub api_key: Option<String>,
    /// External scheduling page offered after booking.
    pub calendar_url: String,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            leads_endpoint: None,
            booking_endpoint: None,
            api_key: None,
            calendar_url: DEFAULT_CALENDAR_URL.to_string(),
        }
    }
}

impl FunnelConfig {
    /// Both outbound endpoints are set.
    pub fn is_configured(&self) -> bool {
        self.leads_endpoint.is_some() && self.booking_endpoint.is_some()
    }
}

/// Loads configuration, treating a missing file as all-defaults.
pub fn load(path: &Path) -> Result<FunnelConfig, ConfigError> {
    if !path.exists() {
        info!(path = %path.display(), "no config file; using defaults");
        return Ok(FunnelConfig::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
