//! Client configuration at ~/.config/doodle/config.toml

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PROVIDER_URL, FALLBACK_UTC_OFFSET_HOURS};
use crate::error::{DoodleError, DoodleResult};
use crate::timezone::PollTimeZone;

fn default_provider_url() -> String {
    DEFAULT_PROVIDER_URL.to_string()
}

fn default_fallback_offset() -> i32 {
    FALLBACK_UTC_OFFSET_HOURS
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DoodleConfig {
    /// Scheme and host of the Doodle instance.
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    /// Hours from UTC used when a poll's initiator has no time zone.
    #[serde(default = "default_fallback_offset")]
    pub fallback_utc_offset_hours: i32,

    /// Request timeout. Unset means the HTTP client's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for DoodleConfig {
    fn default() -> Self {
        DoodleConfig {
            provider_url: default_provider_url(),
            fallback_utc_offset_hours: default_fallback_offset(),
            timeout_secs: None,
        }
    }
}

impl DoodleConfig {
    pub fn config_path() -> DoodleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DoodleError::Config("Could not determine config directory".into()))?
            .join("doodle");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if there is no file.
    pub fn load() -> DoodleResult<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> DoodleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DoodleError::Config(format!("Could not read {}: {}", path.display(), e))
        })?;

        let config: DoodleConfig = toml::from_str(&content)
            .map_err(|e| DoodleError::Config(format!("{}: {}", path.display(), e)))?;

        config.fallback_time_zone()?;

        Ok(config)
    }

    pub fn fallback_time_zone(&self) -> DoodleResult<PollTimeZone> {
        PollTimeZone::fixed_hours(self.fallback_utc_offset_hours)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
