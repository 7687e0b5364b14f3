//! Configuration management for the upcheck application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and cover the two tunable parts of the update pipeline:
//!
//! - **Fetch settings**: request timeout and user agent for the HTTP
//!   fetcher. The legacy behavior of the original updater was to block
//!   until the connection library gave up on its own; setting `timeout_secs`
//!   to `null` restores that, while the default caps a fetch at 30 seconds.
//! - **Probe settings**: the address the connectivity probe attempts to
//!   reach and how long it waits before declaring the host offline.
//!
//! A missing configuration file is not an error; `Config::read()` falls
//! back to defaults so the tool works with zero setup.

use crate::libs::storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default fetch timeout in seconds when the config does not override it.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default target for the TCP connectivity probe.
pub const DEFAULT_PROBE_ADDR: &str = "1.1.1.1:443";

/// Default connectivity probe timeout in milliseconds.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 1500;

/// HTTP fetcher settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FetchConfig {
    /// Total request timeout in seconds. `None` means no timeout at all,
    /// matching the legacy "block until the library gives up" behavior.
    pub timeout_secs: Option<u64>,

    /// User agent sent with every request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: Some(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

/// Connectivity probe settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProbeConfig {
    /// `host:port` the probe attempts a TCP connect against.
    pub addr: String,

    /// How long the probe waits for the connect before reporting offline.
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_PROBE_ADDR.to_string(),
            timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
        }
    }
}

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// HTTP fetcher settings. Omitted sections fall back to defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch: Option<FetchConfig>,

    /// Connectivity probe settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<ProbeConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Fetch settings with defaults applied.
    pub fn fetch(&self) -> FetchConfig {
        self.fetch.clone().unwrap_or_default()
    }

    /// Probe settings with defaults applied.
    pub fn probe(&self) -> ProbeConfig {
        self.probe.clone().unwrap_or_default()
    }
}
