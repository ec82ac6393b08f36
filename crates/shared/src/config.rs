//! Application configuration management.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::AppResult;

/// Environment variable prefix, e.g. `MINTMARK__ISO__TIMEOUT_SECS=10`.
pub const ENV_PREFIX: &str = "MINTMARK";

/// Official SIX Group publication of ISO 4217 list one.
pub const DEFAULT_ISO_URL: &str = "https://www.six-group.com/dam/download/financial-information/data-center/iso-currrency/amendments/lists/list_one.xml";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// ISO 4217 list source configuration.
    #[serde(default)]
    pub iso: IsoSourceConfig,
    /// Startup refresh behaviour.
    #[serde(default)]
    pub refresh: RefreshConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Where the ISO 4217 list is fetched from.
#[derive(Debug, Clone, Deserialize)]
pub struct IsoSourceConfig {
    /// Remote URL of the list.
    #[serde(default = "default_iso_url")]
    pub url: String,
    /// Where a successful download is written.
    #[serde(default = "default_download_path")]
    pub download_path: PathBuf,
    /// Local copy used when the download fails.
    #[serde(default = "default_local_path")]
    pub local_path: PathBuf,
    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_iso_url() -> String {
    DEFAULT_ISO_URL.to_string()
}

fn default_download_path() -> PathBuf {
    std::env::temp_dir().join("list_one.xml")
}

fn default_local_path() -> PathBuf {
    PathBuf::from("data/list_one.xml")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for IsoSourceConfig {
    fn default() -> Self {
        Self {
            url: default_iso_url(),
            download_path: default_download_path(),
            local_path: default_local_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl IsoSourceConfig {
    /// HTTP timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Startup refresh configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    /// Refresh the registry from the ISO list at startup.
    #[serde(default = "default_refresh_enabled")]
    pub enabled: bool,
}

fn default_refresh_enabled() -> bool {
    true
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            enabled: default_refresh_enabled(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "mintmark=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources in increasing priority: `config/default`, `config/{RUN_MODE}`,
    /// then `MINTMARK__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
