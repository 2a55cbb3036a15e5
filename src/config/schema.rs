//! Configuration schema for oc-release
//!
//! Configuration is stored at `~/.config/oc-release/config.toml`

use crate::release::{RetryPolicy, DEFAULT_RETRY_DELAY, DEFAULT_TOOL, DEFAULT_TRIES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Release tooling settings
    pub release: ReleaseConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

impl GeneralConfig {
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Release tool and extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Release tool binary (name on PATH or absolute path)
    pub oc_binary: String,

    /// Extraction attempts before giving up
    pub max_tries: u32,

    /// Delay between extraction attempts in seconds
    pub retry_delay_secs: u64,

    /// Root directory for extracted installer binaries
    pub cache_dir: PathBuf,

    /// Registry pull secret file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_secret_file: Option<PathBuf>,

    /// Where the short-lived registry config files are written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            oc_binary: DEFAULT_TOOL.to_string(),
            max_tries: DEFAULT_TRIES,
            retry_delay_secs: DEFAULT_RETRY_DELAY.as_secs(),
            cache_dir: default_cache_dir(),
            pull_secret_file: None,
            temp_dir: None,
        }
    }
}

impl ReleaseConfig {
    /// Extraction retry policy
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_tries, Duration::from_secs(self.retry_delay_secs))
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("oc-release")
}
