use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Name shown as the title of every prompt
pub const APP_NAME: &str = "KeyStore Explorer";

/// Plain-text resource holding the latest released version
pub const LATEST_VERSION_URL: &str = "https://keystore-explorer.org/version.txt";

/// Page opened when the user agrees to download a newer release
pub const DOWNLOADS_URL: &str = "https://keystore-explorer.org/downloads.html";

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for fetching the latest version in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Default number of days between automatic update checks
pub const DEFAULT_CHECK_INTERVAL_DAYS: u32 = 14;

/// Endpoints and network settings used by the update checker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateConfig {
    pub latest_version_url: String,
    pub downloads_url: String,
    /// Fetch timeout in milliseconds
    pub fetch_timeout: u64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            latest_version_url: LATEST_VERSION_URL.to_string(),
            downloads_url: DOWNLOADS_URL.to_string(),
            fetch_timeout: FETCH_TIMEOUT_MS,
        }
    }
}

impl UpdateConfig {
    /// Fetch timeout, using the default when the configured value is 0
    pub fn fetch_timeout(&self) -> Duration {
        match self.fetch_timeout {
            0 => Duration::from_millis(FETCH_TIMEOUT_MS),
            ms => Duration::from_millis(ms),
        }
    }
}

/// Returns the path to the data directory for kse-update.
/// Uses $XDG_DATA_HOME/kse-update if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/kse-update,
/// or ./kse-update if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the preferences file.
pub fn preferences_path() -> PathBuf {
    data_dir().join("preferences.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("kse-update.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("kse-update")
}
