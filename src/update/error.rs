use std::process::ExitStatus;

use thiserror::Error;

use crate::version::VersionError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Response body is not US-ASCII text")]
    NotAscii,

    #[error("Invalid version in response: {0}")]
    InvalidVersion(#[from] VersionError),
}

#[derive(Debug, Error)]
pub enum BrowserLaunchError {
    #[error("No desktop session available to open a browser")]
    NoDesktop,

    #[error("Failed to start browser: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Browser launcher exited with {0}")]
    ExitStatus(ExitStatus),

    #[error("Opening a browser is not supported on this platform")]
    Unsupported,
}

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Preferences I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed preferences: {0}")]
    Json(#[from] serde_json::Error),
}
