//! Update check orchestration: fetch, compare, report

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::config::{APP_NAME, UpdateConfig};
use crate::update::browser::BrowserLauncher;
use crate::update::dispatch::UiHandle;
use crate::update::error::FetchError;
use crate::update::prompt::{
    Prompter, check_failed_message, latest_version_message, newer_version_message,
    no_launch_browser_message,
};
use crate::update::settings::AutoUpdateCheckSettings;
use crate::update::source::VersionSource;
use crate::version::Version;

/// How a check was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// User-initiated; never throttled, every outcome is shown
    Manual,
    /// Time-triggered; throttled, only an available update is shown
    Automatic,
}

/// Result of a single update check
#[derive(Debug)]
pub enum CheckOutcome {
    UpToDate { current: Version },
    UpdateAvailable { current: Version, latest: Version },
    FetchFailed(FetchError),
}

impl CheckOutcome {
    /// Compare the running version against the published one
    pub fn evaluate(current: &Version, latest: &Version) -> Self {
        match current.compare(latest) {
            Ordering::Less => Self::UpdateAvailable {
                current: current.clone(),
                latest: latest.clone(),
            },
            Ordering::Equal | Ordering::Greater => Self::UpToDate {
                current: current.clone(),
            },
        }
    }

    pub fn is_update_available(&self) -> bool {
        matches!(self, Self::UpdateAvailable { .. })
    }
}

/// Checks for a newer release and reports the outcome to the user.
///
/// Cheap to clone; clones share the same collaborators.
#[derive(Clone)]
pub struct UpdateChecker {
    current: Version,
    app_name: String,
    downloads_url: String,
    source: Arc<dyn VersionSource>,
    browser: Arc<dyn BrowserLauncher>,
}

impl UpdateChecker {
    pub fn new(
        current: Version,
        downloads_url: &str,
        source: Arc<dyn VersionSource>,
        browser: Arc<dyn BrowserLauncher>,
    ) -> Self {
        Self {
            current,
            app_name: APP_NAME.to_string(),
            downloads_url: downloads_url.to_string(),
            source,
            browser,
        }
    }

    pub fn from_config(
        current: Version,
        config: &UpdateConfig,
        source: Arc<dyn VersionSource>,
        browser: Arc<dyn BrowserLauncher>,
    ) -> Self {
        Self::new(current, &config.downloads_url, source, browser)
    }

    /// Fetch the latest version and compare it against the running one
    pub async fn check(&self) -> CheckOutcome {
        match self.source.fetch_latest_version().await {
            Ok(latest) => {
                let outcome = CheckOutcome::evaluate(&self.current, &latest);
                info!(
                    "Update check: current {}, latest {}, update available: {}",
                    self.current,
                    latest,
                    outcome.is_update_available()
                );
                outcome
            }
            Err(e) => CheckOutcome::FetchFailed(e),
        }
    }

    /// User-initiated check. Runs to completion, including the dialog flow,
    /// on the calling thread. Settings are neither consulted nor updated.
    pub async fn manual_check(&self, prompter: &dyn Prompter) -> CheckOutcome {
        let outcome = self.check().await;
        self.report(&outcome, CheckMode::Manual, prompter);
        outcome
    }

    /// Time-triggered check.
    ///
    /// Returns `None` without touching the network when the check is not due.
    /// Otherwise records `today` as the last check before fetching, then posts
    /// the report step to the UI thread through `ui`. Fetch failures are
    /// logged and never reach the user.
    pub async fn auto_check(
        &self,
        settings: &mut AutoUpdateCheckSettings,
        today: NaiveDate,
        ui: &UiHandle,
    ) -> Option<CheckOutcome> {
        if !settings.is_auto_check_due(today) {
            return None;
        }

        settings.record_check_performed(today);

        let outcome = self.check().await;
        match &outcome {
            CheckOutcome::FetchFailed(e) => {
                warn!("Automatic update check failed: {}", e);
            }
            CheckOutcome::UpToDate { .. } => {}
            CheckOutcome::UpdateAvailable { current, latest } => {
                let checker = self.clone();
                let current = current.clone();
                let latest = latest.clone();
                ui.post(move |prompter| {
                    checker.compare_and_report(&current, &latest, CheckMode::Automatic, prompter);
                });
            }
        }

        Some(outcome)
    }

    /// Compare two versions and surface the result according to `mode`
    pub fn compare_and_report(
        &self,
        current: &Version,
        latest: &Version,
        mode: CheckMode,
        prompter: &dyn Prompter,
    ) -> CheckOutcome {
        let outcome = CheckOutcome::evaluate(current, latest);
        self.report(&outcome, mode, prompter);
        outcome
    }

    /// Present `outcome` to the user.
    ///
    /// Automatic checks stay silent unless an update is available.
    pub fn report(&self, outcome: &CheckOutcome, mode: CheckMode, prompter: &dyn Prompter) {
        match (outcome, mode) {
            (CheckOutcome::UpToDate { current }, CheckMode::Manual) => {
                prompter.show_info(&self.app_name, &latest_version_message(current));
            }
            (CheckOutcome::UpToDate { .. }, CheckMode::Automatic) => {}
            (CheckOutcome::UpdateAvailable { latest, .. }, _) => {
                if prompter.confirm(&self.app_name, &newer_version_message(latest)) {
                    self.open_download_page(prompter);
                } else {
                    info!("User declined to download version {}", latest);
                }
            }
            (CheckOutcome::FetchFailed(e), CheckMode::Manual) => {
                prompter.show_error(&self.app_name, &check_failed_message(e));
            }
            (CheckOutcome::FetchFailed(e), CheckMode::Automatic) => {
                warn!("Suppressing automatic update check failure: {}", e);
            }
        }
    }

    /// Open the downloads page, telling the user the URL if that fails
    pub fn open_download_page(&self, prompter: &dyn Prompter) {
        if let Err(e) = self.browser.open(&self.downloads_url) {
            error!("Failed to open {}: {}", self.downloads_url, e);
            prompter.show_info(&self.app_name, &no_launch_browser_message(&self.downloads_url));
        }
    }
}
