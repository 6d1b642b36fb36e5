//! Automatic update-check scheduling policy

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DEFAULT_CHECK_INTERVAL_DAYS;

/// Persisted settings for the time-triggered update check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoUpdateCheckSettings {
    pub enabled: bool,
    pub last_check: NaiveDate,
    /// Minimum number of days between two automatic checks
    pub check_interval: u32,
}

impl Default for AutoUpdateCheckSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            last_check: Local::now().date_naive(),
            check_interval: DEFAULT_CHECK_INTERVAL_DAYS,
        }
    }
}

impl AutoUpdateCheckSettings {
    /// Whether an automatic check should run on `today`.
    ///
    /// Due once at least `check_interval` whole days have passed since the
    /// last check. A `last_check` in the future is never due.
    pub fn is_auto_check_due(&self, today: NaiveDate) -> bool {
        if !self.enabled {
            debug!("Automatic update check disabled");
            return false;
        }

        let elapsed = today.signed_duration_since(self.last_check).num_days();
        let due = elapsed >= i64::from(self.check_interval);
        debug!(
            "Last update check {} ({} days ago), interval {} days, due: {}",
            self.last_check, elapsed, self.check_interval, due
        );
        due
    }

    /// Record that an automatic check ran on `today`.
    pub fn record_check_performed(&mut self, today: NaiveDate) {
        self.last_check = today;
    }
}
