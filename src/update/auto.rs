//! Automatic check lifecycle: load settings, check if due, persist

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::preferences::PreferenceStore;
use crate::update::checker::{CheckOutcome, UpdateChecker};
use crate::update::dispatch::UiHandle;
use crate::update::error::PreferencesError;

/// Run one automatic check against the settings held by `store`.
///
/// Without a preferences file the defaults are written with `today` as the
/// last check, so the first check happens one interval later. When a check
/// runs, the new last-check date is written back. The report step, if any,
/// is posted to `ui`.
pub async fn run_auto_check(
    store: &PreferenceStore,
    checker: &UpdateChecker,
    today: NaiveDate,
    ui: &UiHandle,
) -> Result<Option<CheckOutcome>, PreferencesError> {
    let first_run = !store.path().exists();
    let mut preferences = store.load()?;
    if first_run {
        preferences.auto_update_check.last_check = today;
    }

    let outcome = checker
        .auto_check(&mut preferences.auto_update_check, today, ui)
        .await;

    if first_run || outcome.is_some() {
        store.save(&preferences)?;
        info!(
            "Recorded last update check {}",
            preferences.auto_update_check.last_check
        );
    } else {
        debug!("Automatic update check not due, preferences unchanged");
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CHECK_INTERVAL_DAYS;
    use crate::preferences::Preferences;
    use crate::update::browser::MockBrowserLauncher;
    use crate::update::dispatch;
    use crate::update::source::MockVersionSource;
    use crate::version::Version;
    use chrono::Days;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn checker(fetches: usize) -> UpdateChecker {
        let mut source = MockVersionSource::new();
        source
            .expect_fetch_latest_version()
            .times(fetches)
            .returning(|| Ok(Version::parse("5.8.0").unwrap()));
        UpdateChecker::new(
            Version::parse("5.8.0").unwrap(),
            "https://example.org/downloads.html",
            Arc::new(source),
            Arc::new(MockBrowserLauncher::new()),
        )
    }

    fn store_with(temp_dir: &TempDir, last_check: NaiveDate, interval: u32) -> PreferenceStore {
        let store = PreferenceStore::new(&temp_dir.path().join("preferences.json"));
        let mut preferences = Preferences::default();
        preferences.auto_update_check.last_check = last_check;
        preferences.auto_update_check.check_interval = interval;
        store.save(&preferences).unwrap();
        store
    }

    #[tokio::test]
    async fn run_auto_check_persists_last_check_after_check_runs() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with(&temp_dir, date(2025, 1, 1), 7);
        let (ui, _ui_loop) = dispatch::channel();

        let outcome = run_auto_check(&store, &checker(1), date(2025, 1, 8), &ui)
            .await
            .unwrap();

        assert!(matches!(outcome, Some(CheckOutcome::UpToDate { .. })));
        let saved = store.load().unwrap();
        assert_eq!(saved.auto_update_check.last_check, date(2025, 1, 8));
        assert_eq!(saved.auto_update_check.check_interval, 7);
    }

    #[tokio::test]
    async fn run_auto_check_leaves_file_untouched_when_not_due() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with(&temp_dir, date(2025, 1, 1), 7);
        let before = fs::read_to_string(store.path()).unwrap();
        let (ui, _ui_loop) = dispatch::channel();

        let outcome = run_auto_check(&store, &checker(0), date(2025, 1, 3), &ui)
            .await
            .unwrap();

        assert!(outcome.is_none());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn run_auto_check_without_preferences_checks_one_interval_later() {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(&temp_dir.path().join("preferences.json"));
        let checker = checker(1);
        let (ui, _ui_loop) = dispatch::channel();
        let first_day = date(2025, 4, 1);

        let outcome = run_auto_check(&store, &checker, first_day, &ui).await.unwrap();
        assert!(outcome.is_none());
        assert!(store.path().exists());
        assert_eq!(
            store.load().unwrap().auto_update_check.last_check,
            first_day
        );

        let almost_due = first_day
            .checked_add_days(Days::new(u64::from(DEFAULT_CHECK_INTERVAL_DAYS) - 1))
            .unwrap();
        let outcome = run_auto_check(&store, &checker, almost_due, &ui).await.unwrap();
        assert!(outcome.is_none());

        let due = first_day
            .checked_add_days(Days::new(u64::from(DEFAULT_CHECK_INTERVAL_DAYS)))
            .unwrap();
        let outcome = run_auto_check(&store, &checker, due, &ui).await.unwrap();
        assert!(outcome.is_some());
        assert_eq!(store.load().unwrap().auto_update_check.last_check, due);
    }

    #[tokio::test]
    async fn run_auto_check_reports_malformed_preferences() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();
        let (ui, _ui_loop) = dispatch::channel();

        let result = run_auto_check(&PreferenceStore::new(&path), &checker(0), date(2025, 1, 1), &ui).await;

        assert!(matches!(result, Err(PreferencesError::Json(_))));
    }
}
