//! User-facing prompts raised by an update check

#[cfg(test)]
use mockall::automock;

use crate::version::Version;

/// Presents messages to the user.
///
/// Implementations are owned by the UI thread and are not required to be
/// `Send`; background work reaches them through [`crate::update::dispatch::UiHandle`].
#[cfg_attr(test, automock)]
pub trait Prompter {
    /// Informational message with a single acknowledgement
    fn show_info(&self, title: &str, message: &str);

    /// Yes/no question; returns `true` for yes
    fn confirm(&self, title: &str, message: &str) -> bool;

    /// Error message
    fn show_error(&self, title: &str, message: &str);
}

pub fn latest_version_message(current: &Version) -> String {
    format!("You have the latest version ({}).", current)
}

pub fn newer_version_message(latest: &Version) -> String {
    format!(
        "A newer version ({}) is available. Would you like to download it now?",
        latest
    )
}

pub fn no_launch_browser_message(url: &str) -> String {
    format!(
        "Could not launch a web browser. Please visit {} to download the latest version.",
        url
    )
}

pub fn check_failed_message(error: &dyn std::error::Error) -> String {
    format!("Could not check for updates: {}", error)
}
