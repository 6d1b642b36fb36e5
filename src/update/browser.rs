//! Opening the downloads page in the default browser

use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;
use tracing::{debug, info};

use crate::update::error::BrowserLaunchError;

/// Trait for opening a URL in the platform's default browser
#[cfg_attr(test, automock)]
pub trait BrowserLauncher: Send + Sync {
    fn open(&self, url: &str) -> Result<(), BrowserLaunchError>;
}

/// Launches the platform opener (`xdg-open`, `open` or `cmd /C start`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Result<Command, BrowserLaunchError> {
        if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", url]);
            Ok(command)
        } else if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(url);
            Ok(command)
        } else if cfg!(unix) {
            if !has_desktop_session(
                std::env::var_os("DISPLAY").is_some(),
                std::env::var_os("WAYLAND_DISPLAY").is_some(),
            ) {
                return Err(BrowserLaunchError::NoDesktop);
            }
            let mut command = Command::new("xdg-open");
            command.arg(url);
            Ok(command)
        } else {
            Err(BrowserLaunchError::Unsupported)
        }
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserLaunchError> {
        let mut command = Self::command(url)?;
        debug!("Launching browser: {:?}", command);

        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(BrowserLaunchError::ExitStatus(status));
        }

        info!("Opened {} in browser", url);
        Ok(())
    }
}

fn has_desktop_session(x11: bool, wayland: bool) -> bool {
    x11 || wayland
}
