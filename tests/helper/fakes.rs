//! Collaborator fakes for update-check tests

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use kse_update::update::browser::BrowserLauncher;
use kse_update::update::error::{BrowserLaunchError, FetchError};
use kse_update::update::prompt::Prompter;
use kse_update::update::source::VersionSource;
use kse_update::version::Version;

pub const DOWNLOADS_URL: &str = "https://downloads.example.org/kse/";

/// A prompt as seen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Info(String),
    Confirm(String),
    Error(String),
}

/// Records every prompt and answers confirmations with a fixed reply
pub struct RecordingPrompter {
    answer: bool,
    shown: RefCell<Vec<Shown>>,
}

impl RecordingPrompter {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            shown: RefCell::new(Vec::new()),
        }
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.shown.borrow().clone()
    }
}

impl Prompter for RecordingPrompter {
    fn show_info(&self, _title: &str, message: &str) {
        self.shown.borrow_mut().push(Shown::Info(message.to_string()));
    }

    fn confirm(&self, _title: &str, message: &str) -> bool {
        self.shown
            .borrow_mut()
            .push(Shown::Confirm(message.to_string()));
        self.answer
    }

    fn show_error(&self, _title: &str, message: &str) {
        self.shown
            .borrow_mut()
            .push(Shown::Error(message.to_string()));
    }
}

/// Browser launcher that records opened URLs and optionally fails
#[derive(Clone, Default)]
pub struct FakeBrowser {
    fail: bool,
    opened: Arc<Mutex<Vec<String>>>,
}

impl FakeBrowser {
    pub fn working() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl BrowserLauncher for FakeBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserLaunchError> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(BrowserLaunchError::NoDesktop)
        } else {
            Ok(())
        }
    }
}

/// Version source returning a fixed string, counting fetches
#[derive(Clone)]
pub struct StaticSource {
    body: &'static str,
    fetches: Arc<Mutex<usize>>,
}

impl StaticSource {
    pub fn new(body: &'static str) -> Self {
        Self {
            body,
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    pub fn fetches(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl VersionSource for StaticSource {
    async fn fetch_latest_version(&self) -> Result<Version, FetchError> {
        *self.fetches.lock().unwrap() += 1;
        Version::parse(self.body.trim()).map_err(FetchError::from)
    }
}

pub fn version(text: &str) -> Version {
    Version::parse(text).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn is_version_error(error: &FetchError) -> bool {
    matches!(error, FetchError::InvalidVersion(_))
}
