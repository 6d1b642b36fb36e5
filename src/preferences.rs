//! JSON-backed preference store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::UpdateConfig;
use crate::update::error::PreferencesError;
use crate::update::settings::AutoUpdateCheckSettings;

/// Application preferences relevant to update checking
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub auto_update_check: AutoUpdateCheckSettings,
    pub update: UpdateConfig,
}

pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, falling back to defaults if the file does not exist
    pub fn load(&self) -> Result<Preferences, PreferencesError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No preferences at {:?}, using defaults", self.path);
                return Ok(Preferences::default());
            }
            Err(e) => return Err(e.into()),
        };

        let preferences = serde_json::from_str(&contents)?;
        debug!("Loaded preferences from {:?}", self.path);
        Ok(preferences)
    }

    /// Write preferences, creating the parent directory if needed
    pub fn save(&self, preferences: &Preferences) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(preferences)?;
        fs::write(&self.path, json)?;
        debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}
