pub mod config;
pub mod preferences;
pub mod update;
pub mod version;
