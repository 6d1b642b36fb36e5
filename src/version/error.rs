use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Version string is empty")]
    Empty,

    #[error("Invalid version component '{component}' in '{version}'")]
    InvalidComponent { component: String, version: String },

    #[error("Version component out of range: {component}")]
    OutOfRange { component: String },
}
