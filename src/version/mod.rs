//! Release version model
//!
//! # Modules
//!
//! - [`number`]: `Version`, a dot-separated numeric tuple with zero-padded ordering
//! - [`error`]: `VersionError` for malformed version strings

pub mod error;
pub mod number;

pub use error::VersionError;
pub use number::Version;
