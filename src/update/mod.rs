//! Release update checking
//!
//! A check runs `Idle -> Fetching -> Compared | FetchFailed -> Reported`.
//! Nothing is retried; a failed check ends the cycle.
//!
//! ```text
//! ┌───────────────┐     ┌───────────────┐     ┌───────────────┐
//! │   Settings    │────▶│ UpdateChecker │────▶│  UiHandle     │
//! │ (is it due?)  │     │ (fetch, cmp)  │     │ (post report) │
//! └───────────────┘     └───────────────┘     └───────────────┘
//!                              │                      │
//!                              ▼                      ▼
//!                       ┌───────────────┐     ┌───────────────┐
//!                       │ VersionSource │     │   Prompter    │
//!                       │    (HTTP)     │     │ (UI thread)   │
//!                       └───────────────┘     └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`auto`]: automatic check run against the preference store
//! - [`checker`]: `UpdateChecker`, `CheckOutcome` and `CheckMode`
//! - [`settings`]: `AutoUpdateCheckSettings` and the throttling policy
//! - [`source`]: `VersionSource` trait and its HTTP implementation
//! - [`browser`]: `BrowserLauncher` trait and the platform opener
//! - [`prompt`]: `Prompter` trait and prompt texts
//! - [`dispatch`]: posting work to the UI-owning thread
//! - [`error`]: fetch, browser and preference errors

pub mod auto;
pub mod browser;
pub mod checker;
pub mod dispatch;
pub mod error;
pub mod prompt;
pub mod settings;
pub mod source;

pub use auto::run_auto_check;
pub use checker::{CheckMode, CheckOutcome, UpdateChecker};
pub use settings::AutoUpdateCheckSettings;
