//! Error types for the Video Narrative Genie wizard.
//!
//! # Error Hierarchy
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines the specific condition
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` so the location is captured automatically
//!
//! The three user-facing families are [`ValidationError`] (a local guard
//! failed, nothing was sent anywhere), [`RemoteError`] (a collaborator service
//! call failed) and [`PlaybackError`] (local media playback failed). None of
//! them is fatal: the wizard stays on the same step and the project keeps its
//! pre-call value.
//!
//! # Examples
//!
//! ```
//! use genie_error::{GenieResult, ValidationError, ValidationErrorKind};
//!
//! fn check(text: &str) -> GenieResult<()> {
//!     if text.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::TextRequired))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("   ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod io;
mod json;
mod playback;
mod remote;
#[cfg(feature = "tui")]
mod tui;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{GenieError, GenieErrorKind, GenieResult};
pub use io::IoError;
pub use json::JsonError;
pub use playback::{PlaybackError, PlaybackErrorKind};
pub use remote::{RemoteError, RemoteErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use validation::{ValidationError, ValidationErrorKind};
