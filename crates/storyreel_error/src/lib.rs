//! Error types for the storyreel library.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or a message) with source location tracking
//! - constructors use `#[track_caller]` for automatic location capture
//!
//! All of them convert into [`StoryreelError`] so callers can use `?` freely.
//!
//! # Examples
//!
//! ```
//! use storyreel_error::{StoryreelResult, ValidationError};
//!
//! fn require_setting(setting: &str) -> StoryreelResult<()> {
//!     if setting.trim().is_empty() {
//!         Err(ValidationError::new("setting"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_setting("").is_err());
//! assert!(require_setting("Gas station").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capability;
mod config;
mod content;
mod error;
mod parse;
mod validation;

pub use capability::{CapabilityError, CapabilityErrorKind};
pub use config::ConfigError;
pub use content::ContentPolicyError;
pub use error::{StoryreelError, StoryreelErrorKind, StoryreelResult};
pub use parse::{ParseError, ParseErrorKind};
pub use validation::ValidationError;
