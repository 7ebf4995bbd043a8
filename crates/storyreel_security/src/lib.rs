//! Content screening for user-supplied story inputs.
//!
//! The story generator refuses settings, names and descriptions that this
//! filter rejects. It blocks a fixed list of explicit keywords and text that
//! is mostly symbols.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod content;

pub use content::{KeywordContentFilter, KeywordFilterConfig};
