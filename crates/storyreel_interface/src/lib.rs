//! Capability traits for the storyreel library.
//!
//! The generative models are opaque request/response capabilities. The
//! pipeline only ever talks to them through these traits, so providers and
//! test doubles are interchangeable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ContentFilter, TextModel, VideoModel};
