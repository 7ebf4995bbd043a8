//! Scene-keyed caching of video results.
//!
//! A video clip is expensive to produce, so the retrier remembers every
//! result by scene id for the lifetime of the process.

#![warn(missing_docs)]

mod cache;

pub use cache::{CacheStats, SceneCache, SceneCacheConfig, SceneCacheConfigBuilder};
