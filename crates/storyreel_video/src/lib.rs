//! Video generation for storyreel.
//!
//! [`VideoRetrier`] wraps a video capability with prompt optimization,
//! bounded exponential backoff, a placeholder fallback and a scene cache.
//! It never fails because of the capability: exhausted retries and
//! permanent errors both yield a placeholder clip.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod config;
mod placeholder;
mod prompt;
mod retrier;
mod url;

pub use classify::is_non_retryable;
pub use config::{VideoConfig, VideoConfigBuilder};
pub use placeholder::{PLACEHOLDER_ERROR, PLACEHOLDER_VIDEO_URL, placeholder_result};
pub use prompt::optimize_prompt;
pub use retrier::{VideoRetrier, request_for_attempt};
pub use url::extract_video_url;
