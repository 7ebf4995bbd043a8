//! Video retrier settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Configuration for the video retrier.
///
/// # Examples
///
/// ```
/// use storyreel_video::VideoConfig;
///
/// let config = VideoConfig::default().with_max_retries(0_usize);
/// assert_eq!(*config.max_retries(), 0);
/// assert_eq!(*config.default_duration(), 8);
/// assert_eq!(config.aspect_ratio(), "16:9");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_", into)]
#[builder(default)]
pub struct VideoConfig {
    /// Clip length when the scene does not ask for one (seconds)
    #[serde(default = "default_duration")]
    default_duration: u32,

    /// Retries after the first attempt
    #[serde(default = "default_max_retries")]
    max_retries: usize,

    /// Delay before the first retry, doubled for each later one (milliseconds)
    #[serde(default = "default_retry_delay_ms")]
    retry_delay_ms: u64,

    /// Temperature sent on the second attempt
    #[serde(default = "default_temperature")]
    temperature: f32,

    /// Requested aspect ratio
    #[serde(default = "default_aspect_ratio")]
    #[builder(setter(into))]
    aspect_ratio: String,
}

fn default_duration() -> u32 {
    8
}

fn default_max_retries() -> usize {
    2
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_aspect_ratio() -> String {
    "16:9".to_string()
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            default_duration: default_duration(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            temperature: default_temperature(),
            aspect_ratio: default_aspect_ratio(),
        }
    }
}
