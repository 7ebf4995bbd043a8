//! Story generation settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Configuration for the segment generator.
///
/// # Examples
///
/// ```
/// use storyreel_story::StoryConfig;
///
/// let config = StoryConfig::default().with_narration_length("50-80 words");
/// assert_eq!(config.narration_length(), "50-80 words");
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
pub struct StoryConfig {
    /// Target narration length written into the prompt
    #[serde(default = "default_narration_length")]
    #[builder(setter(into))]
    narration_length: String,
}

fn default_narration_length() -> String {
    "100-150 words".to_string()
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            narration_length: default_narration_length(),
        }
    }
}
