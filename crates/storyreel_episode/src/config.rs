//! Episode orchestration settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyreel_error::{ConfigError, StoryreelResult};

/// Configuration for the episode orchestrator.
///
/// # Examples
///
/// ```
/// use storyreel_episode::OrchestratorConfig;
///
/// let config = OrchestratorConfig::default();
/// assert_eq!(*config.max_segments(), 7);
/// assert_eq!(*config.min_segments(), 3);
/// assert!(config.validate().is_ok());
///
/// let inverted = config.with_min_segments(9_usize);
/// assert!(inverted.validate().is_err());
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
pub struct OrchestratorConfig {
    /// Upper bound on segments per episode
    #[serde(default = "default_max_segments")]
    max_segments: usize,

    /// Segments produced before the coordinator may end the episode
    #[serde(default = "default_min_segments")]
    min_segments: usize,

    /// Let the coordinator rewrite video prompts
    #[serde(default = "default_true")]
    enhance_prompts: bool,

    /// Let the coordinator repair narration continuity
    #[serde(default = "default_true")]
    track_coherence: bool,

    /// Sampling temperature for the coordinator model
    #[serde(default = "default_temperature")]
    temperature: f32,
}

fn default_max_segments() -> usize {
    7
}

fn default_min_segments() -> usize {
    3
}

fn default_true() -> bool {
    true
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_segments: default_max_segments(),
            min_segments: default_min_segments(),
            enhance_prompts: true,
            track_coherence: true,
            temperature: default_temperature(),
        }
    }
}

impl OrchestratorConfig {
    /// Check the segment bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when `max_segments` is zero or `min_segments` exceeds it.
    pub fn validate(&self) -> StoryreelResult<()> {
        if self.max_segments == 0 {
            return Err(ConfigError::new("max_segments must be at least 1").into());
        }
        if self.min_segments > self.max_segments {
            return Err(ConfigError::new(format!(
                "min_segments ({}) exceeds max_segments ({})",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }
}
