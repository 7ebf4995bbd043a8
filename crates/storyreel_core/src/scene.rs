//! Input to the video retrier.

use serde::{Deserialize, Serialize};

/// Prompt material for one video clip.
///
/// # Examples
///
/// ```
/// use storyreel_core::SceneDescription;
///
/// let scene = SceneDescription::new("Gas station at night")
///     .with_id("episode-1-segment-0")
///     .with_duration(8);
///
/// assert_eq!(scene.id.as_deref(), Some("episode-1-segment-0"));
/// assert!(scene.narration_text.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescription {
    /// Visual description, required
    pub video_prompt: String,
    /// Narration appended to the prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration_text: Option<String>,
    /// Location enforcement sentence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_instruction: Option<String>,
    /// Cache key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Clip length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl SceneDescription {
    /// Start a scene from its video prompt.
    pub fn new(video_prompt: impl Into<String>) -> Self {
        Self {
            video_prompt: video_prompt.into(),
            ..Default::default()
        }
    }

    /// Set the narration.
    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration_text = Some(narration.into());
        self
    }

    /// Set the location enforcement sentence.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.video_instruction = Some(instruction.into());
        self
    }

    /// Set the cache key.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the clip length.
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }
}
