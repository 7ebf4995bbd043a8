//! Story context, choices and segments.

use crate::Character;
use serde::{Deserialize, Serialize};

/// Everything the segment generator needs to write one scene.
///
/// Theme order matters: the first three themes become the genres of the
/// first three default choices.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Character, StoryContext};
///
/// let context = StoryContext::new(
///     "Gas station",
///     Character::new("Morgan", "male", "night shift worker"),
///     vec!["Mystery".to_string()],
/// )
/// .with_variation_seed(42);
///
/// assert_eq!(context.variation_seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryContext {
    /// Where the story takes place
    pub setting: String,
    /// The protagonist
    pub character: Character,
    /// Ordered theme list
    #[serde(default)]
    pub themes: Vec<String>,
    /// Seed for the cosmetic variation draw
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_seed: Option<u64>,
}

impl StoryContext {
    /// Create a context without a variation seed.
    pub fn new(setting: impl Into<String>, character: Character, themes: Vec<String>) -> Self {
        Self {
            setting: setting.into(),
            character,
            themes,
            variation_seed: None,
        }
    }

    /// Pin the variation draw to a seed.
    pub fn with_variation_seed(mut self, seed: u64) -> Self {
        self.variation_seed = Some(seed);
        self
    }
}

/// One branching option offered to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Label shown to the viewer
    pub text: String,
    /// Genre tag, `random` when unknown
    pub genre: String,
}

impl Choice {
    /// Create a choice.
    pub fn new(text: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            genre: genre.into(),
        }
    }
}

/// A validated scene: prompt material for the video model plus four choices.
///
/// Always carries exactly four choices and a `video_prompt` that mentions the
/// setting. Both are enforced by the repair step in `storyreel_story`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorySegment {
    /// Identifier from the model or the hardcoded generator
    pub id: String,
    /// Visual description for the video model
    pub video_prompt: String,
    /// Spoken narration
    pub narration_text: String,
    /// Setting the model claims to depict
    pub explicit_setting: String,
    /// Themes echoed back by the model
    #[serde(default)]
    pub themes: Vec<String>,
    /// Exactly four choices
    pub choices: Vec<Choice>,
    /// Location enforcement sentence prepended to the video prompt
    pub video_instruction: String,
    /// Setting from the context
    pub setting: String,
    /// Character from the context
    pub character: Character,
}
