//! Story segment generator.

use crate::{
    StoryConfig, Variation, continuation_prompt, extract_json, hardcoded_segment, opening_prompt,
    parse_json, repair_segment,
};
use serde_json::Value;
use storyreel_core::{Choice, StoryContext, StorySegment};
use storyreel_error::{ContentPolicyError, StoryreelResult, ValidationError};
use storyreel_interface::{ContentFilter, TextModel};
use tracing::{debug, info};

/// Produces validated story segments.
///
/// Built with a text model it asks the model for each segment. Built with
/// [`SegmentGenerator::hardcoded`] it returns canned segments, which keeps
/// offline runs and tests free of network calls.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Character, StoryContext};
/// use storyreel_story::SegmentGenerator;
///
/// # #[tokio::main]
/// # async fn main() {
/// let generator = SegmentGenerator::hardcoded();
/// let context = StoryContext::new(
///     "Gas station",
///     Character::new("Morgan", "male", "night shift worker"),
///     vec!["Mystery".to_string()],
/// );
///
/// let opening = generator.generate(&context, None).await.unwrap();
/// assert_eq!(opening.choices.len(), 4);
///
/// let next = generator.generate(&context, opening.choices.first()).await.unwrap();
/// assert!(next.narration_text.starts_with("After choosing to"));
/// # }
/// ```
pub struct SegmentGenerator {
    text_model: Option<Box<dyn TextModel>>,
    content_filter: Option<Box<dyn ContentFilter>>,
    config: StoryConfig,
}

impl SegmentGenerator {
    /// Create a generator backed by a text model.
    pub fn new(text_model: Box<dyn TextModel>) -> Self {
        info!(
            provider = text_model.provider_name(),
            model = text_model.model_name(),
            "SegmentGenerator initialized"
        );
        Self {
            text_model: Some(text_model),
            content_filter: None,
            config: StoryConfig::default(),
        }
    }

    /// Create a generator that never calls a model.
    pub fn hardcoded() -> Self {
        info!("SegmentGenerator initialized in hardcoded mode");
        Self {
            text_model: None,
            content_filter: None,
            config: StoryConfig::default(),
        }
    }

    /// Screen setting, name and description before generating.
    pub fn with_content_filter(mut self, filter: Box<dyn ContentFilter>) -> Self {
        self.content_filter = Some(filter);
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: StoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether segments come from the canned templates.
    pub fn is_hardcoded(&self) -> bool {
        self.text_model.is_none()
    }

    /// Get the configuration.
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Generate the next segment.
    ///
    /// Without `previous_choice` this is the opening segment.
    ///
    /// # Errors
    ///
    /// - [`ValidationError`] when setting or a character field is blank
    /// - [`ContentPolicyError`] when the content filter rejects an input
    /// - the text model's own error, unchanged
    /// - a parse error when the answer holds no usable JSON object
    #[tracing::instrument(
        skip(self, context, previous_choice),
        fields(setting = %context.setting, opening = previous_choice.is_none())
    )]
    pub async fn generate(
        &self,
        context: &StoryContext,
        previous_choice: Option<&Choice>,
    ) -> StoryreelResult<StorySegment> {
        validate_context(context)?;
        self.apply_content_filter(context)?;

        let raw = match &self.text_model {
            Some(model) => self.generate_raw(model.as_ref(), context, previous_choice).await?,
            None => {
                debug!("Using hardcoded segment");
                hardcoded_segment(context, previous_choice)
            }
        };

        let segment = repair_segment(&raw, context);
        info!(
            id = %segment.id,
            choice_count = segment.choices.len(),
            "Story segment generated"
        );
        Ok(segment)
    }

    async fn generate_raw(
        &self,
        model: &dyn TextModel,
        context: &StoryContext,
        previous_choice: Option<&Choice>,
    ) -> StoryreelResult<Value> {
        let variation = Variation::draw(context.variation_seed);
        debug!(
            seed = variation.seed,
            time_of_day = %variation.time_of_day,
            mood = %variation.mood,
            "Drew variation"
        );

        let prompt = match previous_choice {
            Some(previous) => continuation_prompt(context, previous, &variation, &self.config),
            None => opening_prompt(context, &variation, &self.config),
        };

        debug!(prompt_len = prompt.len(), "Sending prompt to text model");
        let response = model.generate_text(&prompt).await?;
        debug!(response_len = response.len(), "Text model responded");

        let json = extract_json(&response)?;
        parse_json(&json)
    }

    fn apply_content_filter(&self, context: &StoryContext) -> StoryreelResult<()> {
        let Some(filter) = &self.content_filter else {
            return Ok(());
        };

        let checks = [
            ("Setting", context.setting.as_str()),
            ("Character name", context.character.name.as_str()),
            ("Character description", context.character.description.as_str()),
        ];

        for (label, text) in checks {
            let verdict = filter.evaluate(text);
            if !verdict.passed {
                let reason = verdict.reason.unwrap_or_else(|| "rejected".to_string());
                tracing::warn!(field = label, reason = %reason, "Content filter rejected input");
                return Err(ContentPolicyError::new(format!(
                    "{} failed content filter: {}",
                    label, reason
                ))
                .into());
            }
        }

        Ok(())
    }
}

fn validate_context(context: &StoryContext) -> StoryreelResult<()> {
    let required = [
        ("setting", context.setting.as_str()),
        ("character.name", context.character.name.as_str()),
        ("character.gender", context.character.gender.as_str()),
        ("character.description", context.character.description.as_str()),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::new(field).into());
        }
    }

    Ok(())
}
