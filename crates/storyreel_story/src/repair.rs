//! Validation and repair of raw model segments.
//!
//! Whatever the model returns, the segment that leaves this module has four
//! choices, a video prompt that names the setting, and the context's setting
//! and character attached.

use serde_json::Value;
use storyreel_core::{Choice, StoryContext, StorySegment};
use tracing::{debug, warn};

/// Every segment offers this many choices.
pub const CHOICES_PER_SEGMENT: usize = 4;

/// Words of the setting longer than three characters, lowercased.
///
/// A setting with no such word has no keywords, so repair always prefixes
/// its video prompt.
///
/// # Examples
///
/// ```
/// use storyreel_story::setting_keywords;
///
/// assert_eq!(setting_keywords("The old Gas station"), vec!["station".to_string()]);
/// assert!(setting_keywords("A bar").is_empty());
/// ```
pub fn setting_keywords(setting: &str) -> Vec<String> {
    setting
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .map(str::to_string)
        .collect()
}

/// Whether `text` mentions one of the setting's keywords.
///
/// A setting without keywords is never mentioned.
fn mentions_setting(text: &str, setting: &str) -> bool {
    let text_lower = text.to_lowercase();
    setting_keywords(setting)
        .iter()
        .any(|keyword| text_lower.contains(keyword))
}

/// Location enforcement sentence for the video model.
pub fn video_instruction(context: &StoryContext) -> String {
    format!(
        "MUST SHOW: {} as the primary setting. Character {} must be visible at this location.",
        context.setting, context.character.name
    )
}

/// The fixed rotation used to pad short choice lists.
///
/// The first three genres follow the context's themes, falling back to
/// mystery, action and drama. The fourth is always `random`.
pub fn default_choices(context: &StoryContext) -> [Choice; CHOICES_PER_SEGMENT] {
    let genre = |index: usize, fallback: &str| {
        context
            .themes
            .get(index)
            .filter(|theme| !theme.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };

    [
        Choice::new("🔍 Look around carefully", genre(0, "mystery")),
        Choice::new("⚔️ Take decisive action", genre(1, "action")),
        Choice::new("💬 Call out or speak", genre(2, "drama")),
        Choice::new("🎲 Wait and observe", "random"),
    ]
}

fn non_empty_str<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_choice(entry: &Value) -> Option<Choice> {
    match entry {
        Value::String(text) if !text.trim().is_empty() => Some(Choice::new(text.trim(), "random")),
        Value::Object(_) => {
            let text = non_empty_str(entry, "text")?;
            let genre = non_empty_str(entry, "genre").unwrap_or("random");
            Some(Choice::new(text, genre))
        }
        _ => None,
    }
}

fn fix_choices(raw: &Value, context: &StoryContext) -> Vec<Choice> {
    let entries = raw
        .get("choices")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut choices: Vec<Choice> = entries.iter().filter_map(parse_choice).collect();
    let dropped = entries.len() - choices.len();
    if dropped > 0 {
        warn!(dropped, "Dropped malformed choices");
    }

    if choices.len() != CHOICES_PER_SEGMENT {
        warn!(
            choice_count = choices.len(),
            expected = CHOICES_PER_SEGMENT,
            "Invalid choice count, repairing"
        );
        let defaults = default_choices(context);
        while choices.len() < CHOICES_PER_SEGMENT {
            choices.push(defaults[choices.len() % defaults.len()].clone());
        }
        choices.truncate(CHOICES_PER_SEGMENT);
    }

    choices
}

/// Turn a raw model object into a validated segment.
///
/// Pure: the same input always yields the same segment, apart from the
/// generated id when the model omitted one.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storyreel_core::{Character, StoryContext};
/// use storyreel_story::repair_segment;
///
/// let context = StoryContext::new(
///     "Coffee shop",
///     Character::new("Ada", "female", "barista"),
///     vec!["Comedy".to_string()],
/// );
/// let raw = json!({"id": "opening", "videoPrompt": "A rainy street", "choices": []});
///
/// let segment = repair_segment(&raw, &context);
/// assert_eq!(segment.video_prompt, "Coffee shop: A rainy street");
/// assert_eq!(segment.choices.len(), 4);
/// assert_eq!(segment.choices[0].genre, "Comedy");
/// assert_eq!(segment.explicit_setting, "Coffee shop");
/// ```
pub fn repair_segment(raw: &Value, context: &StoryContext) -> StorySegment {
    let setting = &context.setting;

    let id = non_empty_str(raw, "id")
        .map(str::to_string)
        .unwrap_or_else(|| format!("scene_{}", chrono::Utc::now().timestamp_millis()));

    let explicit_setting = non_empty_str(raw, "explicitSetting")
        .map(str::to_string)
        .unwrap_or_else(|| setting.clone());

    let choices = fix_choices(raw, context);

    let mut video_prompt = match non_empty_str(raw, "videoPrompt") {
        Some(prompt) => prompt.to_string(),
        None => {
            warn!("Video prompt missing, using the setting");
            setting.clone()
        }
    };
    if !mentions_setting(&video_prompt, setting) {
        warn!(setting = %setting, "Video prompt missing setting, adding it");
        video_prompt = format!("{}: {}", setting, video_prompt);
    }

    let narration_text = match raw.get("narrationText").and_then(Value::as_str) {
        Some(narration) => narration.to_string(),
        None => {
            warn!("Narration missing from segment");
            String::new()
        }
    };
    if !mentions_setting(&narration_text, setting) {
        warn!(setting = %setting, "Narration does not mention the setting");
    }

    let themes = raw
        .get("themes")
        .and_then(Value::as_array)
        .map(|themes| {
            themes
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_else(|| context.themes.clone());

    debug!(id = %id, choice_count = choices.len(), "Segment repaired");

    StorySegment {
        id,
        video_prompt,
        narration_text,
        explicit_setting,
        themes,
        choices,
        video_instruction: video_instruction(context),
        setting: setting.clone(),
        character: context.character.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storyreel_core::Character;

    fn context(themes: &[&str]) -> StoryContext {
        StoryContext::new(
            "Gas station",
            Character::new("Morgan", "male", "night shift worker"),
            themes.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn choices(n: usize) -> Value {
        Value::Array(
            (0..n)
                .map(|i| json!({"text": format!("Choice {}", i), "genre": "drama"}))
                .collect(),
        )
    }

    #[test]
    fn test_choice_count_is_always_four() {
        for n in [0, 1, 3, 4, 5, 9] {
            let raw = json!({"videoPrompt": "Gas station", "choices": choices(n)});
            let segment = repair_segment(&raw, &context(&[]));
            assert_eq!(segment.choices.len(), 4, "with {} upstream choices", n);
        }
    }

    #[test]
    fn test_padding_uses_rotation_from_current_length() {
        let raw = json!({"videoPrompt": "Gas station", "choices": choices(1)});
        let segment = repair_segment(&raw, &context(&["Mystery", "Horror"]));

        assert_eq!(segment.choices[0].text, "Choice 0");
        assert_eq!(segment.choices[1], Choice::new("⚔️ Take decisive action", "Horror"));
        assert_eq!(segment.choices[2], Choice::new("💬 Call out or speak", "drama"));
        assert_eq!(segment.choices[3], Choice::new("🎲 Wait and observe", "random"));
    }

    #[test]
    fn test_truncation_preserves_order() {
        let raw = json!({"videoPrompt": "Gas station", "choices": choices(6)});
        let segment = repair_segment(&raw, &context(&[]));
        let texts: Vec<_> = segment.choices.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Choice 0", "Choice 1", "Choice 2", "Choice 3"]);
    }

    #[test]
    fn test_malformed_choices_are_dropped() {
        let raw = json!({
            "videoPrompt": "Gas station",
            "choices": [
                42,
                null,
                {"genre": "action"},
                "Run for the door",
                {"text": "Hide"}
            ]
        });
        let segment = repair_segment(&raw, &context(&[]));

        assert_eq!(segment.choices[0], Choice::new("Run for the door", "random"));
        assert_eq!(segment.choices[1], Choice::new("Hide", "random"));
        assert_eq!(segment.choices[2].text, "💬 Call out or speak");
        assert_eq!(segment.choices.len(), 4);
    }

    #[test]
    fn test_choices_not_an_array() {
        let raw = json!({"videoPrompt": "Gas station", "choices": "none"});
        let segment = repair_segment(&raw, &context(&[]));
        assert_eq!(segment.choices.len(), 4);
        assert_eq!(segment.choices[0].genre, "mystery");
    }

    #[test]
    fn test_prompt_with_keyword_is_untouched() {
        let raw = json!({"videoPrompt": "Neon STATION glow at midnight"});
        let segment = repair_segment(&raw, &context(&[]));
        assert_eq!(segment.video_prompt, "Neon STATION glow at midnight");
    }

    #[test]
    fn test_prompt_without_keyword_gets_prefix() {
        let raw = json!({"videoPrompt": "A dark road"});
        let segment = repair_segment(&raw, &context(&[]));
        assert_eq!(segment.video_prompt, "Gas station: A dark road");
    }

    #[test]
    fn test_missing_prompt_becomes_setting() {
        let segment = repair_segment(&json!({}), &context(&[]));
        assert_eq!(segment.video_prompt, "Gas station");
        assert_eq!(segment.narration_text, "");
        assert!(segment.id.starts_with("scene_"));
    }

    #[test]
    fn test_setting_without_keywords_always_prefixed() {
        let mut ctx = context(&[]);
        ctx.setting = "Bar".to_string();

        let segment = repair_segment(&json!({"videoPrompt": "A smoky bar at night"}), &ctx);
        assert_eq!(segment.video_prompt, "Bar: A smoky bar at night");

        let segment = repair_segment(&json!({"videoPrompt": "A smoky room"}), &ctx);
        assert_eq!(segment.video_prompt, "Bar: A smoky room");
    }

    #[test]
    fn test_blank_theme_falls_back_to_default_genre() {
        let raw = json!({"videoPrompt": "Gas station", "choices": []});
        let segment = repair_segment(&raw, &context(&["", "  ", "Horror"]));

        assert_eq!(segment.choices[0].genre, "mystery");
        assert_eq!(segment.choices[1].genre, "action");
        assert_eq!(segment.choices[2].genre, "Horror");
    }

    #[test]
    fn test_narration_is_never_rewritten() {
        let raw = json!({"videoPrompt": "Gas station", "narrationText": "Somewhere else entirely."});
        let segment = repair_segment(&raw, &context(&[]));
        assert_eq!(segment.narration_text, "Somewhere else entirely.");
    }

    #[test]
    fn test_context_is_attached() {
        let raw = json!({"id": "opening", "videoPrompt": "Gas station", "explicitSetting": "Truck stop"});
        let ctx = context(&["Mystery"]);
        let segment = repair_segment(&raw, &ctx);

        assert_eq!(segment.id, "opening");
        assert_eq!(segment.explicit_setting, "Truck stop");
        assert_eq!(segment.setting, "Gas station");
        assert_eq!(segment.character, ctx.character);
        assert_eq!(segment.themes, vec!["Mystery".to_string()]);
        assert_eq!(
            segment.video_instruction,
            "MUST SHOW: Gas station as the primary setting. Character Morgan must be visible at this location."
        );
    }
}
