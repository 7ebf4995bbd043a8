//! Canned segments for runs without a text model.

use serde_json::{Value, json};
use storyreel_core::{Choice, StoryContext};

/// Raw segment built from the context alone.
///
/// Shaped like a model answer so it goes through the same repair step.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Character, StoryContext};
/// use storyreel_story::hardcoded_segment;
///
/// let context = StoryContext::new(
///     "Library",
///     Character::new("Iris", "female", "archivist"),
///     vec![],
/// );
/// let raw = hardcoded_segment(&context, None);
/// assert_eq!(raw["id"], "opening");
/// assert_eq!(raw["choices"].as_array().unwrap().len(), 4);
/// ```
pub fn hardcoded_segment(context: &StoryContext, previous_choice: Option<&Choice>) -> Value {
    let setting = &context.setting;
    let name = &context.character.name;
    let gender = &context.character.gender;
    let description = &context.character.description;
    let genre = |index: usize, fallback: &str| {
        context
            .themes
            .get(index)
            .filter(|theme| !theme.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };

    match previous_choice {
        None => json!({
            "id": "opening",
            "videoPrompt": format!(
                "{}, {} the {} stands in the center, atmospheric lighting, cinematic camera angle",
                setting, name, description
            ),
            "narrationText": format!(
                "{}, a {} {}, finds themselves at {}. The atmosphere is thick with anticipation. What will happen next?",
                name, gender, description, setting
            ),
            "explicitSetting": setting,
            "themes": context.themes,
            "choices": [
                {"text": "🔍 Investigate the surroundings carefully", "genre": genre(0, "mystery")},
                {"text": "⚔️ Take immediate action", "genre": genre(1, "action")},
                {"text": "💬 Try to communicate with someone nearby", "genre": genre(2, "drama")},
                {"text": "🎲 Wait and see what happens", "genre": "random"}
            ]
        }),
        Some(previous) => json!({
            "id": format!("scene_{}", chrono::Utc::now().timestamp_millis()),
            "videoPrompt": format!(
                "{}, {} continues their journey, reacting to the previous decision",
                setting, name
            ),
            "narrationText": format!(
                "After choosing to {}, {} finds the situation developing in unexpected ways at {}.",
                previous.text, name, setting
            ),
            "explicitSetting": setting,
            "themes": context.themes,
            "choices": [
                {"text": "🔍 Explore further based on what was discovered", "genre": "mystery"},
                {"text": "⚔️ Double down on the previous approach", "genre": "action"},
                {"text": "💬 Change tactics and try something different", "genre": "drama"},
                {"text": "🎲 Take a risk", "genre": "random"}
            ]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::Character;

    #[test]
    fn test_opening_genres_skip_blank_themes() {
        let context = StoryContext::new(
            "Gas station",
            Character::new("Morgan", "male", "night shift worker"),
            vec!["".to_string(), "Horror".to_string()],
        );
        let raw = hardcoded_segment(&context, None);

        assert_eq!(raw["choices"][0]["genre"], "mystery");
        assert_eq!(raw["choices"][1]["genre"], "Horror");
        assert_eq!(raw["choices"][2]["genre"], "drama");
        assert_eq!(raw["choices"][3]["genre"], "random");
    }
}
