//! Prompt templates for opening and continuation segments.

use crate::{CHOICES_PER_SEGMENT, StoryConfig, Variation, explicit_video_base};
use storyreel_core::{Choice, StoryContext};

fn themes_text(themes: &[String]) -> String {
    if themes.is_empty() {
        "general adventure".to_string()
    } else {
        themes.join(", ")
    }
}

fn theme_genre<'a>(themes: &'a [String], index: usize, fallback: &'a str) -> &'a str {
    themes.get(index).map(String::as_str).unwrap_or(fallback)
}

fn themes_json(themes: &[String]) -> String {
    serde_json::to_string(themes).unwrap_or_else(|_| "[]".to_string())
}

/// Prompt for the first segment of a story.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Character, StoryContext};
/// use storyreel_story::{StoryConfig, Variation, opening_prompt};
///
/// let context = StoryContext::new(
///     "Coffee shop",
///     Character::new("Ada", "female", "barista"),
///     vec![],
/// );
/// let prompt = opening_prompt(&context, &Variation::draw(Some(1)), &StoryConfig::default());
/// assert!(prompt.contains("SETTING: Coffee shop"));
/// assert!(prompt.contains("THEMES: general adventure"));
/// assert!(prompt.contains("Generate EXACTLY 4"));
/// ```
pub fn opening_prompt(context: &StoryContext, variation: &Variation, config: &StoryConfig) -> String {
    let setting = &context.setting;
    let name = &context.character.name;
    let gender = &context.character.gender;
    let description = &context.character.description;
    let themes = &context.themes;
    let themes_text = themes_text(themes);
    let visual_base = explicit_video_base(setting, themes);
    let narration_length = config.narration_length();

    format!(
        r#"Create a story with these EXACT specifications:

VARIATION SEED: {seed} (Use this to create a unique opening - never repeat the same scenario)

TIME & ATMOSPHERE:
- Time of day: {time}
- Weather/Atmosphere: {weather}
- Camera style: {camera}
- Overall mood: {mood}

CHARACTER: {name}, a {gender} {description}
SETTING: {setting} (MUST be the PRIMARY location - this is CRITICAL)
THEMES: {themes_text}
VISUAL ELEMENTS: {visual_base}

CRITICAL RULES - MUST FOLLOW:
1. The videoPrompt MUST START with "{setting}" or "{name} at {setting}"
2. The videoPrompt MUST include these visual elements: {visual_base}
3. INCORPORATE the time ({time}) and weather ({weather}) into the scene
4. Use {camera} perspective and capture a {mood} mood
5. The narration MUST take place at "{setting}"
6. The story MUST incorporate these themes: {themes_text}
7. Opening scene happens at {setting} - nowhere else
8. Create a UNIQUE scenario - avoid generic openings

LOCATION ENFORCEMENT:
- Primary setting: {setting}
- Character {name} is currently AT/IN {setting}
- Video must SHOW {setting} as described: {visual_base}
- All action happens at {setting}

Generate EXACTLY {count} meaningful choices that reflect the themes: {themes_text}

Return ONLY valid JSON with this exact structure:
{{
    "id": "opening",
    "videoPrompt": "{setting}, {visual_base}, {time}, {weather}, {camera}, {name} the {description} is present, {mood} atmosphere, [add unique cinematic details matching {themes_text}]",
    "narrationText": "Story opening at {setting} during {time} with {weather} ({narration_length}). Incorporate {themes_text} themes and {mood} mood. MUST mention {setting} explicitly. {name} is a {description}. Make this scenario UNIQUE.",
    "explicitSetting": "{setting}",
    "themes": {themes_json},
    "choices": [
        {{"text": "Choice 1 influenced by {themes_text}", "genre": "{genre0}"}},
        {{"text": "Choice 2 influenced by {themes_text}", "genre": "{genre1}"}},
        {{"text": "Choice 3 influenced by {themes_text}", "genre": "{genre2}"}},
        {{"text": "Choice 4 influenced by {themes_text}", "genre": "random"}}
    ]
}}

IMPORTANT: Each generation should feel FRESH and DIFFERENT - vary the specific situation, conflict, or hook while maintaining the setting and themes.

Make it cinematic, engaging, and appropriate for all audiences. The setting {setting} is NON-NEGOTIABLE."#,
        seed = variation.seed,
        time = variation.time_of_day,
        weather = variation.weather,
        camera = variation.camera,
        mood = variation.mood,
        count = CHOICES_PER_SEGMENT,
        themes_json = themes_json(themes),
        genre0 = theme_genre(themes, 0, "mystery"),
        genre1 = theme_genre(themes, 1, "action"),
        genre2 = theme_genre(themes, 2, "drama"),
    )
}

/// Prompt for a segment that follows the viewer's previous choice.
pub fn continuation_prompt(
    context: &StoryContext,
    previous_choice: &Choice,
    variation: &Variation,
    config: &StoryConfig,
) -> String {
    let setting = &context.setting;
    let name = &context.character.name;
    let gender = &context.character.gender;
    let description = &context.character.description;
    let themes = &context.themes;
    let themes_text = themes_text(themes);
    let narration_length = config.narration_length();
    let scene_id = format!("scene_{}", chrono::Utc::now().timestamp_millis());

    format!(
        r#"Continue the story for {name} at {setting}.

PREVIOUS CHOICE: "{choice_text}"
PREVIOUS GENRE: {choice_genre}

CURRENT CONTEXT:
- Setting: {setting} (MUST remain here)
- Character: {name}, a {gender} {description}
- Themes: {themes_text}
- Variation: {time}, {weather}, {mood}

CRITICAL RULES:
1. Continue the story based on the previous choice
2. MUST still be at {setting} - DO NOT change location
3. The videoPrompt must show {setting}
4. Generate EXACTLY {count} new meaningful choices
5. Incorporate {themes_text} themes

Return ONLY valid JSON:
{{
    "id": "{scene_id}",
    "videoPrompt": "{setting}, [continuing action based on previous choice], {name} reacts to the situation",
    "narrationText": "Continuation at {setting} ({narration_length}). Based on {name}'s decision to {choice_text}...",
    "explicitSetting": "{setting}",
    "themes": {themes_json},
    "choices": [
        {{"text": "New choice 1", "genre": "{genre0}"}},
        {{"text": "New choice 2", "genre": "{genre1}"}},
        {{"text": "New choice 3", "genre": "{genre2}"}},
        {{"text": "New choice 4", "genre": "random"}}
    ]
}}

Make the continuation logical and engaging based on the previous choice."#,
        choice_text = previous_choice.text,
        choice_genre = previous_choice.genre,
        time = variation.time_of_day,
        weather = variation.weather,
        mood = variation.mood,
        count = CHOICES_PER_SEGMENT,
        themes_json = themes_json(themes),
        genre0 = theme_genre(themes, 0, "mystery"),
        genre1 = theme_genre(themes, 1, "action"),
        genre2 = theme_genre(themes, 2, "drama"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::Character;

    fn context() -> StoryContext {
        StoryContext::new(
            "Gas station",
            Character::new("Morgan", "male", "night shift worker"),
            vec!["Mystery".to_string(), "Horror".to_string()],
        )
    }

    #[test]
    fn test_opening_prompt_embeds_context_and_variation() {
        let variation = Variation::draw(Some(99));
        let prompt = opening_prompt(&context(), &variation, &StoryConfig::default());

        assert!(prompt.contains("CHARACTER: Morgan, a male night shift worker"));
        assert!(prompt.contains(&format!("VARIATION SEED: {}", variation.seed)));
        assert!(prompt.contains(&variation.time_of_day));
        assert!(prompt.contains("gas pumps, neon signs"));
        assert!(prompt.contains(r#""themes": ["Mystery","Horror"]"#));
        assert!(prompt.contains(r#""genre": "Horror""#));
        assert!(prompt.contains(r#""genre": "drama""#));
        assert!(prompt.contains("(100-150 words)"));
    }

    #[test]
    fn test_continuation_prompt_mentions_previous_choice() {
        let choice = Choice::new("Check the back room", "Mystery");
        let prompt = continuation_prompt(
            &context(),
            &choice,
            &Variation::draw(Some(3)),
            &StoryConfig::default(),
        );

        assert!(prompt.starts_with("Continue the story for Morgan at Gas station."));
        assert!(prompt.contains(r#"PREVIOUS CHOICE: "Check the back room""#));
        assert!(prompt.contains("PREVIOUS GENRE: Mystery"));
        assert!(prompt.contains("\"id\": \"scene_"));
    }
}
