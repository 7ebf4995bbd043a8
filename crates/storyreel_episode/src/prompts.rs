//! Coordinator prompts.

use storyreel_core::{Episode, EpisodeRequest, NarrativeArc};

fn themes_or(themes: &[String], fallback: &str) -> String {
    if themes.is_empty() {
        fallback.to_string()
    } else {
        themes.join(", ")
    }
}

fn beats_json(arc: Option<&NarrativeArc>) -> String {
    let beats: &[String] = arc.map(|arc| arc.narrative_beats.as_slice()).unwrap_or(&[]);
    serde_json::to_string(beats).unwrap_or_else(|_| "[]".to_string())
}

/// Ask the coordinator for a narrative arc.
pub fn arc_prompt(request: &EpisodeRequest) -> String {
    let character = &request.character;
    format!(
        r#"You are a narrative orchestrator for an interactive story platform. Plan the narrative arc for an episode.

Character: {name} ({gender}, {description})
Setting: {setting}
Themes: {themes}

Create a narrative arc plan with:
1. Setup: How should the story begin?
2. Rising Action: What challenges or developments should occur?
3. Climax: What's the peak moment?
4. Resolution: How should it conclude?

Also suggest:
- Key narrative beats (3-5 major story points)
- Tone progression (how should mood evolve?)
- Visual motifs (recurring visual elements)
- Character development arc

Return as JSON:
{{
  "setup": "description",
  "risingAction": "description",
  "climax": "description",
  "resolution": "description",
  "narrativeBeats": ["beat1", "beat2", "beat3"],
  "toneProgression": ["tone1", "tone2", "tone3"],
  "visualMotifs": ["motif1", "motif2"],
  "characterArc": "description"
}}"#,
        name = character.name,
        gender = character.gender,
        description = character.description,
        setting = request.setting,
        themes = themes_or(&request.themes, "None specified"),
    )
}

/// Ask the coordinator to polish a video prompt for segment `index`.
///
/// The tone comes from the arc's tone progression, clamped to its last
/// entry, or `engaging` when the arc has none.
///
/// # Examples
///
/// ```
/// use storyreel_core::NarrativeArc;
/// use storyreel_episode::enhance_prompt;
///
/// let prompt = enhance_prompt("Gas station: neon", "It was late.", &NarrativeArc::default(), 9);
/// assert!(prompt.contains("Segment 10, tone should be satisfying"));
/// ```
pub fn enhance_prompt(
    original: &str,
    narration: &str,
    arc: &NarrativeArc,
    index: usize,
) -> String {
    let tone = arc
        .tone_progression
        .get(index.min(arc.tone_progression.len().saturating_sub(1)))
        .map(String::as_str)
        .unwrap_or("engaging");

    format!(
        r#"You are a video prompt optimizer for AI video generation. Enhance this prompt for Veo 3.1.

Original prompt: "{original}"
Narration: "{narration}"
Narrative context: Segment {segment}, tone should be {tone}

Enhance the prompt by:
1. Adding cinematic camera work (angles, movements)
2. Specifying lighting and atmosphere
3. Adding visual details that match the narration
4. Including the narrative tone
5. Ensuring it works well for 8-second video generation

Return ONLY the enhanced prompt text, no JSON, no explanation. Maximum 200 characters."#,
        segment = index + 1,
    )
}

/// Ask the coordinator whether the current narration follows the previous one.
pub fn coherence_prompt(previous: &str, current: &str, arc: Option<&NarrativeArc>) -> String {
    format!(
        r#"You are a narrative continuity checker. Review these story segments for coherence.

Previous narration: "{previous}"
Current narration: "{current}"
Planned narrative arc: {beats}

Check for:
1. Logical continuity (does current follow from previous?)
2. Character consistency
3. Setting consistency
4. Tone alignment with narrative arc

Return as JSON:
{{
  "coherent": true/false,
  "issue": "description of any issues" or null,
  "suggestedFix": "corrected narration" or null
}}"#,
        beats = beats_json(arc),
    )
}

/// Ask the coordinator whether the episode should go on.
pub fn pacing_prompt(
    segment_count: usize,
    max_segments: usize,
    last_narration: &str,
    arc: Option<&NarrativeArc>,
) -> String {
    format!(
        r#"You are an episode pacing coordinator. Decide if this interactive story episode should continue.

Current segments: {current}
Maximum segments: {max_segments}
Last narration: "{last_narration}"
Narrative arc: {beats}

The episode should continue if:
- The story has unresolved narrative threads
- We haven't reached the planned climax yet
- Character development is incomplete
- The setting hasn't been fully explored

The episode should conclude if:
- Main narrative beats are complete
- Natural resolution point reached
- Story feels complete

Return as JSON:
{{
  "continue": true/false,
  "reason": "brief explanation"
}}"#,
        current = segment_count + 1,
        beats = beats_json(arc),
    )
}

/// Ask the coordinator for a short recap of the whole episode.
pub fn summary_prompt(episode: &Episode) -> String {
    let narrations = episode
        .segments
        .iter()
        .enumerate()
        .map(|(i, segment)| format!("Segment {}: {}", i + 1, segment.story.narration_text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Summarize this interactive story episode in 2-3 engaging sentences.

Character: {name} ({description})
Setting: {setting}
Themes: {themes}

Story segments:
{narrations}

Create a compelling summary that captures the essence of the episode."#,
        name = episode.character.name,
        description = episode.character.description,
        setting = episode.setting,
        themes = episode.themes.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::Character;

    #[test]
    fn arc_prompt_without_themes() {
        let request = EpisodeRequest {
            character: Character::new("Morgan", "male", "night shift worker"),
            setting: "Gas station".to_string(),
            themes: vec![],
        };
        let prompt = arc_prompt(&request);
        assert!(prompt.contains("Character: Morgan (male, night shift worker)"));
        assert!(prompt.contains("Themes: None specified"));
    }

    #[test]
    fn enhance_tone_defaults_to_engaging() {
        let arc = NarrativeArc {
            tone_progression: vec![],
            ..NarrativeArc::default()
        };
        let prompt = enhance_prompt("a", "b", &arc, 0);
        assert!(prompt.contains("tone should be engaging"));
    }

    #[test]
    fn pacing_counts_the_next_segment() {
        let prompt = pacing_prompt(3, 7, "The lights flickered.", Some(&NarrativeArc::default()));
        assert!(prompt.contains("Current segments: 4"));
        assert!(prompt.contains("Maximum segments: 7"));
        assert!(prompt.contains("\"Escalate tension\""));
    }

    #[test]
    fn coherence_without_arc_lists_no_beats() {
        let prompt = coherence_prompt("before", "after", None);
        assert!(prompt.contains("Planned narrative arc: []"));
    }
}
