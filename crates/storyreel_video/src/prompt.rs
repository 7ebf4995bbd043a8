//! Prompt optimization before a video request.

use storyreel_core::SceneDescription;

/// Combine the scene's instruction, prompt and narration into one prompt.
///
/// # Examples
///
/// ```
/// use storyreel_core::SceneDescription;
/// use storyreel_video::optimize_prompt;
///
/// let scene = SceneDescription::new("Gas station at night")
///     .with_instruction("MUST SHOW: Gas station")
///     .with_narration("Morgan looks up.");
///
/// assert_eq!(
///     optimize_prompt(&scene),
///     "MUST SHOW: Gas station. Gas station at night. Narration: Morgan looks up., cinematic quality"
/// );
/// ```
pub fn optimize_prompt(scene: &SceneDescription) -> String {
    let mut optimized = scene.video_prompt.clone();

    if let Some(instruction) = scene.video_instruction.as_deref().filter(|s| !s.is_empty()) {
        optimized = format!("{}. {}", instruction, optimized);
    }

    if let Some(narration) = scene.narration_text.as_deref().filter(|s| !s.is_empty()) {
        optimized = format!("{}. Narration: {}", optimized, narration);
    }

    if !optimized.to_lowercase().contains("cinematic") {
        optimized.push_str(", cinematic quality");
    }

    optimized
}
