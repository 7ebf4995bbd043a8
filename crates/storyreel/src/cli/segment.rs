//! Segment command handler.

use super::SegmentArgs;
use serde_json::json;
use storyreel::{Choice, SceneDescription, StoryreelConfig, segment_generator, video_retrier};

/// Generate one segment, optionally with its clip, and print it as JSON.
pub async fn run_segment(
    config: StoryreelConfig,
    args: SegmentArgs,
    offline: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = segment_generator(&config, offline)?;

    let mut context = args.story.story_context();
    if let Some(seed) = args.seed {
        context = context.with_variation_seed(seed);
    }
    let previous = args
        .previous_choice
        .map(|text| Choice::new(text, args.previous_genre));

    let segment = generator.generate(&context, previous.as_ref()).await?;

    if !args.video {
        println!("{}", serde_json::to_string_pretty(&segment)?);
        return Ok(());
    }

    let mut retrier = video_retrier(&config, offline)?;
    let scene = SceneDescription::new(segment.video_prompt.clone())
        .with_narration(segment.narration_text.clone())
        .with_instruction(segment.video_instruction.clone())
        .with_id(segment.id.clone());
    let video = retrier.generate_video(&scene).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "story": segment, "video": video }))?
    );
    Ok(())
}
