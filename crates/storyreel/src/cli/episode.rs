//! Episode command handler.

use super::EpisodeArgs;
use storyreel::{StoryreelConfig, episode_orchestrator};
use tracing::info;

/// Generate an episode and print it as JSON on stdout.
///
/// A failed episode is printed too, with status `error`, before the error
/// is returned.
pub async fn run_episode(
    config: StoryreelConfig,
    args: EpisodeArgs,
    offline: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut episode_config = config.episode().clone();
    if let Some(max) = args.max_segments {
        episode_config = episode_config.with_max_segments(max);
    }
    if let Some(min) = args.min_segments {
        episode_config = episode_config.with_min_segments(min);
    }
    let config = config.with_episode(episode_config);

    let mut orchestrator = episode_orchestrator(&config, offline)?;
    let request = args.story.episode_request();

    let outcome = orchestrator.generate_episode(&request).await;
    if let Some(episode) = orchestrator.current_episode() {
        println!("{}", serde_json::to_string_pretty(episode)?);
    }
    outcome?;

    let stats = orchestrator.stats();
    info!(
        segments = stats.segment_count,
        duration_seconds = stats.duration_seconds,
        cached_clips = orchestrator.video().cache_stats().size,
        "Episode written"
    );
    Ok(())
}
