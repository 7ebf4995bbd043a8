//! Assemble the pipeline components from configuration.
//!
//! `offline` swaps every model for its stand-in: hardcoded segments,
//! placeholder clips and no coordinator. Nothing touches the network and no
//! API key is needed.

use crate::StoryreelConfig;
use storyreel_cache::SceneCache;
use storyreel_episode::EpisodeOrchestrator;
use storyreel_error::StoryreelResult;
use storyreel_interface::{TextModel, VideoModel};
use storyreel_security::KeywordContentFilter;
use storyreel_story::SegmentGenerator;
use storyreel_video::VideoRetrier;
use tracing::debug;

/// Build the segment generator, with the keyword filter when enabled.
///
/// # Errors
///
/// Missing API key or provider, or an invalid filter configuration.
pub fn segment_generator(config: &StoryreelConfig, offline: bool) -> StoryreelResult<SegmentGenerator> {
    let generator = if offline {
        SegmentGenerator::hardcoded()
    } else {
        SegmentGenerator::new(text_model(config.models().text(), None)?)
    };
    let generator = generator.with_config(config.story().clone());

    if !*config.filter().enabled() {
        debug!("Content filter disabled");
        return Ok(generator);
    }

    let filter = KeywordContentFilter::new(config.filter().keywords().clone())?;
    Ok(generator.with_content_filter(Box::new(filter)))
}

/// Build the video retrier with its scene cache.
///
/// # Errors
///
/// Missing API key or provider.
pub fn video_retrier(config: &StoryreelConfig, offline: bool) -> StoryreelResult<VideoRetrier> {
    let retrier = if offline {
        VideoRetrier::placeholder_with_config(config.video().clone())
    } else {
        VideoRetrier::new(video_model(config.models().video())?, config.video().clone())
    };
    Ok(retrier.with_cache(SceneCache::new(config.cache().clone())))
}

/// Build the episode orchestrator and everything beneath it.
///
/// # Errors
///
/// Missing API key or provider, or invalid configuration.
pub fn episode_orchestrator(
    config: &StoryreelConfig,
    offline: bool,
) -> StoryreelResult<EpisodeOrchestrator> {
    let story = segment_generator(config, offline)?;
    let video = video_retrier(config, offline)?;
    let episode = config.episode().clone();

    if offline {
        return EpisodeOrchestrator::without_coordinator(story, video, episode);
    }

    let coordinator = text_model(config.models().coordinator(), Some(*episode.temperature()))?;
    EpisodeOrchestrator::new(coordinator, story, video, episode)
}

#[cfg(feature = "gemini")]
fn text_model(model: &str, temperature: Option<f32>) -> StoryreelResult<Box<dyn TextModel>> {
    let text = storyreel_models::GeminiTextModel::new(model)?;
    Ok(match temperature {
        Some(temperature) => Box::new(text.with_temperature(temperature)),
        None => Box::new(text),
    })
}

#[cfg(feature = "gemini")]
fn video_model(model: &str) -> StoryreelResult<Box<dyn VideoModel>> {
    Ok(Box::new(storyreel_models::GeminiVideoModel::new(model)?))
}

#[cfg(not(feature = "gemini"))]
fn text_model(model: &str, _temperature: Option<f32>) -> StoryreelResult<Box<dyn TextModel>> {
    Err(no_provider(model))
}

#[cfg(not(feature = "gemini"))]
fn video_model(model: &str) -> StoryreelResult<Box<dyn VideoModel>> {
    Err(no_provider(model))
}

#[cfg(not(feature = "gemini"))]
fn no_provider(model: &str) -> storyreel_error::StoryreelError {
    storyreel_error::ConfigError::new(format!(
        "No provider compiled in for model {}; enable the gemini feature or run offline",
        model
    ))
    .into()
}
