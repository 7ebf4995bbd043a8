//! storyreel: interactive AI story episodes.
//!
//! storyreel turns a setting, a character and a few themes into a short
//! interactive episode. Each segment is a scene with narration, a video
//! clip and four choices for the viewer.
//!
//! # Features
//!
//! - **Segment generation**: text model prompting with response repair, so
//!   every segment names the setting and offers exactly four choices
//! - **Video generation**: bounded retries, a placeholder clip when the
//!   provider gives up, and a per-scene cache
//! - **Episode orchestration**: a coordinator model plans the arc, keeps
//!   narration continuous, polishes prompts and decides when to stop
//! - **Offline mode**: hardcoded segments and placeholder clips, no API key
//!
//! # Quick Start
//!
//! ```
//! use storyreel::{Character, EpisodeRequest, StoryreelConfig, episode_orchestrator};
//!
//! # #[tokio::main]
//! # async fn main() -> storyreel::StoryreelResult<()> {
//! let config = StoryreelConfig::default();
//! let mut orchestrator = episode_orchestrator(&config, true)?;
//!
//! let request = EpisodeRequest {
//!     character: Character::new("Morgan", "male", "night shift worker"),
//!     setting: "Gas station".to_string(),
//!     themes: vec!["Mystery".to_string()],
//! };
//! let episode = orchestrator.generate_episode(&request).await?;
//! assert!(!episode.segments.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` (default) - Google Gemini text and video models
//! - `api` - marker for tests that call the live API
//!
//! # Architecture
//!
//! - `storyreel_error` - error types
//! - `storyreel_core` - data model
//! - `storyreel_interface` - capability traits
//! - `storyreel_security` - keyword content filter
//! - `storyreel_cache` - scene cache
//! - `storyreel_story` - segment generator
//! - `storyreel_video` - video retrier
//! - `storyreel_episode` - episode orchestrator
//! - `storyreel_models` - Gemini adapters
//!
//! This crate re-exports the public surface and wires the pieces together
//! from configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod pipeline;

pub use config::{FilterConfig, ModelsConfig, StoryreelConfig};
pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
pub use pipeline::{episode_orchestrator, segment_generator, video_retrier};

pub use storyreel_cache::{CacheStats, SceneCache, SceneCacheConfig};
pub use storyreel_core::{
    Character, Choice, ContentVerdict, Episode, EpisodeRequest, EpisodeSegment, EpisodeStats,
    EpisodeStatus, NarrativeArc, SceneDescription, SegmentType, StoryContext, StorySegment,
    VideoRequest, VideoResponse, VideoResult,
};
pub use storyreel_episode::{EpisodeOrchestrator, OrchestratorConfig};
pub use storyreel_error::{
    CapabilityError, CapabilityErrorKind, ConfigError, ContentPolicyError, ParseError,
    ParseErrorKind, StoryreelError, StoryreelErrorKind, StoryreelResult, ValidationError,
};
pub use storyreel_interface::{ContentFilter, TextModel, VideoModel};
pub use storyreel_security::{KeywordContentFilter, KeywordFilterConfig};
pub use storyreel_story::{SegmentGenerator, StoryConfig};
pub use storyreel_video::{VideoConfig, VideoRetrier};

#[cfg(feature = "gemini")]
pub use storyreel_models::{GeminiClient, GeminiTextModel, GeminiVideoModel};
