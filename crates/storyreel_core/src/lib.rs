//! Core data types for the storyreel episode generation library.
//!
//! This crate provides the shapes that flow between the story generator, the
//! video retrier and the episode orchestrator. Everything serializes with
//! camelCase field names so the JSON matches what the models are asked for.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod episode;
mod scene;
mod story;
mod verdict;
mod video;

pub use character::Character;
pub use episode::{
    Episode, EpisodeRequest, EpisodeSegment, EpisodeStats, EpisodeStatus, NarrativeArc,
    SegmentType,
};
pub use scene::SceneDescription;
pub use story::{Choice, StoryContext, StorySegment};
pub use verdict::ContentVerdict;
pub use video::{
    Candidate, CandidateContent, FileData, GenerationConfig, RequestContent, RequestPart,
    ResponsePart, VideoData, VideoRequest, VideoResponse, VideoResult,
};
