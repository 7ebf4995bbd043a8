//! Episode state and the narrative arc that guides it.

use crate::{Character, StorySegment, VideoResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of a segment in the episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    /// First segment
    #[display("opening")]
    Opening,
    /// Any later segment
    #[display("continuation")]
    Continuation,
}

/// One scene of an episode with its video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSegment {
    /// Zero-based position
    pub index: usize,
    /// Opening or continuation
    #[serde(rename = "type")]
    pub segment_type: SegmentType,
    /// Validated story segment
    pub story: StorySegment,
    /// Video result, possibly a placeholder
    pub video: VideoResult,
    /// Creation time
    pub generated_at: DateTime<Utc>,
}

/// Story plan produced once per episode.
///
/// `Default` is the fallback plan used when the coordinator cannot produce
/// one.
///
/// # Examples
///
/// ```
/// use storyreel_core::NarrativeArc;
///
/// let arc = NarrativeArc::default();
/// assert_eq!(arc.narrative_beats.len(), 5);
/// assert_eq!(arc.tone_progression.len(), 5);
/// assert_eq!(arc.visual_motifs.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeArc {
    /// How the story opens
    pub setup: String,
    /// Escalation
    pub rising_action: String,
    /// Peak moment
    pub climax: String,
    /// Ending
    pub resolution: String,
    /// Planned beats, one per segment
    #[serde(default)]
    pub narrative_beats: Vec<String>,
    /// Tone per segment
    #[serde(default)]
    pub tone_progression: Vec<String>,
    /// Recurring visual elements
    #[serde(default)]
    pub visual_motifs: Vec<String>,
    /// How the character changes
    #[serde(default)]
    pub character_arc: String,
}

impl Default for NarrativeArc {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            setup: "Introduce character and establish setting".to_string(),
            rising_action: "Present challenges and complications".to_string(),
            climax: "Reach peak moment of conflict or discovery".to_string(),
            resolution: "Conclude with character growth or change".to_string(),
            narrative_beats: owned(&[
                "Establish character in their world",
                "Introduce conflict or mystery",
                "Escalate tension",
                "Reach turning point",
                "Find resolution",
            ]),
            tone_progression: owned(&["intriguing", "tense", "intense", "dramatic", "satisfying"]),
            visual_motifs: owned(&["lighting changes", "recurring locations", "symbolic objects"]),
            character_arc: "Character learns or changes through experience".to_string(),
        }
    }
}

/// Lifecycle of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeStatus {
    /// Segments are still being produced
    #[display("generating")]
    Generating,
    /// Finished with a summary
    #[display("completed")]
    Completed,
    /// Aborted, partial segments are kept
    #[display("error")]
    Error,
}

/// Input of an episode run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRequest {
    /// Protagonist
    pub character: Character,
    /// Where the story takes place
    pub setting: String,
    /// Ordered themes
    #[serde(default)]
    pub themes: Vec<String>,
}

/// A multi-segment story run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// `episode-{uuid}`
    pub id: String,
    /// Protagonist
    pub character: Character,
    /// Where the story takes place
    pub setting: String,
    /// Ordered themes
    pub themes: Vec<String>,
    /// Segments in generation order
    pub segments: Vec<EpisodeSegment>,
    /// Plan, set once planning has run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative_arc: Option<NarrativeArc>,
    /// Two or three sentence recap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Start time
    pub started_at: DateTime<Utc>,
    /// Completion time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Lifecycle state
    pub status: EpisodeStatus,
    /// Failure message when `status` is `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Snapshot of the current episode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeStats {
    /// Whether an episode is held
    pub has_episode: bool,
    /// Number of segments so far
    pub segment_count: usize,
    /// Lifecycle state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EpisodeStatus>,
    /// Total runtime assuming eight-second clips
    pub duration_seconds: u32,
    /// Protagonist name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Setting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
}

impl EpisodeStats {
    /// Seconds of video per segment.
    pub const SECONDS_PER_SEGMENT: u32 = 8;

    /// Stats for an episode, or the empty snapshot.
    pub fn from_episode(episode: Option<&Episode>) -> Self {
        match episode {
            Some(episode) => Self {
                has_episode: true,
                segment_count: episode.segments.len(),
                status: Some(episode.status),
                duration_seconds: episode.segments.len() as u32 * Self::SECONDS_PER_SEGMENT,
                character: Some(episode.character.name.clone()),
                setting: Some(episode.setting.clone()),
            },
            None => Self::default(),
        }
    }
}
