//! Episode loop and per-segment pipeline.

use crate::{CoherenceCheck, OrchestratorConfig, PacingDecision, prompts, truncate_prompt};
use chrono::Utc;
use rand::Rng;
use serde::de::DeserializeOwned;
use storyreel_core::{
    Episode, EpisodeRequest, EpisodeSegment, EpisodeStats, EpisodeStatus, NarrativeArc,
    SceneDescription, SegmentType, StoryContext, StorySegment,
};
use storyreel_error::StoryreelResult;
use storyreel_interface::TextModel;
use storyreel_story::{SegmentGenerator, extract_json, parse_json};
use storyreel_video::VideoRetrier;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Clip length requested for every segment.
const SEGMENT_DURATION_SECONDS: u32 = 8;

/// Upper bound for the per-segment variation seed.
const SEED_RANGE: u64 = 1_000_000;

/// Drives a coordinator model, a segment generator and a video retrier
/// through one episode at a time.
///
/// The orchestrator holds the most recent episode, finished or failed, until
/// the next run or [`reset`](Self::reset).
///
/// # Examples
///
/// ```
/// use storyreel_core::{Character, EpisodeRequest, EpisodeStatus};
/// use storyreel_episode::{EpisodeOrchestrator, OrchestratorConfig};
/// use storyreel_story::SegmentGenerator;
/// use storyreel_video::VideoRetrier;
///
/// # #[tokio::main]
/// # async fn main() -> storyreel_error::StoryreelResult<()> {
/// let mut orchestrator = EpisodeOrchestrator::without_coordinator(
///     SegmentGenerator::hardcoded(),
///     VideoRetrier::placeholder(),
///     OrchestratorConfig::default().with_max_segments(3_usize).with_min_segments(1_usize),
/// )?;
///
/// let request = EpisodeRequest {
///     character: Character::new("Morgan", "male", "night shift worker"),
///     setting: "Gas station".to_string(),
///     themes: vec!["Mystery".to_string()],
/// };
/// let episode = orchestrator.generate_episode(&request).await?;
///
/// assert_eq!(episode.status, EpisodeStatus::Completed);
/// assert!(episode.summary.is_some());
/// # Ok(())
/// # }
/// ```
pub struct EpisodeOrchestrator {
    coordinator: Option<Box<dyn TextModel>>,
    story: SegmentGenerator,
    video: VideoRetrier,
    config: OrchestratorConfig,
    current: Option<Episode>,
}

impl EpisodeOrchestrator {
    /// Create an orchestrator with a coordinator model.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the segment bounds are invalid.
    pub fn new(
        coordinator: Box<dyn TextModel>,
        story: SegmentGenerator,
        video: VideoRetrier,
        config: OrchestratorConfig,
    ) -> StoryreelResult<Self> {
        config.validate()?;
        info!(
            provider = coordinator.provider_name(),
            model = coordinator.model_name(),
            max_segments = config.max_segments(),
            min_segments = config.min_segments(),
            "Episode orchestrator initialized"
        );
        Ok(Self {
            coordinator: Some(coordinator),
            story,
            video,
            config,
            current: None,
        })
    }

    /// Create an orchestrator whose coordinator steps all take their
    /// fallbacks: default arc, no continuity or prompt rewrites, pacing left
    /// to the segment bounds and a canned summary.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the segment bounds are invalid.
    pub fn without_coordinator(
        story: SegmentGenerator,
        video: VideoRetrier,
        config: OrchestratorConfig,
    ) -> StoryreelResult<Self> {
        config.validate()?;
        info!(
            max_segments = config.max_segments(),
            min_segments = config.min_segments(),
            "Episode orchestrator initialized without coordinator"
        );
        Ok(Self {
            coordinator: None,
            story,
            video,
            config,
            current: None,
        })
    }

    /// Settings in use.
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Whether a coordinator model is attached.
    pub fn has_coordinator(&self) -> bool {
        self.coordinator.is_some()
    }

    /// The video retrier, for cache inspection.
    pub fn video(&self) -> &VideoRetrier {
        &self.video
    }

    /// The most recent episode.
    ///
    /// A run in progress holds its episode locally and stores it here when it
    /// finishes or fails, so callers only ever see a settled episode.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.current.as_ref()
    }

    /// Snapshot of the most recent episode.
    pub fn stats(&self) -> EpisodeStats {
        EpisodeStats::from_episode(self.current.as_ref())
    }

    /// Forget the most recent episode.
    pub fn reset(&mut self) {
        if let Some(episode) = self.current.take() {
            debug!(episode_id = %episode.id, "Episode cleared");
        }
    }

    /// Produce a full episode.
    ///
    /// Any previous episode is replaced. On failure the partial episode stays
    /// available through [`current_episode`](Self::current_episode) with
    /// status `error`.
    ///
    /// # Errors
    ///
    /// Story generation errors and video validation errors abort the run.
    /// Coordinator failures never do.
    #[instrument(
        skip(self, request),
        fields(setting = %request.setting, character = %request.character.name)
    )]
    pub async fn generate_episode(&mut self, request: &EpisodeRequest) -> StoryreelResult<Episode> {
        self.current = None;

        let mut episode = Episode {
            id: format!("episode-{}", Uuid::new_v4()),
            character: request.character.clone(),
            setting: request.setting.clone(),
            themes: request.themes.clone(),
            segments: Vec::new(),
            narrative_arc: None,
            summary: None,
            started_at: Utc::now(),
            completed_at: None,
            status: EpisodeStatus::Generating,
            error: None,
        };
        info!(episode_id = %episode.id, "Episode started");

        match self.run(&mut episode, request).await {
            Ok(()) => {
                episode.status = EpisodeStatus::Completed;
                episode.completed_at = Some(Utc::now());
                info!(
                    episode_id = %episode.id,
                    segments = episode.segments.len(),
                    "Episode completed"
                );
                self.current = Some(episode.clone());
                Ok(episode)
            }
            Err(e) => {
                error!(
                    episode_id = %episode.id,
                    segments = episode.segments.len(),
                    error = %e,
                    "Episode failed"
                );
                episode.status = EpisodeStatus::Error;
                episode.error = Some(e.to_string());
                self.current = Some(episode);
                Err(e)
            }
        }
    }

    async fn run(&mut self, episode: &mut Episode, request: &EpisodeRequest) -> StoryreelResult<()> {
        episode.narrative_arc = Some(self.plan_arc(request).await);

        let opening = self.generate_segment(episode).await?;
        episode.segments.push(opening);

        while episode.segments.len() < *self.config.max_segments() {
            let count = episode.segments.len();
            if !self.should_continue(episode).await && count >= *self.config.min_segments() {
                info!(count, "Pacing ended the episode");
                break;
            }
            let segment = self.generate_segment(episode).await?;
            episode.segments.push(segment);
        }

        episode.summary = Some(self.summarize(episode).await);
        Ok(())
    }

    #[instrument(
        skip(self, episode),
        fields(episode_id = %episode.id, index = episode.segments.len())
    )]
    async fn generate_segment(&mut self, episode: &Episode) -> StoryreelResult<EpisodeSegment> {
        let index = episode.segments.len();
        let previous = episode.segments.last();
        let segment_type = match previous {
            Some(_) => SegmentType::Continuation,
            None => SegmentType::Opening,
        };

        let seed = rand::thread_rng().gen_range(0..SEED_RANGE);
        let context = StoryContext::new(
            episode.setting.clone(),
            episode.character.clone(),
            episode.themes.clone(),
        )
        .with_variation_seed(seed);
        debug!(seed, %segment_type, "Generating story segment");

        let previous_choice = previous.and_then(|segment| segment.story.choices.first());
        let mut story = self.story.generate(&context, previous_choice).await?;

        if *self.config.track_coherence()
            && let Some(previous) = previous
        {
            self.check_coherence(&previous.story, &mut story, episode.narrative_arc.as_ref())
                .await;
        }

        if *self.config.enhance_prompts() {
            let fallback_arc = NarrativeArc::default();
            let arc = episode.narrative_arc.as_ref().unwrap_or(&fallback_arc);
            self.enhance_video_prompt(&mut story, arc, index).await;
        }

        let scene = SceneDescription::new(story.video_prompt.clone())
            .with_narration(story.narration_text.clone())
            .with_instruction(story.video_instruction.clone())
            .with_id(format!("{}-segment-{}", episode.id, index))
            .with_duration(SEGMENT_DURATION_SECONDS);
        let video = self.video.generate_video(&scene).await?;

        Ok(EpisodeSegment {
            index,
            segment_type,
            story,
            video,
            generated_at: Utc::now(),
        })
    }

    async fn plan_arc(&self, request: &EpisodeRequest) -> NarrativeArc {
        let prompt = prompts::arc_prompt(request);
        match self.ask_json::<NarrativeArc>(&prompt, "arc").await {
            Some(arc) => {
                debug!(beats = arc.narrative_beats.len(), "Narrative arc planned");
                arc
            }
            None => NarrativeArc::default(),
        }
    }

    async fn check_coherence(
        &self,
        previous: &StorySegment,
        current: &mut StorySegment,
        arc: Option<&NarrativeArc>,
    ) {
        let prompt =
            prompts::coherence_prompt(&previous.narration_text, &current.narration_text, arc);
        let Some(check) = self.ask_json::<CoherenceCheck>(&prompt, "coherence").await else {
            return;
        };

        if let Some(fix) = check.replacement() {
            warn!(
                issue = check.issue.as_deref().unwrap_or("unspecified"),
                "Narration replaced for continuity"
            );
            current.narration_text = fix.to_string();
        }
    }

    async fn enhance_video_prompt(&self, story: &mut StorySegment, arc: &NarrativeArc, index: usize) {
        let prompt = prompts::enhance_prompt(&story.video_prompt, &story.narration_text, arc, index);
        let Some(answer) = self.ask_text(&prompt, "enhance").await else {
            return;
        };

        match truncate_prompt(&answer) {
            Some(enhanced) => {
                debug!(
                    original_len = story.video_prompt.len(),
                    enhanced_len = enhanced.len(),
                    "Video prompt enhanced"
                );
                story.video_prompt = enhanced;
            }
            None => warn!("Coordinator returned an empty prompt, keeping original"),
        }
    }

    async fn should_continue(&self, episode: &Episode) -> bool {
        let count = episode.segments.len();
        let max = *self.config.max_segments();

        if count < *self.config.min_segments() {
            return true;
        }
        if count >= max.saturating_sub(1) {
            return false;
        }

        let last_narration = episode
            .segments
            .last()
            .map(|segment| segment.story.narration_text.as_str())
            .unwrap_or_default();
        let prompt =
            prompts::pacing_prompt(count, max, last_narration, episode.narrative_arc.as_ref());

        match self.ask_json::<PacingDecision>(&prompt, "pacing").await {
            Some(decision) => {
                debug!(
                    keep_going = decision.keep_going,
                    reason = decision.reason.as_deref().unwrap_or(""),
                    "Pacing decision"
                );
                decision.keep_going
            }
            None => true,
        }
    }

    async fn summarize(&self, episode: &Episode) -> String {
        let prompt = prompts::summary_prompt(episode);
        self.ask_text(&prompt, "summary")
            .await
            .map(|answer| answer.trim().to_string())
            .filter(|summary| !summary.is_empty())
            .unwrap_or_else(|| {
                format!(
                    "An episode featuring {} in {}.",
                    episode.character.name, episode.setting
                )
            })
    }

    async fn ask_text(&self, prompt: &str, step: &'static str) -> Option<String> {
        let Some(coordinator) = &self.coordinator else {
            debug!(step, "No coordinator, using fallback");
            return None;
        };

        match coordinator.generate_text(prompt).await {
            Ok(answer) => Some(answer),
            Err(e) => {
                warn!(step, error = %e, "Coordinator failed, using fallback");
                None
            }
        }
    }

    async fn ask_json<T: DeserializeOwned>(&self, prompt: &str, step: &'static str) -> Option<T> {
        let answer = self.ask_text(prompt, step).await?;
        match extract_json(&answer).and_then(|json| parse_json(&json)) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(step, error = %e, "Coordinator answer unusable, using fallback");
                None
            }
        }
    }
}
