//! Video generation with bounded retry and placeholder fallback.

use crate::{
    VideoConfig, extract_video_url, is_non_retryable, optimize_prompt, placeholder_result,
};
use chrono::Utc;
use std::time::Duration;
use storyreel_cache::{CacheStats, SceneCache};
use storyreel_core::{SceneDescription, VideoRequest, VideoResult};
use storyreel_error::{
    CapabilityError, CapabilityErrorKind, StoryreelError, StoryreelErrorKind, StoryreelResult,
    ValidationError,
};
use storyreel_interface::VideoModel;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, error, info, warn};

/// Request shape for a given attempt.
///
/// Attempt 1 carries the configured temperature. Every other attempt sends
/// only the prompt.
///
/// # Examples
///
/// ```
/// use storyreel_video::{VideoConfig, request_for_attempt};
///
/// let config = VideoConfig::default();
/// assert!(request_for_attempt("p", 0, 8, &config).generation_config.is_none());
/// assert!(request_for_attempt("p", 1, 8, &config).generation_config.is_some());
/// assert!(request_for_attempt("p", 2, 8, &config).generation_config.is_none());
/// assert!(request_for_attempt("p", 7, 8, &config).generation_config.is_none());
/// ```
pub fn request_for_attempt(
    prompt: &str,
    attempt: usize,
    duration: u32,
    config: &VideoConfig,
) -> VideoRequest {
    let request = VideoRequest::minimal(prompt, duration, config.aspect_ratio().as_str());
    match attempt {
        1 => request.with_temperature(*config.temperature()),
        _ => request,
    }
}

/// Message used for classification and for the placeholder's error field.
fn failure_message(err: &StoryreelError) -> String {
    match err.kind() {
        StoryreelErrorKind::Capability(e) => e.kind.to_string(),
        other => other.to_string(),
    }
}

/// Wraps a video capability with retry, fallback and caching.
///
/// # Examples
///
/// ```
/// use storyreel_core::SceneDescription;
/// use storyreel_video::{PLACEHOLDER_VIDEO_URL, VideoRetrier};
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut retrier = VideoRetrier::placeholder();
/// let scene = SceneDescription::new("Gas station at night").with_id("scene-1");
///
/// let result = retrier.generate_video(&scene).await.unwrap();
/// assert_eq!(result.video_url, PLACEHOLDER_VIDEO_URL);
/// assert!(retrier.cached_video("scene-1").is_some());
/// # }
/// ```
pub struct VideoRetrier {
    video_model: Option<Box<dyn VideoModel>>,
    config: VideoConfig,
    cache: SceneCache,
}

impl VideoRetrier {
    /// Create a retrier backed by a video model.
    pub fn new(video_model: Box<dyn VideoModel>, config: VideoConfig) -> Self {
        info!(
            provider = video_model.provider_name(),
            model = video_model.model_name(),
            duration = config.default_duration(),
            max_retries = config.max_retries(),
            "VideoRetrier initialized"
        );
        Self {
            video_model: Some(video_model),
            config,
            cache: SceneCache::default(),
        }
    }

    /// Create a retrier that only ever returns the placeholder clip.
    pub fn placeholder() -> Self {
        Self::placeholder_with_config(VideoConfig::default())
    }

    /// Placeholder retrier with explicit configuration.
    pub fn placeholder_with_config(config: VideoConfig) -> Self {
        info!("VideoRetrier initialized in placeholder mode");
        Self {
            video_model: None,
            config,
            cache: SceneCache::default(),
        }
    }

    /// Replace the scene cache.
    pub fn with_cache(mut self, cache: SceneCache) -> Self {
        self.cache = cache;
        self
    }

    /// Whether every call returns the placeholder.
    pub fn is_placeholder_mode(&self) -> bool {
        self.video_model.is_none()
    }

    /// Get the configuration.
    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    /// Produce a clip for a scene.
    ///
    /// A cached result for the scene id is returned as is. Otherwise the
    /// prompt is optimized and sent with bounded retries; when every attempt
    /// fails, or a failure is not worth retrying, the placeholder is
    /// returned. The result is cached under the scene id.
    ///
    /// # Errors
    ///
    /// Only [`ValidationError`] when `video_prompt` is blank.
    #[tracing::instrument(
        skip(self, scene),
        fields(
            scene_id = scene.id.as_deref().unwrap_or("n/a"),
            prompt_len = scene.video_prompt.len()
        )
    )]
    pub async fn generate_video(&mut self, scene: &SceneDescription) -> StoryreelResult<VideoResult> {
        if scene.video_prompt.trim().is_empty() {
            return Err(ValidationError::new("video_prompt").into());
        }

        if let Some(id) = scene.id.as_deref()
            && let Some(cached) = self.cache.get(id)
        {
            info!("Returning cached video");
            return Ok(cached.clone());
        }

        let prompt = optimize_prompt(scene);
        debug!(optimized_len = prompt.len(), "Optimized prompt");

        let duration = scene.duration.unwrap_or(*self.config.default_duration());
        let result = self.generate_with_retry(&prompt, duration).await;

        if let Some(id) = scene.id.as_deref() {
            self.cache.insert(id, result.clone());
        }

        Ok(result)
    }

    async fn generate_with_retry(&self, prompt: &str, duration: u32) -> VideoResult {
        let Some(model) = self.video_model.as_deref() else {
            debug!("Placeholder mode, skipping video model");
            return placeholder_result(prompt, None);
        };

        let config = &self.config;
        let base_delay = *config.retry_delay_ms();
        let strategy = (0..*config.max_retries())
            .map(move |k| Duration::from_millis(base_delay.saturating_mul(1u64 << k.min(32))));

        let mut attempt = 0usize;
        let outcome = Retry::spawn(strategy, || {
            let current = attempt;
            attempt += 1;
            let request = request_for_attempt(prompt, current, duration, config);
            async move {
                debug!(attempt = current + 1, "Calling video model");
                let response = model.generate_video(&request).await;
                match response.and_then(|response| {
                    extract_video_url(&response).ok_or_else(|| {
                        CapabilityError::new(CapabilityErrorKind::MissingVideoUrl).into()
                    })
                }) {
                    Ok(url) => Ok(url),
                    Err(e) => {
                        let message = failure_message(&e);
                        if is_non_retryable(&message) {
                            warn!(attempt = current + 1, error = %message, "Non-retryable video error, stopping");
                            Err(RetryError::Permanent(e))
                        } else {
                            warn!(attempt = current + 1, error = %message, "Video attempt failed");
                            Err(RetryError::Transient {
                                err: e,
                                retry_after: None,
                            })
                        }
                    }
                }
            }
        })
        .await;

        match outcome {
            Ok(video_url) => {
                info!(attempts = attempt, "Video generated");
                VideoResult {
                    video_url,
                    has_audio: true,
                    duration,
                    prompt: prompt.to_string(),
                    is_placeholder: false,
                    error: None,
                    generated_at: Utc::now(),
                }
            }
            Err(e) => {
                let message = failure_message(&e);
                error!(attempts = attempt, error = %message, "Video generation failed, using placeholder");
                placeholder_result(prompt, Some(message))
            }
        }
    }

    /// Cached result for a scene id.
    pub fn cached_video(&self, scene_id: &str) -> Option<&VideoResult> {
        self.cache.get(scene_id)
    }

    /// Drop every cached result.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Size and ids of the cached scenes.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
