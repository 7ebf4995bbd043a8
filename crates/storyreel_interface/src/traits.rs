//! Trait definitions for text, video and content filter capabilities.

use async_trait::async_trait;
use storyreel_core::{ContentVerdict, VideoRequest, VideoResponse};
use storyreel_error::StoryreelResult;
use std::sync::Arc;

/// A model that turns a prompt into text.
///
/// Used both for story segments and for the episode coordinator.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use storyreel_error::StoryreelResult;
/// use storyreel_interface::TextModel;
///
/// struct Echo;
///
/// #[async_trait]
/// impl TextModel for Echo {
///     async fn generate_text(&self, prompt: &str) -> StoryreelResult<String> {
///         Ok(prompt.to_string())
///     }
///     fn provider_name(&self) -> &'static str { "echo" }
///     fn model_name(&self) -> &str { "echo-1" }
/// }
///
/// # #[tokio::main]
/// # async fn main() {
/// let text = Echo.generate_text("hello").await.unwrap();
/// assert_eq!(text, "hello");
/// # }
/// ```
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generate text for a single-turn prompt.
    async fn generate_text(&self, prompt: &str) -> StoryreelResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}

/// A model that renders a prompt into a video clip.
#[async_trait]
pub trait VideoModel: Send + Sync {
    /// Submit one generation request.
    async fn generate_video(&self, request: &VideoRequest) -> StoryreelResult<VideoResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "veo-3.1-generate-preview").
    fn model_name(&self) -> &str;
}

/// Synchronous screen for user-supplied text.
///
/// Any `Fn(&str) -> ContentVerdict` is a filter:
///
/// ```
/// use storyreel_core::ContentVerdict;
/// use storyreel_interface::ContentFilter;
///
/// let no_caps = |text: &str| {
///     if text.chars().any(|c| c.is_uppercase()) {
///         ContentVerdict::reject("no shouting")
///     } else {
///         ContentVerdict::pass()
///     }
/// };
///
/// assert!(no_caps.evaluate("quiet").passed);
/// assert!(!no_caps.evaluate("LOUD").passed);
/// ```
pub trait ContentFilter: Send + Sync {
    /// Judge a piece of text.
    fn evaluate(&self, text: &str) -> ContentVerdict;
}

impl<F> ContentFilter for F
where
    F: Fn(&str) -> ContentVerdict + Send + Sync,
{
    fn evaluate(&self, text: &str) -> ContentVerdict {
        self(text)
    }
}

#[async_trait]
impl<T: TextModel + ?Sized> TextModel for Arc<T> {
    async fn generate_text(&self, prompt: &str) -> StoryreelResult<String> {
        (**self).generate_text(prompt).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: VideoModel + ?Sized> VideoModel for Arc<T> {
    async fn generate_video(&self, request: &VideoRequest) -> StoryreelResult<VideoResponse> {
        (**self).generate_video(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
