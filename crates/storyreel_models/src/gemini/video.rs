//! Gemini video capability.

use super::{GeminiClient, VideoContentRequest};
use async_trait::async_trait;
use storyreel_core::{VideoRequest, VideoResponse};
use storyreel_error::StoryreelResult;
use storyreel_interface::VideoModel;
use tracing::{debug, instrument};

/// Video model backed by Gemini `generateContent` on a Veo model.
///
/// The response is returned as is; locating the clip URL is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct GeminiVideoModel {
    client: GeminiClient,
    model: String,
}

impl GeminiVideoModel {
    /// Create a model using `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// `MissingApiKey` when the variable is unset.
    pub fn new(model: impl Into<String>) -> StoryreelResult<Self> {
        Ok(Self::with_client(GeminiClient::from_env()?, model))
    }

    /// Create a model over an existing client.
    pub fn with_client(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl VideoModel for GeminiVideoModel {
    #[instrument(
        skip(self, request),
        fields(model = %self.model, duration = request.duration_seconds)
    )]
    async fn generate_video(&self, request: &VideoRequest) -> StoryreelResult<VideoResponse> {
        debug!(
            aspect_ratio = %request.aspect_ratio,
            "Omitting clip shape from request body"
        );
        let body = VideoContentRequest::from(request);
        let response: VideoResponse = self.client.generate_content(&self.model, &body).await?;
        debug!(candidates = response.candidates.len(), "Gemini video response received");
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
