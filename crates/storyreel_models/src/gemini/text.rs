//! Gemini text capability.

use super::{GeminiClient, TextRequest, TextResponse};
use async_trait::async_trait;
use storyreel_error::{CapabilityError, CapabilityErrorKind, StoryreelResult};
use storyreel_interface::TextModel;
use tracing::{debug, instrument};

/// Text model backed by Gemini `generateContent`.
#[derive(Debug, Clone)]
pub struct GeminiTextModel {
    client: GeminiClient,
    model: String,
    temperature: Option<f32>,
}

impl GeminiTextModel {
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
            temperature: None,
        }
    }

    /// Send a sampling temperature with every request.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[async_trait]
impl TextModel for GeminiTextModel {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate_text(&self, prompt: &str) -> StoryreelResult<String> {
        let request = TextRequest::user(prompt, self.temperature);
        let response: TextResponse = self.client.generate_content(&self.model, &request).await?;

        let text = response
            .text()
            .ok_or_else(|| CapabilityError::new(CapabilityErrorKind::EmptyResponse))?;
        debug!(response_len = text.len(), "Gemini text received");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
