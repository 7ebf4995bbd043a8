//! Google Gemini over REST.

mod dto;
mod text;
mod video;

pub use dto::{
    TextCandidate, TextContent, TextPart, TextRequest, TextResponse, VideoContentRequest,
};
pub use text::GeminiTextModel;
pub use video::GeminiVideoModel;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use storyreel_error::{
    CapabilityError, CapabilityErrorKind, ParseError, ParseErrorKind, StoryreelResult,
};
use tracing::{debug, error, instrument};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Gemini REST root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shared HTTP plumbing for the Gemini models.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client with the key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// `MissingApiKey` when the variable is unset or blank.
    pub fn from_env() -> StoryreelResult<Self> {
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        Self::with_api_key(api_key)
    }

    /// Create a client with an explicit key.
    ///
    /// # Errors
    ///
    /// `MissingApiKey` when the key is blank.
    pub fn with_api_key(api_key: impl Into<String>) -> StoryreelResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CapabilityError::new(CapabilityErrorKind::MissingApiKey).into());
        }
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another REST root, e.g. a local proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// REST root in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// POST a `generateContent` call for `model`.
    ///
    /// Transport failures become `Request`, non-success statuses become
    /// `Http` carrying the response body, and undecodable bodies become
    /// `InvalidJson`.
    #[instrument(skip(self, body), fields(model = %model))]
    pub async fn generate_content<Req, Resp>(&self, model: &str, body: &Req) -> StoryreelResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = self.endpoint(model);
        debug!(url = %url, "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                CapabilityError::new(CapabilityErrorKind::Request(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "Gemini API returned error");
            return Err(CapabilityError::new(CapabilityErrorKind::Http {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        response.json::<Resp>().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            ParseError::new(ParseErrorKind::InvalidJson(e.to_string())).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_error::StoryreelErrorKind;

    #[test]
    fn blank_key_is_rejected() {
        let err = GeminiClient::with_api_key("  ").unwrap_err();
        match err.kind() {
            StoryreelErrorKind::Capability(e) => {
                assert_eq!(e.kind, CapabilityErrorKind::MissingApiKey)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn endpoint_shape() {
        let client = GeminiClient::with_api_key("key")
            .unwrap()
            .with_base_url("http://localhost:8080/v1beta/");
        assert_eq!(
            client.endpoint("veo-3.1"),
            "http://localhost:8080/v1beta/models/veo-3.1:generateContent"
        );
    }
}
