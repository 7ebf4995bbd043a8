//! Wire shapes for `generateContent` calls.

use serde::{Deserialize, Serialize};
use storyreel_core::{GenerationConfig, RequestContent, RequestPart, VideoRequest};

/// Text generation request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRequest {
    /// Conversation turns
    pub contents: Vec<RequestContent>,
    /// Sampling parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl TextRequest {
    /// A single user turn.
    pub fn user(prompt: &str, temperature: Option<f32>) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: temperature.map(|temperature| GenerationConfig { temperature }),
        }
    }
}

/// Video generation request body.
///
/// `generateContent` only accepts `contents` and `generationConfig` at the top
/// level, so clip length and aspect ratio stay out of the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentRequest {
    /// Conversation turns
    pub contents: Vec<RequestContent>,
    /// Sampling parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl From<&VideoRequest> for VideoContentRequest {
    fn from(request: &VideoRequest) -> Self {
        Self {
            contents: request.contents.clone(),
            generation_config: request.generation_config.clone(),
        }
    }
}

/// Text generation response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextResponse {
    /// Alternatives, the first one is used
    #[serde(default)]
    pub candidates: Vec<TextCandidate>,
}

/// One alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextCandidate {
    /// Generated content, absent when blocked
    #[serde(default)]
    pub content: Option<TextContent>,
}

/// Parts of a generated turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextContent {
    /// Ordered parts
    #[serde(default)]
    pub parts: Vec<TextPart>,
}

/// A generated part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextPart {
    /// Text, absent for non-text parts
    #[serde(default)]
    pub text: Option<String>,
}

impl TextResponse {
    /// Concatenated text of the first candidate, `None` when empty.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = TextRequest::user("hello", Some(0.7));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert!(json["generationConfig"]["temperature"].is_number());

        let bare = serde_json::to_value(TextRequest::user("hi", None)).unwrap();
        assert!(bare.get("generationConfig").is_none());
    }

    #[test]
    fn video_request_keeps_only_accepted_fields() {
        let request = VideoRequest::minimal("A gas station at night", 8, "16:9").with_temperature(0.7);
        let json = serde_json::to_value(VideoContentRequest::from(&request)).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "A gas station at night");
        assert!(json["generationConfig"]["temperature"].is_number());
        assert!(json.get("durationSeconds").is_none());
        assert!(json.get("aspectRatio").is_none());

        let minimal = VideoRequest::minimal("A gas station", 8, "16:9");
        let json = serde_json::to_value(VideoContentRequest::from(&minimal)).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["contents".to_string()]);
    }

    #[test]
    fn response_joins_parts() {
        let response: TextResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "Once "}, {"text": "upon"}]}, "finishReason": "STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Once upon"));
    }

    #[test]
    fn blocked_or_empty_response_has_no_text() {
        let blocked: TextResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert_eq!(blocked.text(), None);

        let empty: TextResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), None);
    }
}
