//! Video capability request/response shapes and the retrier's result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text part of a request turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPart {
    /// Prompt text
    pub text: String,
}

/// One conversational turn sent to the video model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContent {
    /// Always `user` for video prompts
    pub role: String,
    /// Prompt parts
    pub parts: Vec<RequestPart>,
}

/// Sampling parameters, only sent on some attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
}

/// Request handed to the video capability.
///
/// # Examples
///
/// ```
/// use storyreel_core::VideoRequest;
///
/// let request = VideoRequest::minimal("A gas station at night", 8, "16:9");
/// assert_eq!(request.contents[0].role, "user");
/// assert!(request.generation_config.is_none());
///
/// let warmer = request.with_temperature(0.7);
/// assert_eq!(warmer.generation_config.map(|c| c.temperature), Some(0.7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRequest {
    /// Conversation turns
    pub contents: Vec<RequestContent>,
    /// Optional sampling parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    /// Requested clip length in seconds
    pub duration_seconds: u32,
    /// Requested aspect ratio, e.g. `16:9`
    pub aspect_ratio: String,
}

impl VideoRequest {
    /// A single user turn carrying `prompt`, no sampling parameters.
    pub fn minimal(prompt: impl Into<String>, duration_seconds: u32, aspect_ratio: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.into(),
                }],
            }],
            generation_config: None,
            duration_seconds,
            aspect_ratio: aspect_ratio.into(),
        }
    }

    /// Attach a sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.generation_config = Some(GenerationConfig { temperature });
        self
    }

    /// Text of the first part of the first turn.
    pub fn prompt(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
    }
}

/// Inline video reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoData {
    /// Video location
    #[serde(default)]
    pub uri: Option<String>,
}

/// Uploaded file reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    /// File location
    #[serde(default)]
    pub file_uri: Option<String>,
}

/// One part of a candidate answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    /// Inline video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_data: Option<VideoData>,
    /// Uploaded file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
    /// Plain text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Content of a candidate answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateContent {
    /// Ordered parts
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A candidate answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate content, absent when the model was blocked
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Raw video capability answer.
///
/// # Examples
///
/// ```
/// use storyreel_core::VideoResponse;
///
/// let raw = r#"{"candidates":[{"content":{"parts":[{"fileData":{"fileUri":"gs://clip.mp4"}}]}}]}"#;
/// let response: VideoResponse = serde_json::from_str(raw).unwrap();
/// let part = &response.candidates[0].content.as_ref().unwrap().parts[0];
/// assert_eq!(part.file_data.as_ref().unwrap().file_uri.as_deref(), Some("gs://clip.mp4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoResponse {
    /// Candidate answers
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Outcome of a video generation, real or placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    /// Where the clip can be fetched
    pub video_url: String,
    /// Whether the clip carries an audio track
    pub has_audio: bool,
    /// Clip length in seconds
    pub duration: u32,
    /// Optimized prompt that was sent
    pub prompt: String,
    /// True when the URL is the fixed sample clip
    pub is_placeholder: bool,
    /// Last error message for placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Creation time
    pub generated_at: DateTime<Utc>,
}
