//! Provider integrations for storyreel.
//!
//! Each provider lives behind its own feature flag. Gemini is enabled by
//! default and talks to the REST `generateContent` endpoint.
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use storyreel_interface::TextModel;
//! use storyreel_models::GeminiTextModel;
//!
//! # #[tokio::main]
//! # async fn main() -> storyreel_error::StoryreelResult<()> {
//! let model = GeminiTextModel::new("gemini-2.0-flash")?;
//! let answer = model.generate_text("Describe a gas station at night").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    API_KEY_VAR, DEFAULT_BASE_URL, GeminiClient, GeminiTextModel, GeminiVideoModel, TextCandidate,
    TextContent, TextPart, TextRequest, TextResponse, VideoContentRequest,
};
