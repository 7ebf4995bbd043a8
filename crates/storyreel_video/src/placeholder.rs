//! The fixed sample clip returned when no real video is available.

use chrono::Utc;
use storyreel_core::VideoResult;

/// Sample clip served in place of a generated video.
pub const PLACEHOLDER_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Error recorded when the placeholder was chosen on purpose.
pub const PLACEHOLDER_ERROR: &str = "Using placeholder video";

/// Build a placeholder result for `prompt`.
///
/// # Examples
///
/// ```
/// use storyreel_video::{PLACEHOLDER_ERROR, placeholder_result};
///
/// let result = placeholder_result("Gas station", None);
/// assert!(result.is_placeholder);
/// assert_eq!(result.duration, 8);
/// assert_eq!(result.error.as_deref(), Some(PLACEHOLDER_ERROR));
/// ```
pub fn placeholder_result(prompt: &str, error: Option<String>) -> VideoResult {
    VideoResult {
        video_url: PLACEHOLDER_VIDEO_URL.to_string(),
        has_audio: true,
        duration: 8,
        prompt: prompt.to_string(),
        is_placeholder: true,
        error: Some(error.unwrap_or_else(|| PLACEHOLDER_ERROR.to_string())),
        generated_at: Utc::now(),
    }
}
