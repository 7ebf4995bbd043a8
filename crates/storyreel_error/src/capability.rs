//! Errors raised by the external text and video capabilities.

/// Capability-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CapabilityErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Request could not be sent or its body could not be read
    #[display("Request failed: {}", _0)]
    Request(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// The model answered without any usable content
    #[display("Model returned an empty response")]
    EmptyResponse,
    /// The video model answered but no URL could be found
    #[display("Video URL not found in API response")]
    MissingVideoUrl,
}

/// Capability error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{CapabilityError, CapabilityErrorKind};
///
/// let err = CapabilityError::new(CapabilityErrorKind::Http {
///     status_code: 429,
///     message: "Quota exceeded".to_string(),
/// });
/// assert!(err.to_string().contains("HTTP 429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Capability Error: {} at line {} in {}", kind, line, file)]
pub struct CapabilityError {
    /// The kind of error that occurred
    pub kind: CapabilityErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CapabilityError {
    /// Create a new CapabilityError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CapabilityErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
