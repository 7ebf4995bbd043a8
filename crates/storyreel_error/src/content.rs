//! Content policy error types.

/// Input was rejected by the content filter.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Content Policy Error: {} at line {} in {}", reason, line, file)]
pub struct ContentPolicyError {
    /// Reason reported by the filter
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ContentPolicyError {
    /// Create a new ContentPolicyError carrying the filter's reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyreel_error::ContentPolicyError;
    ///
    /// let err = ContentPolicyError::new("Content contains inappropriate or explicit material");
    /// assert!(err.reason.contains("inappropriate"));
    /// ```
    #[track_caller]
    pub fn new(reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
