//! Input validation error types.

/// A required input field was absent or blank.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: missing required field '{}' at line {} in {}", field, line, file)]
pub struct ValidationError {
    /// Name of the missing field
    pub field: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError naming the missing field.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyreel_error::ValidationError;
    ///
    /// let err = ValidationError::new("character.name");
    /// assert_eq!(err.field, "character.name");
    /// assert!(err.to_string().contains("character.name"));
    /// ```
    #[track_caller]
    pub fn new(field: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
