//! Model response parsing error types.

/// Specific error conditions when reading structured data out of model text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ParseErrorKind {
    /// No JSON object could be located in the response
    #[display("No JSON object found in response")]
    NoJson,
    /// A JSON object was located but could not be decoded
    #[display("Invalid JSON: {}", _0)]
    InvalidJson(String),
}

/// Parse error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(ParseErrorKind::NoJson);
/// assert!(err.to_string().contains("No JSON object"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", kind, line, file)]
pub struct ParseError {
    /// The kind of error that occurred
    pub kind: ParseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
