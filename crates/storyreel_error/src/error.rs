//! Top-level error wrapper types.

use crate::{CapabilityError, ConfigError, ContentPolicyError, ParseError, ValidationError};

/// Every error the storyreel crates can surface.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelError, StoryreelErrorKind, ValidationError};
///
/// let err: StoryreelError = ValidationError::new("setting").into();
/// assert!(matches!(err.kind(), StoryreelErrorKind::Validation(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryreelErrorKind {
    /// Missing or blank input field
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Input rejected by the content filter
    #[from(ContentPolicyError)]
    ContentPolicy(ContentPolicyError),
    /// Model text could not be parsed
    #[from(ParseError)]
    Parse(ParseError),
    /// Text or video capability failure
    #[from(CapabilityError)]
    Capability(CapabilityError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Storyreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyreel_error::{ConfigError, StoryreelResult};
///
/// fn might_fail() -> StoryreelResult<()> {
///     Err(ConfigError::new("max_segments must be at least 1"))?
/// }
///
/// assert!(might_fail().unwrap_err().to_string().contains("max_segments"));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyreel Error: {}", _0)]
pub struct StoryreelError(Box<StoryreelErrorKind>);

impl StoryreelError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryreelErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryreelErrorKind
impl<T> From<T> for StoryreelError
where
    T: Into<StoryreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyreel operations.
pub type StoryreelResult<T> = std::result::Result<T, StoryreelError>;
