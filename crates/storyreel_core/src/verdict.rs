//! Content filter verdicts.

use serde::{Deserialize, Serialize};

/// Outcome of a content filter check.
///
/// # Examples
///
/// ```
/// use storyreel_core::ContentVerdict;
///
/// assert!(ContentVerdict::pass().passed);
/// let rejected = ContentVerdict::reject("too many special characters");
/// assert!(!rejected.passed);
/// assert_eq!(rejected.reason.as_deref(), Some("too many special characters"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentVerdict {
    /// Whether the text may be used
    pub passed: bool,
    /// Why it was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ContentVerdict {
    /// The text is acceptable.
    pub fn pass() -> Self {
        Self {
            passed: true,
            reason: None,
        }
    }

    /// The text is rejected for `reason`.
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: Some(reason.into()),
        }
    }
}
