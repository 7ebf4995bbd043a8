//! Retry classification for video capability failures.

/// Whether a failure should stop the retry loop immediately.
///
/// Authorization and quota problems will not improve by trying again.
/// Everything else, including bad requests, is retried because the request
/// shape changes between attempts.
///
/// # Examples
///
/// ```
/// use storyreel_video::is_non_retryable;
///
/// assert!(is_non_retryable("HTTP 429 error: Quota exceeded for project"));
/// assert!(is_non_retryable("403 Forbidden"));
/// assert!(!is_non_retryable("HTTP 500 error: internal"));
/// ```
pub fn is_non_retryable(message: &str) -> bool {
    let message = message.to_lowercase();
    ["unauthorized", "forbidden", "quota", "rate limit"]
        .iter()
        .any(|needle| message.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_case_insensitive() {
        assert!(is_non_retryable("UNAUTHORIZED"));
        assert!(is_non_retryable("Rate Limit reached"));
    }

    #[test]
    fn test_bad_request_is_retried() {
        assert!(!is_non_retryable("HTTP 400 error: invalid argument"));
        assert!(!is_non_retryable("Video URL not found in API response"));
    }
}
