//! Keyword and symbol-density content filter.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use storyreel_core::ContentVerdict;
use storyreel_error::{ConfigError, StoryreelResult};
use storyreel_interface::ContentFilter;
use tracing::{debug, instrument};

const EXPLICIT_REASON: &str = "Content contains inappropriate or explicit material";
const SPECIAL_CHARS_REASON: &str = "Content contains too many special characters";

const DEFAULT_BLOCKED_KEYWORDS: &[&str] = &[
    "sex",
    "sexual",
    "porn",
    "xxx",
    "nude",
    "naked",
    "erotic",
    "nsfw",
    "18+",
    "explicit",
    "adult content",
    "intercourse",
    "masturbat",
    "orgasm",
    "penis",
    "vagina",
    "genitals",
    "breast",
    "strip",
    "prostitut",
    "rape",
    "molest",
    "pedophil",
    "incest",
];

/// Keyword filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordFilterConfig {
    /// Substrings that reject the text, matched case-insensitively
    #[serde(default = "default_blocked_keywords")]
    pub blocked_keywords: Vec<String>,

    /// Largest tolerated share of special characters
    #[serde(default = "default_max_special_ratio")]
    pub max_special_ratio: f64,
}

fn default_blocked_keywords() -> Vec<String> {
    DEFAULT_BLOCKED_KEYWORDS
        .iter()
        .map(|keyword| keyword.to_string())
        .collect()
}

fn default_max_special_ratio() -> f64 {
    0.3
}

impl Default for KeywordFilterConfig {
    fn default() -> Self {
        Self {
            blocked_keywords: default_blocked_keywords(),
            max_special_ratio: default_max_special_ratio(),
        }
    }
}

/// Content filter for story inputs.
///
/// # Examples
///
/// ```
/// use storyreel_interface::ContentFilter;
/// use storyreel_security::KeywordContentFilter;
///
/// let filter = KeywordContentFilter::with_defaults().unwrap();
/// assert!(filter.evaluate("A quiet coffee shop").passed);
/// assert!(!filter.evaluate("#### $$$$ @@@@").passed);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordContentFilter {
    config: KeywordFilterConfig,
    keyword_regex: Option<Regex>,
    special_regex: Regex,
}

impl KeywordContentFilter {
    /// Create a filter from configuration.
    pub fn new(config: KeywordFilterConfig) -> StoryreelResult<Self> {
        if !(0.0..=1.0).contains(&config.max_special_ratio) {
            return Err(ConfigError::new(format!(
                "max_special_ratio must be between 0 and 1 (got {})",
                config.max_special_ratio
            ))
            .into());
        }

        let keyword_regex = if config.blocked_keywords.is_empty() {
            None
        } else {
            let alternation = config
                .blocked_keywords
                .iter()
                .map(|keyword| regex::escape(keyword))
                .collect::<Vec<_>>()
                .join("|");
            let regex = RegexBuilder::new(&alternation)
                .case_insensitive(true)
                .build()
                .map_err(|e| ConfigError::new(format!("Invalid blocked keyword list: {}", e)))?;
            Some(regex)
        };

        let special_regex = Regex::new(r"[^a-zA-Z0-9\s.,!?'-]")
            .map_err(|e| ConfigError::new(format!("Invalid special character pattern: {}", e)))?;

        Ok(Self {
            config,
            keyword_regex,
            special_regex,
        })
    }

    /// Create a filter with the built-in keyword list.
    pub fn with_defaults() -> StoryreelResult<Self> {
        Self::new(KeywordFilterConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &KeywordFilterConfig {
        &self.config
    }
}

impl ContentFilter for KeywordContentFilter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    fn evaluate(&self, text: &str) -> ContentVerdict {
        if let Some(keyword) = self
            .keyword_regex
            .as_ref()
            .and_then(|regex| regex.find(text))
        {
            debug!(keyword = keyword.as_str(), "Text contains blocked keyword");
            return ContentVerdict::reject(EXPLICIT_REASON);
        }

        let total = text.chars().count();
        if total > 0 {
            let special = self.special_regex.find_iter(text).count();
            let ratio = special as f64 / total as f64;
            if ratio > self.config.max_special_ratio {
                debug!(special, total, "Text is dominated by special characters");
                return ContentVerdict::reject(SPECIAL_CHARS_REASON);
            }
        }

        debug!("Text passed content filter");
        ContentVerdict::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> KeywordContentFilter {
        KeywordContentFilter::with_defaults().unwrap()
    }

    #[test]
    fn test_plain_text_passes() {
        let verdict = filter().evaluate("Morgan works the night shift at a gas station.");
        assert!(verdict.passed);
        assert!(verdict.reason.is_none());
    }

    #[test]
    fn test_blocked_keyword_any_case() {
        let verdict = filter().evaluate("A NUDE beach");
        assert!(!verdict.passed);
        assert_eq!(verdict.reason.as_deref(), Some(EXPLICIT_REASON));
    }

    #[test]
    fn test_keyword_matches_inside_words() {
        assert!(!filter().evaluate("Striped wallpaper").passed);
    }

    #[test]
    fn test_special_character_ratio() {
        let verdict = filter().evaluate("a$$$");
        assert!(!verdict.passed);
        assert_eq!(verdict.reason.as_deref(), Some(SPECIAL_CHARS_REASON));

        // punctuation from the allowed set does not count
        assert!(filter().evaluate("Wait... what?! Don't-go!").passed);
    }

    #[test]
    fn test_empty_text_passes() {
        assert!(filter().evaluate("").passed);
    }

    #[test]
    fn test_custom_keywords() {
        let config = KeywordFilterConfig {
            blocked_keywords: vec!["clown".to_string()],
            ..Default::default()
        };
        let filter = KeywordContentFilter::new(config).unwrap();
        assert!(!filter.evaluate("Evil Clown circus").passed);
        assert!(filter.evaluate("Naked ambition").passed);
    }

    #[test]
    fn test_invalid_ratio_is_config_error() {
        let config = KeywordFilterConfig {
            max_special_ratio: 1.5,
            ..Default::default()
        };
        assert!(KeywordContentFilter::new(config).is_err());
    }
}
