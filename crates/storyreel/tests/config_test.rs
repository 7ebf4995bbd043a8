//! Configuration layering tests.

use storyreel::{StoryreelConfig, StoryreelErrorKind};

#[test]
fn test_bundled_defaults() {
    let config = StoryreelConfig::from_toml("").unwrap();

    assert_eq!(config.models().text(), "gemini-2.0-flash-exp");
    assert_eq!(config.models().video(), "veo-003");
    assert_eq!(config.models().coordinator(), "gemini-1.5-pro");
    assert_eq!(*config.video().max_retries(), 3);
    assert_eq!(*config.video().retry_delay_ms(), 1000);
    assert_eq!(config.video().aspect_ratio(), "16:9");
    assert_eq!(*config.episode().max_segments(), 7);
    assert_eq!(*config.episode().min_segments(), 3);
    assert!(*config.episode().enhance_prompts());
    assert!(*config.cache().enabled());
    assert!(*config.filter().enabled());
    assert_eq!(config.story().narration_length(), "100-150 words");
}

#[test]
fn test_overrides_merge_with_defaults() {
    let config = StoryreelConfig::from_toml(
        r#"
[models]
video = "veo-3.1"

[episode]
max_segments = 4
track_coherence = false

[filter]
max_special_ratio = 0.5
"#,
    )
    .unwrap();

    assert_eq!(config.models().video(), "veo-3.1");
    assert_eq!(config.models().text(), "gemini-2.0-flash-exp");
    assert_eq!(*config.episode().max_segments(), 4);
    assert_eq!(*config.episode().min_segments(), 3);
    assert!(!*config.episode().track_coherence());
    assert_eq!(config.filter().keywords().max_special_ratio, 0.5);
    assert!(!config.filter().keywords().blocked_keywords.is_empty());
}

#[test]
fn test_inverted_bounds_rejected() {
    let err = StoryreelConfig::from_toml("[episode]\nmin_segments = 9\n").unwrap_err();
    assert!(matches!(err.kind(), StoryreelErrorKind::Config(_)));
}

#[test]
fn test_malformed_toml_rejected() {
    let err = StoryreelConfig::from_toml("[episode\nmax_segments = ").unwrap_err();
    assert!(matches!(err.kind(), StoryreelErrorKind::Config(_)));
}

#[test]
fn test_missing_file_rejected() {
    let err = StoryreelConfig::from_file("/nonexistent/storyreel.toml").unwrap_err();
    assert!(matches!(err.kind(), StoryreelErrorKind::Config(_)));
}
