//! End-to-end runs of the offline pipeline assembled from configuration.

use storyreel::{
    Character, EpisodeRequest, EpisodeStatus, SceneDescription, StoryContext, StoryreelConfig,
    StoryreelErrorKind, episode_orchestrator, segment_generator, video_retrier,
};

fn request(setting: &str) -> EpisodeRequest {
    EpisodeRequest {
        character: Character::new("Morgan", "male", "night shift worker"),
        setting: setting.to_string(),
        themes: vec!["Mystery".to_string()],
    }
}

#[tokio::test]
async fn test_offline_episode() {
    let config = StoryreelConfig::from_toml("").unwrap();
    let mut orchestrator = episode_orchestrator(&config, true).unwrap();

    let episode = orchestrator.generate_episode(&request("Gas station")).await.unwrap();

    assert_eq!(episode.status, EpisodeStatus::Completed);
    assert!(episode.segments.len() >= 3);
    assert!(episode.segments.len() <= 7);
    for segment in &episode.segments {
        assert_eq!(segment.story.choices.len(), 4);
        assert!(segment.video.is_placeholder);
    }
    assert_eq!(
        episode.summary.as_deref(),
        Some("An episode featuring Morgan in Gas station.")
    );
}

#[tokio::test]
async fn test_filter_rejects_explicit_setting() {
    let config = StoryreelConfig::from_toml("").unwrap();
    let mut orchestrator = episode_orchestrator(&config, true).unwrap();

    let err = orchestrator
        .generate_episode(&request("nsfw club"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), StoryreelErrorKind::ContentPolicy(_)));
    let episode = orchestrator.current_episode().unwrap();
    assert_eq!(episode.status, EpisodeStatus::Error);
    assert!(
        episode
            .error
            .as_deref()
            .unwrap()
            .contains("Setting failed content filter")
    );
}

#[tokio::test]
async fn test_filter_can_be_disabled() {
    let config = StoryreelConfig::from_toml("[filter]\nenabled = false\n").unwrap();
    let generator = segment_generator(&config, true).unwrap();
    let context = StoryContext::new(
        "nsfw club",
        Character::new("Morgan", "male", "night shift worker"),
        vec![],
    );

    let segment = generator.generate(&context, None).await.unwrap();

    assert_eq!(segment.explicit_setting, "nsfw club");
}

#[tokio::test]
async fn test_offline_video_is_cached() {
    let config = StoryreelConfig::from_toml("").unwrap();
    let mut retrier = video_retrier(&config, true).unwrap();
    let scene = SceneDescription::new("Gas station at night").with_id("scene-1");

    let first = retrier.generate_video(&scene).await.unwrap();
    let second = retrier.generate_video(&scene).await.unwrap();

    assert!(first.is_placeholder);
    assert_eq!(first, second);
    assert_eq!(retrier.cache_stats().entries, vec!["scene-1".to_string()]);
}

#[tokio::test]
async fn test_disabled_cache() {
    let config = StoryreelConfig::from_toml("[cache]\nenabled = false\n").unwrap();
    let mut retrier = video_retrier(&config, true).unwrap();
    let scene = SceneDescription::new("Gas station at night").with_id("scene-1");

    retrier.generate_video(&scene).await.unwrap();

    assert_eq!(retrier.cache_stats().size, 0);
}
