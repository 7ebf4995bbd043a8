//! JSON shape tests for the core data model.

use chrono::Utc;
use serde_json::json;
use storyreel_core::{
    Character, Choice, Episode, EpisodeSegment, EpisodeStats, EpisodeStatus, NarrativeArc,
    SegmentType, StorySegment, VideoResponse, VideoResult,
};

fn sample_segment() -> StorySegment {
    StorySegment {
        id: "opening".to_string(),
        video_prompt: "Gas station at midnight".to_string(),
        narration_text: "Morgan hears a noise.".to_string(),
        explicit_setting: "Gas station".to_string(),
        themes: vec!["Mystery".to_string()],
        choices: vec![
            Choice::new("Look", "Mystery"),
            Choice::new("Run", "action"),
            Choice::new("Shout", "drama"),
            Choice::new("Wait", "random"),
        ],
        video_instruction: "MUST SHOW: Gas station".to_string(),
        setting: "Gas station".to_string(),
        character: Character::new("Morgan", "male", "night shift worker"),
    }
}

fn sample_video() -> VideoResult {
    VideoResult {
        video_url: "https://example.com/clip.mp4".to_string(),
        has_audio: true,
        duration: 8,
        prompt: "Gas station at midnight".to_string(),
        is_placeholder: false,
        error: None,
        generated_at: Utc::now(),
    }
}

#[test]
fn test_story_segment_uses_camel_case() {
    let value = serde_json::to_value(sample_segment()).unwrap();
    assert!(value.get("videoPrompt").is_some());
    assert!(value.get("narrationText").is_some());
    assert!(value.get("explicitSetting").is_some());
    assert!(value.get("videoInstruction").is_some());
    assert_eq!(value["choices"].as_array().unwrap().len(), 4);
}

#[test]
fn test_episode_segment_type_field() {
    let segment = EpisodeSegment {
        index: 0,
        segment_type: SegmentType::Opening,
        story: sample_segment(),
        video: sample_video(),
        generated_at: Utc::now(),
    };
    let value = serde_json::to_value(&segment).unwrap();
    assert_eq!(value["type"], json!("opening"));
    assert_eq!(value["video"]["isPlaceholder"], json!(false));
    assert_eq!(SegmentType::Continuation.to_string(), "continuation");
}

#[test]
fn test_narrative_arc_parses_coordinator_shape() {
    let raw = json!({
        "setup": "Morgan starts a shift",
        "risingAction": "Strange customers arrive",
        "climax": "The lights fail",
        "resolution": "Dawn breaks",
        "narrativeBeats": ["a", "b", "c"],
        "toneProgression": ["calm", "uneasy"],
        "visualMotifs": ["neon"],
        "characterArc": "Morgan grows brave"
    });
    let arc: NarrativeArc = serde_json::from_value(raw).unwrap();
    assert_eq!(arc.rising_action, "Strange customers arrive");
    assert_eq!(arc.narrative_beats.len(), 3);
}

#[test]
fn test_narrative_arc_default_is_fallback_plan() {
    let arc = NarrativeArc::default();
    assert_eq!(arc.setup, "Introduce character and establish setting");
    assert_eq!(arc.tone_progression[0], "intriguing");
    assert_eq!(arc.narrative_beats[4], "Find resolution");
}

#[test]
fn test_video_response_tolerates_missing_fields() {
    let response: VideoResponse = serde_json::from_value(json!({
        "candidates": [{}, {"content": {"parts": [{"text": "https://x/y.mp4"}]}}]
    }))
    .unwrap();
    assert_eq!(response.candidates.len(), 2);
    assert!(response.candidates[0].content.is_none());
}

#[test]
fn test_stats_from_episode() {
    let episode = Episode {
        id: "episode-1".to_string(),
        character: Character::new("Morgan", "male", "night shift worker"),
        setting: "Gas station".to_string(),
        themes: vec![],
        segments: vec![
            EpisodeSegment {
                index: 0,
                segment_type: SegmentType::Opening,
                story: sample_segment(),
                video: sample_video(),
                generated_at: Utc::now(),
            };
            3
        ],
        narrative_arc: None,
        summary: None,
        started_at: Utc::now(),
        completed_at: None,
        status: EpisodeStatus::Generating,
        error: None,
    };

    let stats = EpisodeStats::from_episode(Some(&episode));
    assert!(stats.has_episode);
    assert_eq!(stats.segment_count, 3);
    assert_eq!(stats.duration_seconds, 24);
    assert_eq!(stats.character.as_deref(), Some("Morgan"));

    let empty = EpisodeStats::from_episode(None);
    assert!(!empty.has_episode);
    assert_eq!(empty.duration_seconds, 0);
}
