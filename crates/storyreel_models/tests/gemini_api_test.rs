//! Live Gemini calls, only built with `--features api`.

#![cfg(feature = "api")]

use storyreel_interface::TextModel;
use storyreel_models::GeminiTextModel;

#[tokio::test]
async fn test_live_text_generation() {
    let _ = dotenvy::dotenv();
    let model = GeminiTextModel::new("gemini-2.0-flash").expect("GEMINI_API_KEY must be set");

    let answer = model
        .generate_text("Reply with the single word: ready")
        .await
        .expect("Gemini call failed");

    assert!(!answer.trim().is_empty());
}
