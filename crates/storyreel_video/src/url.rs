//! Video URL extraction from capability responses.

use storyreel_core::{ResponsePart, VideoResponse};

fn part_url(part: &ResponsePart) -> Option<&str> {
    let non_empty = |s: &&str| !s.is_empty();

    if let Some(uri) = part
        .video_data
        .as_ref()
        .and_then(|data| data.uri.as_deref())
        .filter(non_empty)
    {
        return Some(uri);
    }

    if let Some(uri) = part
        .file_data
        .as_ref()
        .and_then(|data| data.file_uri.as_deref())
        .filter(non_empty)
    {
        return Some(uri);
    }

    part.text
        .as_deref()
        .map(str::trim)
        .filter(|text| text.starts_with("http://") || text.starts_with("https://"))
}

/// First video URL in the response.
///
/// Candidates are searched in order. Within a part an inline video wins over
/// an uploaded file, which wins over a text part holding a URL.
///
/// # Examples
///
/// ```
/// use storyreel_core::VideoResponse;
/// use storyreel_video::extract_video_url;
///
/// let response: VideoResponse = serde_json::from_str(
///     r#"{"candidates":[{"content":{"parts":[{"text":"no video, sorry"}]}},
///                       {"content":{"parts":[{"text":"https://cdn/clip.mp4"}]}}]}"#,
/// ).unwrap();
/// assert_eq!(extract_video_url(&response).as_deref(), Some("https://cdn/clip.mp4"));
/// ```
pub fn extract_video_url(response: &VideoResponse) -> Option<String> {
    response
        .candidates
        .iter()
        .filter_map(|candidate| candidate.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .find_map(part_url)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::{Candidate, CandidateContent, FileData, VideoData};

    fn response(parts: Vec<ResponsePart>) -> VideoResponse {
        VideoResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent { parts }),
            }],
        }
    }

    #[test]
    fn test_video_data_wins_over_file_data() {
        let part = ResponsePart {
            video_data: Some(VideoData {
                uri: Some("https://video".to_string()),
            }),
            file_data: Some(FileData {
                file_uri: Some("https://file".to_string()),
            }),
            text: None,
        };
        assert_eq!(extract_video_url(&response(vec![part])).as_deref(), Some("https://video"));
    }

    #[test]
    fn test_empty_uri_falls_through() {
        let part = ResponsePart {
            video_data: Some(VideoData {
                uri: Some(String::new()),
            }),
            file_data: Some(FileData {
                file_uri: Some("gs://bucket/clip.mp4".to_string()),
            }),
            text: None,
        };
        assert_eq!(
            extract_video_url(&response(vec![part])).as_deref(),
            Some("gs://bucket/clip.mp4")
        );
    }

    #[test]
    fn test_plain_text_is_not_a_url() {
        let part = ResponsePart {
            text: Some("I cannot make videos".to_string()),
            ..Default::default()
        };
        assert!(extract_video_url(&response(vec![part])).is_none());
    }

    #[test]
    fn test_no_candidates() {
        assert!(extract_video_url(&VideoResponse::default()).is_none());
    }
}
