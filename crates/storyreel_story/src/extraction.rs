//! Utilities for extracting JSON objects from model responses.
//!
//! Models often wrap JSON in markdown fences or surround it with chatter.
//! Fenced blocks are tried first, then a balanced-brace scan that ignores
//! braces inside string literals.

use storyreel_error::{ParseError, ParseErrorKind, StoryreelResult};

/// Extract the first JSON object from a response.
///
/// # Errors
///
/// Returns a [`ParseError`] with [`ParseErrorKind::NoJson`] when the response
/// holds nothing that looks like an object.
///
/// # Examples
///
/// ```
/// use storyreel_story::extract_json;
///
/// let response = "Here you go:\n```json\n{\"id\": \"opening\"}\n```\nEnjoy!";
/// assert_eq!(extract_json(response).unwrap(), "{\"id\": \"opening\"}");
///
/// let chatty = "Sure! {\"a\": {\"b\": \"}\"}} hope that helps";
/// assert_eq!(extract_json(chatty).unwrap(), "{\"a\": {\"b\": \"}\"}}");
/// ```
pub fn extract_json(response: &str) -> StoryreelResult<String> {
    if let Some(block) = extract_from_code_block(response)
        && let Some(json) = extract_balanced(&block, '{', '}')
    {
        return Ok(json);
    }

    if let Some(json) = extract_balanced(response, '{', '}') {
        return Ok(json);
    }

    tracing::warn!(
        response_length = response.len(),
        "No JSON object found in model response"
    );
    Err(ParseError::new(ParseErrorKind::NoJson).into())
}

/// Parse a JSON string into `T`.
///
/// # Errors
///
/// Returns a [`ParseError`] with [`ParseErrorKind::InvalidJson`] carrying the
/// decoder message.
///
/// # Examples
///
/// ```
/// use storyreel_story::parse_json;
///
/// let value: serde_json::Value = parse_json(r#"{"continue": false}"#).unwrap();
/// assert_eq!(value["continue"], false);
/// assert!(parse_json::<serde_json::Value>("{not json}").is_err());
/// ```
pub fn parse_json<T>(json_str: &str) -> StoryreelResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();
        tracing::warn!(error = %e, json_preview = %preview, "JSON parsing failed");
        ParseError::new(ParseErrorKind::InvalidJson(e.to_string())).into()
    })
}

/// Content of the first markdown fence, language tag skipped.
///
/// An unterminated fence yields everything after the opening line.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let content_start = start + 3;
    let skip_to = response[content_start..]
        .find('\n')
        .map(|n| content_start + n + 1)
        .unwrap_or(content_start);

    match response[skip_to..].find("```") {
        Some(end) => Some(response[skip_to..skip_to + end].trim().to_string()),
        None => Some(response[skip_to..].trim().to_string()),
    }
}

/// Content between the first `open` and its matching `close`.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_fenced_block() {
        let response = r#"
Here's the scene:

```json
{
  "id": "opening",
  "choices": []
}
```

Have fun!
"#;
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"id\": \"opening\""));
    }

    #[test]
    fn test_extract_from_unlabelled_fence() {
        let response = "```\n{\"id\": 1}\n```";
        assert_eq!(extract_json(response).unwrap(), "{\"id\": 1}");
    }

    #[test]
    fn test_extract_balanced_braces() {
        let response = r#"Sure! {"id": 456, "nested": {"value": "test"}} trailing {"other": 1}"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"id": 456, "nested": {"value": "test"}}"#);
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let response = r#"{"text": "a } brace and an \"escaped\" quote"}"#;
        assert_eq!(extract_json(response).unwrap(), response);
    }

    #[test]
    fn test_fence_without_object_falls_back_to_scan() {
        let response = "```text\nno json here\n```\n{\"id\": 2}";
        assert_eq!(extract_json(response).unwrap(), "{\"id\": 2}");
    }

    #[test]
    fn test_no_json_found() {
        let err = extract_json("This is just plain text").unwrap_err();
        assert!(err.to_string().contains("No JSON object"));
    }

    #[test]
    fn test_unbalanced_object_is_not_json() {
        assert!(extract_json("{\"id\": 1").is_err());
    }

    #[test]
    fn test_parse_json_into_struct() {
        #[derive(serde::Deserialize)]
        struct Pacing {
            #[serde(rename = "continue")]
            keep_going: bool,
        }

        let pacing: Pacing = parse_json(r#"{"continue": true}"#).unwrap();
        assert!(pacing.keep_going);
    }
}
