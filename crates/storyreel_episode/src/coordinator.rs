//! Coordinator answer shapes and post-processing.

use serde::{Deserialize, Serialize};

/// Longest enhanced prompt kept as is.
const MAX_ENHANCED_CHARS: usize = 300;

/// Continuity verdict from the coordinator.
///
/// Missing fields read as coherent with nothing to fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoherenceCheck {
    /// Whether the current narration follows the previous one
    #[serde(default = "coherent_by_default")]
    pub coherent: bool,
    /// What is wrong
    #[serde(default)]
    pub issue: Option<String>,
    /// Replacement narration
    #[serde(default)]
    pub suggested_fix: Option<String>,
}

fn coherent_by_default() -> bool {
    true
}

impl CoherenceCheck {
    /// Narration to use instead of the current one, if any.
    pub fn replacement(&self) -> Option<&str> {
        if self.coherent {
            return None;
        }
        self.suggested_fix
            .as_deref()
            .map(str::trim)
            .filter(|fix| !fix.is_empty())
    }
}

/// Pacing decision from the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingDecision {
    /// `true` to produce another segment
    #[serde(rename = "continue")]
    pub keep_going: bool,
    /// Short explanation
    #[serde(default)]
    pub reason: Option<String>,
}

/// Trim a coordinator rewrite and cap its length.
///
/// Answers over 300 characters are cut to 297 plus `...`. Blank answers
/// yield `None`.
///
/// # Examples
///
/// ```
/// use storyreel_episode::truncate_prompt;
///
/// assert_eq!(truncate_prompt("  slow dolly in  ").as_deref(), Some("slow dolly in"));
/// assert_eq!(truncate_prompt(&"x".repeat(400)).map(|p| p.chars().count()), Some(300));
/// assert_eq!(truncate_prompt("   "), None);
/// ```
pub fn truncate_prompt(answer: &str) -> Option<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() <= MAX_ENHANCED_CHARS {
        return Some(trimmed.to_string());
    }
    let mut cut: String = trimmed.chars().take(MAX_ENHANCED_CHARS - 3).collect();
    cut.push_str("...");
    Some(cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coherent_answer_has_no_replacement() {
        let check: CoherenceCheck =
            serde_json::from_str(r#"{"coherent": true, "issue": null, "suggestedFix": "x"}"#)
                .unwrap();
        assert_eq!(check.replacement(), None);
    }

    #[test]
    fn incoherent_answer_without_fix_keeps_narration() {
        let check: CoherenceCheck =
            serde_json::from_str(r#"{"coherent": false, "issue": "jump", "suggestedFix": null}"#)
                .unwrap();
        assert_eq!(check.replacement(), None);
    }

    #[test]
    fn incoherent_answer_with_fix() {
        let check: CoherenceCheck =
            serde_json::from_str(r#"{"coherent": false, "suggestedFix": "Morgan returns."}"#)
                .unwrap();
        assert_eq!(check.replacement(), Some("Morgan returns."));
    }

    #[test]
    fn pacing_reads_continue_keyword() {
        let decision: PacingDecision =
            serde_json::from_str(r#"{"continue": false, "reason": "resolved"}"#).unwrap();
        assert!(!decision.keep_going);
    }

    #[test]
    fn truncation_at_boundary() {
        let exact = "y".repeat(300);
        assert_eq!(truncate_prompt(&exact), Some(exact.clone()));

        let long = "z".repeat(301);
        let cut = truncate_prompt(&long).unwrap();
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 300);
    }
}
