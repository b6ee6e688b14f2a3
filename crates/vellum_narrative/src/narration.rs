//! Narration-block extraction.

use regex::Regex;
use std::sync::LazyLock;

/// `### NARRATION:` or `### 1) NARRATION:`, capturing up to the next `###` line.
static NARRATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ims)^###[ \t]*(?:\d+\)[ \t]*)?NARRATION:[ \t]*(.*?)(?:^###|\z)")
        .expect("Valid narration regex")
});

/// Narration body of an expanded beat, trimmed.
///
/// `None` when the chunk has no narration header or the body is blank, so
/// callers can pass such chunks through unchanged.
///
/// # Examples
///
/// ```
/// use vellum_narrative::extract_narration;
///
/// let chunk = "### 1) NARRATION:\nThe tower hums.\n\n### 2) CLOSING BEAT:\nSilence.";
/// assert_eq!(extract_narration(chunk).as_deref(), Some("The tower hums."));
/// assert_eq!(extract_narration("No header here."), None);
/// ```
pub fn extract_narration(chunk: &str) -> Option<String> {
    let body = NARRATION.captures(chunk)?.get(1)?.as_str().trim();
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}
