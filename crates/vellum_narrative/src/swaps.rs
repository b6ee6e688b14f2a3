//! Sentence-swap extraction and application.

use regex::Regex;
use std::sync::LazyLock;

/// `- Original: "..."` immediately followed by `- Replacement: "..."`.
///
/// Straight and curly quotes are accepted; spans may cross lines.
static SWAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)-\s*Original:\s*["“](.*?)["”]\s*-\s*Replacement:\s*["“](.*?)["”]"#)
        .expect("Valid swap regex")
});

/// Start of each `- Original:` entry; a pair never spans two entries.
static ORIGINAL_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*Original:").expect("Valid original regex"));

/// A literal text substitution suggested by an editorial pass.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct SentenceSwap {
    /// Text to find, verbatim
    original: String,
    /// Text to put in its place
    replacement: String,
}

impl SentenceSwap {
    /// Create a swap.
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}

/// Collect every swap pair in review text, skipping pairs with an empty side.
///
/// An `- Original:` entry with no replacement right after it is dropped
/// without consuming the entries that follow.
///
/// # Examples
///
/// ```
/// use vellum_narrative::extract_swaps;
///
/// let notes = "Tighten this.\n- Original: \"It was scary.\"\n- Replacement: \"Nobody went back.\"";
/// let swaps = extract_swaps(notes);
/// assert_eq!(swaps.len(), 1);
/// assert_eq!(swaps[0].replacement(), "Nobody went back.");
/// ```
pub fn extract_swaps(review: &str) -> Vec<SentenceSwap> {
    let starts: Vec<usize> = ORIGINAL_START.find_iter(review).map(|m| m.start()).collect();
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| &review[start..starts.get(i + 1).copied().unwrap_or(review.len())])
        .filter_map(|entry| {
            let caps = SWAP.captures(entry)?;
            let original = caps.get(1)?.as_str();
            let replacement = caps.get(2)?.as_str();
            if original.is_empty() || replacement.is_empty() {
                None
            } else {
                Some(SentenceSwap::new(original, replacement))
            }
        })
        .collect()
}

/// Apply swaps in order as literal, case-sensitive replacements.
///
/// Later swaps see the output of earlier ones. Swaps whose original is
/// absent do nothing.
///
/// # Examples
///
/// ```
/// use vellum_narrative::{SentenceSwap, apply_swaps};
///
/// let swaps = [SentenceSwap::new("A", "B"), SentenceSwap::new("B", "C")];
/// assert_eq!(apply_swaps("A", &swaps), "C");
/// ```
pub fn apply_swaps(text: &str, swaps: &[SentenceSwap]) -> String {
    apply_swaps_counted(text, swaps).0
}

/// Apply swaps and report how many matched at least once.
pub fn apply_swaps_counted(text: &str, swaps: &[SentenceSwap]) -> (String, usize) {
    let mut result = text.to_string();
    let mut applied = 0;
    for swap in swaps {
        if result.contains(&swap.original) {
            result = result.replace(&swap.original, &swap.replacement);
            applied += 1;
        }
    }
    (result, applied)
}
