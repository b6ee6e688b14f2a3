//! `## Beat N` blocks inside drafts, notes and final narration.

use regex::Regex;
use std::sync::LazyLock;

static BEAT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^##\s+Beat\s+(\d+).*$").expect("Valid beat heading regex"));

/// Prefix of the source-beat preview line written before each draft block.
pub const PREVIEW_PREFIX: &str = "> Source beat:";

/// Heading that opens a beat block.
pub fn beat_heading(number: u32) -> String {
    format!("## Beat {}", number)
}

/// One beat's portion of a longer document.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct BeatBlock {
    /// Number from the heading
    number: u32,
    /// Text under the heading, trimmed
    body: String,
}

impl BeatBlock {
    /// Create a block.
    pub fn new(number: u32, body: impl Into<String>) -> Self {
        Self {
            number,
            body: body.into(),
        }
    }
}

/// Remove section separators and source previews trailing a block body.
fn trim_block_tail(body: &str) -> &str {
    let mut body = body.trim_end();
    loop {
        let (rest, last) = match body.rsplit_once('\n') {
            Some((rest, last)) => (rest, last.trim()),
            None => ("", body.trim()),
        };
        if last == "---" || last.starts_with(PREVIEW_PREFIX) {
            body = rest.trim_end();
        } else {
            return body;
        }
    }
}

/// Split a document on `## Beat N` headings.
///
/// Text before the first heading is dropped; headings are not part of
/// the bodies.
///
/// # Examples
///
/// ```
/// use vellum_narrative::split_beat_blocks;
///
/// let doc = "## DRAFT 0\n\n## Beat 1\nFirst.\n\n## Beat 2\nSecond.\n";
/// let blocks = split_beat_blocks(doc);
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1].body(), "Second.");
/// ```
pub fn split_beat_blocks(text: &str) -> Vec<BeatBlock> {
    let headings: Vec<(u32, usize, usize)> = BEAT_HEADING
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str().parse().ok()?;
            Some((number, whole.start(), whole.end()))
        })
        .collect();

    headings
        .iter()
        .enumerate()
        .map(|(i, &(number, _, body_start))| {
            let body_end = headings.get(i + 1).map_or(text.len(), |&(_, start, _)| start);
            let body = trim_block_tail(&text[body_start..body_end]).trim();
            BeatBlock::new(number, body)
        })
        .collect()
}
