//! Numbered-beat parsing.
//!
//! A beat starts on a line like `3. The third beat` and runs until the next
//! numbered line. Anything before the first numbered line is ignored.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;
use vellum_error::{NarrativeError, NarrativeErrorKind, VellumResult};

static BEAT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s+(.*)").expect("Valid beat regex"));

/// One numbered unit of an outline.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Beat {
    /// Number as written in the document
    index: u32,
    /// Beat text, possibly multi-line, trimmed
    text: String,
}

impl Beat {
    /// Create a beat.
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Split text into numbered beats.
///
/// Continuation lines, blank ones included, belong to the current beat.
///
/// # Examples
///
/// ```
/// use vellum_narrative::parse_beats;
///
/// let beats = parse_beats("# Outline\n1. A signal\nrepeats nightly.\n\n2. Nobody answers.\n");
/// assert_eq!(beats.len(), 2);
/// assert_eq!(beats[0].text(), "A signal\nrepeats nightly.");
/// assert_eq!(*beats[1].index(), 2);
/// ```
pub fn parse_beats(text: &str) -> Vec<Beat> {
    let mut beats = Vec::new();
    let mut current: Option<(u32, Vec<&str>)> = None;

    for line in text.lines() {
        let numbered = BEAT_LINE.captures(line).and_then(|caps| {
            let index = caps.get(1)?.as_str().parse::<u32>().ok()?;
            Some((index, caps.get(2).map_or("", |m| m.as_str())))
        });

        match numbered {
            Some((index, first)) => {
                if let Some((prev, lines)) = current.take() {
                    beats.push(Beat::new(prev, lines.join("\n").trim()));
                }
                current = Some((index, vec![first]));
            }
            None => {
                if let Some((_, lines)) = current.as_mut() {
                    lines.push(line);
                }
            }
        }
    }

    if let Some((index, lines)) = current {
        beats.push(Beat::new(index, lines.join("\n").trim()));
    }

    beats
}

/// Parse beats, failing when there are none.
///
/// `source` names the document in the error message.
pub fn require_beats(text: &str, source: &str) -> VellumResult<Vec<Beat>> {
    let beats = parse_beats(text);
    if beats.is_empty() {
        return Err(NarrativeError::new(NarrativeErrorKind::NoBeats(source.to_string())).into());
    }
    Ok(beats)
}

/// Check that beats are numbered exactly `1..=k` in order.
///
/// # Examples
///
/// ```
/// use vellum_narrative::{Beat, validate_numbering};
///
/// assert!(validate_numbering(&[Beat::new(1, "a"), Beat::new(2, "b")]).is_ok());
/// assert!(validate_numbering(&[Beat::new(1, "a"), Beat::new(3, "b")]).is_err());
/// ```
pub fn validate_numbering(beats: &[Beat]) -> VellumResult<()> {
    for (position, beat) in beats.iter().enumerate() {
        let expected = position as u32 + 1;
        if beat.index != expected {
            return Err(NarrativeError::new(NarrativeErrorKind::BeatNumbering {
                position: position + 1,
                expected,
                found: beat.index,
            })
            .into());
        }
    }
    Ok(())
}

/// Reassign numbers `1..=k` in parse order.
pub fn renumber(beats: Vec<Beat>) -> Vec<Beat> {
    beats
        .into_iter()
        .enumerate()
        .map(|(i, beat)| Beat::new(i as u32 + 1, beat.text))
        .collect()
}

/// Parse, require and check numbering in one step.
///
/// With `allow_renumber`, drifting numbers are repaired with a warning
/// instead of rejected.
pub fn prepare_beats(text: &str, source: &str, allow_renumber: bool) -> VellumResult<Vec<Beat>> {
    let beats = require_beats(text, source)?;
    match validate_numbering(&beats) {
        Ok(()) => Ok(beats),
        Err(e) if allow_renumber => {
            warn!(source, error = %e, "Renumbering beats");
            Ok(renumber(beats))
        }
        Err(e) => Err(e),
    }
}

/// Render beats as a numbered list separated by blank lines.
pub fn format_beats(beats: &[Beat]) -> String {
    beats
        .iter()
        .map(|b| format!("{}. {}", b.index, b.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Single-line preview of at most `max_chars` characters.
///
/// # Examples
///
/// ```
/// use vellum_narrative::preview;
///
/// assert_eq!(preview("short\ntext", 160), "short text");
/// assert_eq!(preview(&"x".repeat(200), 160).chars().count(), 160);
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let keep = max_chars.saturating_sub(3);
    let mut cut: String = flat.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let texts = [
            "The tower hums at 3 a.m.",
            "A technician files a report.\nIt is redacted within the hour.",
            "Nobody remembers who built it.",
        ];
        let doc: String = texts
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}\n\n", i + 1, t))
            .collect();

        let beats = parse_beats(&doc);

        assert_eq!(beats.len(), texts.len());
        for (i, beat) in beats.iter().enumerate() {
            assert_eq!(*beat.index(), i as u32 + 1);
            assert_eq!(beat.text(), texts[i].trim());
        }
    }

    #[test]
    fn test_preamble_is_discarded() {
        let beats = parse_beats("Intro text\nMore intro\n1. First");
        assert_eq!(beats, vec![Beat::new(1, "First")]);
    }

    #[test]
    fn test_no_beats() {
        assert!(parse_beats("no numbers here\n1.5 million\n").is_empty());
        let err = require_beats("nothing", "outline.md").unwrap_err();
        assert!(err.to_string().contains("outline.md"));
    }

    #[test]
    fn test_indented_beats() {
        let beats = parse_beats("   1.   Indented beat\n  2. Second");
        assert_eq!(beats[0].text(), "Indented beat");
        assert_eq!(beats[1].text(), "Second");
    }

    #[test]
    fn test_numbering_skip_and_repeat() {
        let skipped = parse_beats("1. a\n2. b\n4. c");
        let err = validate_numbering(&skipped).unwrap_err();
        assert!(err.to_string().contains("expected 3"));

        let repeated = parse_beats("1. a\n1. b");
        assert!(validate_numbering(&repeated).is_err());
    }

    #[test]
    fn test_prepare_beats_renumber() {
        let text = "2. a\n5. b";
        assert!(prepare_beats(text, "outline.md", false).is_err());

        let beats = prepare_beats(text, "outline.md", true).unwrap();
        assert_eq!(beats, vec![Beat::new(1, "a"), Beat::new(2, "b")]);
    }

    #[test]
    fn test_format_beats() {
        let text = format_beats(&[Beat::new(1, "a"), Beat::new(2, "b")]);
        assert_eq!(text, "1. a\n\n2. b");
        assert_eq!(parse_beats(&text).len(), 2);
    }
}
