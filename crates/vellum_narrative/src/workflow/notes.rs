//! Reading the latest section of a project document as beat blocks.

use crate::{BeatBlock, latest_section, split_beat_blocks};
use vellum_error::{NarrativeError, NarrativeErrorKind, VellumResult};
use vellum_project::SectionMarker;

/// Beat blocks of the latest `marker` section of `document`.
///
/// Single-beat sections appended after it (`add-beat`) are not part of
/// the draft and are cut off.
pub(crate) fn latest_blocks(
    document: &str,
    marker: SectionMarker,
    file_name: &str,
) -> VellumResult<Vec<BeatBlock>> {
    let section = latest_section(document, &marker.to_string());
    let section = cut_before_marker(section, &SectionMarker::Beat.to_string());
    let blocks = split_beat_blocks(section);
    if blocks.is_empty() {
        return Err(NarrativeError::new(NarrativeErrorKind::EmptyInput(format!(
            "no '## Beat N' blocks in the latest {} section of {}",
            marker, file_name
        )))
        .into());
    }
    Ok(blocks)
}

/// Text before the line holding `marker`, or all of it.
fn cut_before_marker<'a>(section: &'a str, marker: &str) -> &'a str {
    match section.find(marker) {
        Some(pos) => {
            let line_start = section[..pos].rfind('\n').map_or(0, |i| i + 1);
            &section[..line_start]
        }
        None => section,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_beat_sections_are_cut() {
        let doc = "## DRAFT 0 | t | d\n\n## Beat 1\n\nOne.\n\n---\n\n## AUTO-GENERATED BEAT | t | Beat 1\n\n## Beat 1\n\nOther.\n";
        let blocks = latest_blocks(doc, SectionMarker::Draft, "script.md").unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body(), "One.");
    }

    #[test]
    fn test_no_blocks_is_empty_input() {
        let err = latest_blocks("## DRAFT 0 | t | d\n\nnothing", SectionMarker::Draft, "script.md").unwrap_err();
        assert!(err.to_string().contains("no '## Beat N' blocks"));
    }
}
