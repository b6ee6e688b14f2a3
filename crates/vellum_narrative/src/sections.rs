//! Latest-section extraction.

/// Text from the start of the line holding the last `marker` to the end.
///
/// Returns the whole input when the marker never appears.
///
/// # Examples
///
/// ```
/// use vellum_narrative::latest_section;
///
/// let doc = "## OUTLINE | one\n1. old\n\n## OUTLINE | two\n1. new\n";
/// assert_eq!(latest_section(doc, "OUTLINE"), "## OUTLINE | two\n1. new\n");
/// assert_eq!(latest_section(doc, "MISSING"), doc);
/// ```
pub fn latest_section<'a>(full_text: &'a str, marker: &str) -> &'a str {
    match full_text.rfind(marker) {
        Some(pos) => {
            let line_start = full_text[..pos].rfind('\n').map_or(0, |i| i + 1);
            &full_text[line_start..]
        }
        None => full_text,
    }
}

/// Drop the first line of a section (its header).
pub fn without_header(section: &str) -> &str {
    section.split_once('\n').map_or("", |(_, rest)| rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_mid_line() {
        let doc = "intro\n## AUTO-GENERATED OUTLINE | 2024 | a\n1. x\nprefix AUTO-GENERATED OUTLINE suffix\n1. y";
        assert_eq!(
            latest_section(doc, "AUTO-GENERATED OUTLINE"),
            "prefix AUTO-GENERATED OUTLINE suffix\n1. y"
        );
    }

    #[test]
    fn test_marker_on_first_line() {
        let doc = "MARK here\nbody";
        assert_eq!(latest_section(doc, "MARK"), doc);
    }

    #[test]
    fn test_without_header() {
        assert_eq!(without_header("## H\nbody\nmore"), "body\nmore");
        assert_eq!(without_header("## only"), "");
    }
}
