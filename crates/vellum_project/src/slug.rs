//! Project name slugging.

use vellum_error::{ProjectError, ProjectErrorKind, VellumResult};

/// Turn a human project name into a folder name.
///
/// Trims surrounding whitespace and replaces both path separators with `-`.
/// Nothing else changes: case and inner spacing are kept.
///
/// # Examples
///
/// ```
/// use vellum_project::slug;
///
/// assert_eq!(slug("  Hush Pulse Initiative  "), "Hush Pulse Initiative");
/// assert_eq!(slug("AC/DC\\Live"), "AC-DC-Live");
/// assert_eq!(slug(&slug(" a/b ")), slug(" a/b "));
/// ```
pub fn slug(name: &str) -> String {
    name.trim().replace(['/', '\\'], "-")
}

/// Slug a name that must not be blank.
///
/// # Errors
///
/// Returns [`ProjectErrorKind::EmptyName`] when the name is only whitespace.
pub fn nonempty_slug(name: &str) -> VellumResult<String> {
    let slugged = slug(name);
    if slugged.is_empty() {
        return Err(ProjectError::new(ProjectErrorKind::EmptyName).into());
    }
    Ok(slugged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_idempotent() {
        for name in ["", "   ", "x", " Case File 7 ", "a//b", "\\\\server\\share", "  /lead/ "] {
            let once = slug(name);
            assert_eq!(slug(&once), once, "slug not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_slug_keeps_case_and_inner_spacing() {
        assert_eq!(slug("The  Quiet   Floor"), "The  Quiet   Floor");
    }
}
