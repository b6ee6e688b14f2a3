//! Tests for project lookup and the append-only writer.

use vellum_error::{ProjectErrorKind, VellumErrorKind};
use vellum_project::{
    DocumentKind, ProjectLocator, SectionMarker, append_section, create_project,
};
use vellum_core::ProjectType;

fn project_kind(err: &vellum_error::VellumError) -> &ProjectErrorKind {
    match err.kind() {
        VellumErrorKind::Project(e) => &e.kind,
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_append_writes_exact_layout() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("notes.md");
    std::fs::write(&path, "# Notes").unwrap();

    append_section(&path, "## HEADER", "body text").unwrap();
    append_section(&path, "## SECOND", "more").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "# Notes\n\n---\n\n## HEADER\n\nbody text\n\n\n---\n\n## SECOND\n\nmore\n"
    );
}

#[test]
fn test_append_creates_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("concepts.md");

    append_section(&path, "## SAVED IDEA", "a humming tower").unwrap();

    assert!(std::fs::read_to_string(&path).unwrap().starts_with("\n\n---\n\n## SAVED IDEA"));
}

#[test]
fn test_locate_prefers_slugged_folder() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("Case-File")).unwrap();

    let locator = ProjectLocator::new(temp.path());
    let project = locator.locate(" Case/File ").unwrap();

    assert_eq!(project.dir(), &temp.path().join("Case-File"));
    assert_eq!(project.name(), "Case/File");
}

#[test]
fn test_locate_falls_back_to_raw_name() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join(" padded ")).unwrap();

    let locator = ProjectLocator::new(temp.path());
    let project = locator.locate(" padded ").unwrap();

    assert_eq!(project.dir(), &temp.path().join(" padded "));
}

#[test]
fn test_locate_not_found_names_both_candidates() {
    let temp = tempfile::tempdir().unwrap();
    let locator = ProjectLocator::new(temp.path());

    let err = locator.locate("Ghost/Town").unwrap_err();

    match project_kind(&err) {
        ProjectErrorKind::NotFound { slugged, raw } => {
            assert!(slugged.ends_with("Ghost-Town"));
            assert!(raw.ends_with("Town"));
            assert_ne!(slugged, raw);
        }
        other => panic!("unexpected kind: {other}"),
    }
}

#[test]
fn test_locate_rejects_blank_name() {
    let temp = tempfile::tempdir().unwrap();
    let locator = ProjectLocator::new(temp.path());

    for name in ["", "   ", "\t"] {
        let err = locator.locate(name).unwrap_err();
        assert_eq!(project_kind(&err), &ProjectErrorKind::EmptyName);
    }
}

#[test]
fn test_missing_document_names_remedy() {
    let temp = tempfile::tempdir().unwrap();
    create_project(temp.path(), "Quiet Floor", ProjectType::Aperture).unwrap();
    let project = ProjectLocator::new(temp.path()).locate("Quiet Floor").unwrap();

    let err = project.read(DocumentKind::BeatsFinal).unwrap_err();

    match project_kind(&err) {
        ProjectErrorKind::DocumentMissing { path, remedy } => {
            assert!(path.ends_with("beats_final.md"));
            assert!(remedy.contains("curate"));
        }
        other => panic!("unexpected kind: {other}"),
    }
}

#[test]
fn test_project_append_routes_to_marker_document() {
    let temp = tempfile::tempdir().unwrap();
    create_project(temp.path(), "Quiet Floor", ProjectType::Shrouded).unwrap();
    let project = ProjectLocator::new(temp.path()).locate("Quiet Floor").unwrap();

    let path = project
        .append(SectionMarker::SavedIdea, "manual", "The elevator stops at floor 13.")
        .unwrap();

    assert_eq!(path, project.path(DocumentKind::Concepts));
    let concepts = project.read(DocumentKind::Concepts).unwrap();
    assert!(concepts.contains("## SAVED IDEA | "));
    assert!(concepts.contains(" | manual\n\nThe elevator stops at floor 13.\n"));
}
