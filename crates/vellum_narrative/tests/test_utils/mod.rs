//! Shared fixtures for workflow tests.

#![allow(dead_code)]

mod mock_driver;

pub use mock_driver::{MockDriver, MockReply};

use tempfile::TempDir;
use vellum_error::{NarrativeErrorKind, ProjectErrorKind, VellumError, VellumErrorKind};
use vellum_project::Project;
use vellum_rate_limit::VellumConfig;

/// Bundled configuration only, no user files.
pub fn config() -> VellumConfig {
    VellumConfig::from_toml_str("").expect("bundled configuration loads")
}

/// A project folder holding the given files.
pub fn project_with(files: &[(&str, &str)]) -> (TempDir, Project) {
    let temp = tempfile::tempdir().expect("temp dir");
    let dir = temp.path().join("Hush Pulse Initiative");
    std::fs::create_dir_all(&dir).expect("project dir");
    for (name, content) in files {
        std::fs::write(dir.join(name), content).expect("fixture file");
    }
    let project = Project::new("Hush Pulse Initiative", dir);
    (temp, project)
}

/// Read a project file, or an empty string when it does not exist.
pub fn read(project: &Project, file_name: &str) -> String {
    std::fs::read_to_string(project.file(file_name)).unwrap_or_default()
}

/// Narrative kind of an error, panicking on any other kind.
pub fn narrative_kind(err: &VellumError) -> &NarrativeErrorKind {
    match err.kind() {
        VellumErrorKind::Narrative(e) => &e.kind,
        other => panic!("unexpected error: {other}"),
    }
}

/// Project kind of an error, panicking on any other kind.
pub fn project_kind(err: &VellumError) -> &ProjectErrorKind {
    match err.kind() {
        VellumErrorKind::Project(e) => &e.kind,
        other => panic!("unexpected error: {other}"),
    }
}

/// A Draft 0 section as `draft` writes it, with expansions for each body.
pub fn draft_document(bodies: &[&str]) -> String {
    let mut doc = format!(
        "# Script\n\n\n---\n\n## DRAFT 0 | 2025-01-01 09:00:00 | beats_final.md | {} beats\n\nDraft 0 expanded from {} curated beats.\n",
        bodies.len(),
        bodies.len()
    );
    for (i, body) in bodies.iter().enumerate() {
        doc.push_str(&format!(
            "\n\n---\n\n> Source beat: source {}\n\n## Beat {}\n\n{}\n",
            i + 1,
            i + 1,
            body
        ));
    }
    doc
}
