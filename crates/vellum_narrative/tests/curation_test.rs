//! Tests for curating outline beats into beats_final.md.

mod test_utils;

use std::io::Cursor;
use test_utils::{narrative_kind, project_kind, project_with, read};
use vellum_error::{NarrativeErrorKind, ProjectErrorKind};
use vellum_narrative::workflow::{CurateOptions, CurationMode, curate};
use vellum_narrative::{latest_section, parse_beats};

fn ten_beats(label: &str) -> String {
    (1..=10)
        .map(|i| format!("{}. {} beat {}.", i, label, i))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn outline_with_two_sections() -> String {
    format!(
        "# Hush Pulse Initiative\n\n\n---\n\n## AUTO-GENERATED OUTLINE | 2025-01-01 10:00:00 | shrouded | seed: first\n\n{}\n\n\n---\n\n## AUTO-GENERATED OUTLINE | 2025-01-02 10:00:00 | shrouded | seed: second\n\n{}\n",
        ten_beats("Early"),
        ten_beats("Later")
    )
}

#[test]
fn test_curation_reads_only_the_later_section() {
    let (_temp, project) = project_with(&[("outline.md", &outline_with_two_sections())]);

    let report = curate(
        &project,
        &CurationMode::All,
        &CurateOptions::default(),
        Cursor::new(""),
        Vec::new(),
    )
    .unwrap();

    assert_eq!(*report.sections(), 10);
    let saved = read(&project, "beats_final.md");
    let section = latest_section(&saved, "CURATED BEATS");
    let beats = parse_beats(section);
    assert_eq!(beats.len(), 10);
    assert!(beats.iter().all(|b| b.text().starts_with("Later beat")));
    assert!(!saved.contains("Early beat"));
}

#[test]
fn test_scripted_selection_renumbers() {
    let (_temp, project) = project_with(&[("outline.md", &outline_with_two_sections())]);

    curate(
        &project,
        &CurationMode::Select(vec![2, 7]),
        &CurateOptions::default(),
        Cursor::new(""),
        Vec::new(),
    )
    .unwrap();

    let saved = read(&project, "beats_final.md");
    assert!(saved.contains("## CURATED BEATS | "));
    assert!(saved.contains("| 2 of 10 beats kept"));
    assert!(saved.ends_with("1. Later beat 2.\n\n2. Later beat 7.\n"));
}

#[test]
fn test_interactive_session_and_custom_output() {
    let (_temp, project) = project_with(&[("outline.md", "1. Alpha\n2. Beta\n3. Gamma\n")]);
    let mut transcript = Vec::new();
    let options = CurateOptions {
        output: Some("beats_alt.md".to_string()),
        ..CurateOptions::default()
    };

    curate(
        &project,
        &CurationMode::Interactive,
        &options,
        Cursor::new("k\nd\ne\nGamma, revised\n"),
        &mut transcript,
    )
    .unwrap();

    let saved = read(&project, "beats_alt.md");
    assert!(saved.ends_with("1. Alpha\n\n2. Gamma, revised\n"));
    assert!(!project.file("beats_final.md").exists());
    assert!(String::from_utf8(transcript).unwrap().contains("Beat 2:\nBeta"));
}

#[test]
fn test_dropping_everything_saves_nothing() {
    let (_temp, project) = project_with(&[("outline.md", "1. Alpha\n2. Beta\n")]);

    let err = curate(
        &project,
        &CurationMode::Interactive,
        &CurateOptions::default(),
        Cursor::new("d\nd\n"),
        Vec::new(),
    )
    .unwrap_err();

    assert!(matches!(narrative_kind(&err), NarrativeErrorKind::EmptyInput(_)));
    assert!(!project.file("beats_final.md").exists());
}

#[test]
fn test_numbering_drift_needs_renumber() {
    let (_temp, project) = project_with(&[("outline.md", "1. Alpha\n3. Beta\n")]);

    let err = curate(
        &project,
        &CurationMode::All,
        &CurateOptions::default(),
        Cursor::new(""),
        Vec::new(),
    )
    .unwrap_err();
    assert_eq!(
        narrative_kind(&err),
        &NarrativeErrorKind::BeatNumbering {
            position: 2,
            expected: 2,
            found: 3
        }
    );

    let options = CurateOptions {
        renumber: true,
        ..CurateOptions::default()
    };
    curate(&project, &CurationMode::All, &options, Cursor::new(""), Vec::new()).unwrap();
    assert!(read(&project, "beats_final.md").ends_with("1. Alpha\n\n2. Beta\n"));
}

#[test]
fn test_outline_without_beats() {
    let (_temp, project) = project_with(&[("outline.md", "# Outline\n\nNothing numbered yet.\n")]);

    let err = curate(
        &project,
        &CurationMode::All,
        &CurateOptions::default(),
        Cursor::new(""),
        Vec::new(),
    )
    .unwrap_err();

    assert!(matches!(narrative_kind(&err), NarrativeErrorKind::NoBeats(_)));
    assert!(err.to_string().contains("1. The first beat"));
}

#[test]
fn test_missing_outline_names_remedy() {
    let (_temp, project) = project_with(&[]);

    let err = curate(
        &project,
        &CurationMode::All,
        &CurateOptions::default(),
        Cursor::new(""),
        Vec::new(),
    )
    .unwrap_err();

    match project_kind(&err) {
        ProjectErrorKind::DocumentMissing { path, remedy } => {
            assert!(path.ends_with("outline.md"));
            assert!(remedy.contains("add-outline"));
        }
        other => panic!("unexpected: {other}"),
    }
}
