//! `curate`: pick the beats of the latest outline that go into the draft.

use super::WorkflowReport;
use super::generate::latest_outline_body;
use crate::{curate_interactive, format_beats, prepare_beats, renumber, select_beats};
use std::io::{BufRead, Write};
use tracing::{info, instrument};
use vellum_error::{NarrativeError, NarrativeErrorKind, VellumResult};
use vellum_project::{DocumentKind, Project, SectionMarker};

/// How beats are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurationMode {
    /// Keep every beat
    All,
    /// Keep the listed beat numbers
    Select(Vec<u32>),
    /// Ask the operator about each beat
    Interactive,
}

/// Options for [`curate`].
#[derive(Debug, Clone, Default)]
pub struct CurateOptions {
    /// Output file inside the project; `beats_final.md` when absent
    pub output: Option<String>,
    /// Repair drifting beat numbers instead of failing
    pub renumber: bool,
}

/// Curate the beats of the latest outline section and append them,
/// renumbered, under `CURATED BEATS`.
///
/// `input` and `prompt` carry the interactive session and are untouched
/// in the scripted modes.
///
/// # Errors
///
/// Fails when the outline has no beats, a selected beat does not exist,
/// or nothing is kept.
#[instrument(skip(project, options, input, prompt), fields(project = %project.name()))]
pub fn curate<R: BufRead, W: Write>(
    project: &Project,
    mode: &CurationMode,
    options: &CurateOptions,
    input: R,
    prompt: W,
) -> VellumResult<WorkflowReport> {
    let outline = latest_outline_body(project)?;
    let beats = prepare_beats(&outline, DocumentKind::Outline.file_name(), options.renumber)?;
    info!(beats = beats.len(), "Parsed outline beats");

    let kept = match mode {
        CurationMode::All => renumber(beats.clone()),
        CurationMode::Select(numbers) => select_beats(&beats, numbers)?,
        CurationMode::Interactive => curate_interactive(&beats, input, prompt)?,
    };

    if kept.is_empty() {
        return Err(NarrativeError::new(NarrativeErrorKind::EmptyInput(
            "no beats were kept; nothing to save".to_string(),
        ))
        .into());
    }

    let file_name = options
        .output
        .as_deref()
        .unwrap_or(DocumentKind::BeatsFinal.file_name());
    let detail = format!("{} of {} beats kept", kept.len(), beats.len());
    let path = project.append_to(file_name, SectionMarker::CuratedBeats, &detail, &format_beats(&kept))?;

    Ok(WorkflowReport::written(path, kept.len()))
}
