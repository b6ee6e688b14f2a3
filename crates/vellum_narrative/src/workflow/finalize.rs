//! `finalize`: narration-only script with the editor's swaps applied.

use super::notes::latest_blocks;
use super::{GenerationContext, WorkflowReport};
use crate::{
    RefusalLog, Screened, SentenceSwap, apply_swaps_counted, beat_heading, extract_narration,
    extract_swaps,
};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};
use vellum_error::VellumResult;
use vellum_project::{DocumentKind, Project, SectionMarker, append_section};

/// Options for [`finalize`].
#[derive(Debug, Clone, Default)]
pub struct FinalizeOptions {
    /// Script to finalize; `script.md` when absent
    pub source: Option<String>,
    /// Polish notes supplying swaps; `script_polish_notes.md` when absent
    pub notes: Option<String>,
    /// Run a read-aloud smoothing pass through the service
    pub smooth: bool,
    /// Channel key; the configured default when absent
    pub channel: Option<String>,
}

/// Swaps per beat number from the latest polish notes, if the file exists.
fn load_swaps(project: &Project, notes_file: &str) -> VellumResult<HashMap<u32, Vec<SentenceSwap>>> {
    if !project.file(notes_file).is_file() {
        warn!(notes = notes_file, "No polish notes found, finalizing without swaps");
        return Ok(HashMap::new());
    }
    let notes = project.read_file(notes_file, DocumentKind::PolishNotes.remedy())?;
    let blocks = match latest_blocks(&notes, SectionMarker::PolishNotes, notes_file) {
        Ok(blocks) => blocks,
        Err(e) => {
            warn!(error = %e, "Polish notes hold no beat blocks, finalizing without swaps");
            return Ok(HashMap::new());
        }
    };
    Ok(blocks
        .iter()
        .map(|b| (*b.number(), extract_swaps(b.body())))
        .collect())
}

/// Extract narration per beat, apply that beat's swaps, optionally smooth,
/// and append the result to `script_narration_final.md`.
///
/// Beat blocks without a narration heading are taken whole. A refused
/// smoothing pass keeps the unsmoothed narration.
#[instrument(skip(ctx, project, options), fields(project = %project.name()))]
pub async fn finalize(
    ctx: &GenerationContext<'_>,
    project: &Project,
    options: &FinalizeOptions,
) -> VellumResult<WorkflowReport> {
    let prompts = ctx.prompts(options.channel.as_deref())?;
    let source = options
        .source
        .as_deref()
        .unwrap_or(DocumentKind::Script.file_name());
    let marker = if source == DocumentKind::Polished.file_name() {
        SectionMarker::PolishedScript
    } else {
        SectionMarker::Draft
    };
    let script = project.read_file(source, DocumentKind::Script.remedy())?;
    let blocks = latest_blocks(&script, marker, source)?;

    let notes_file = options
        .notes
        .as_deref()
        .unwrap_or(DocumentKind::PolishNotes.file_name());
    let swaps = load_swaps(project, notes_file)?;
    if options.smooth {
        ctx.driver()?;
    }

    let mut refusals = RefusalLog::new();
    let mut finished = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let number = *block.number();
        let narration = extract_narration(block.body()).unwrap_or_else(|| {
            debug!(beat = number, "No narration heading, using the whole block");
            block.body().clone()
        });

        let beat_swaps = swaps.get(&number).map(Vec::as_slice).unwrap_or_default();
        let (mut text, matched) = apply_swaps_counted(&narration, beat_swaps);
        if matched < beat_swaps.len() {
            warn!(
                beat = number,
                matched,
                suggested = beat_swaps.len(),
                "Some swaps did not match the narration"
            );
        }

        if options.smooth {
            info!(beat = number, total = blocks.len(), "Smoothing narration");
            let request = prompts.smooth(&text)?;
            match ctx.generate_screened(&request).await? {
                Screened::Accepted(smoothed) => text = smoothed.trim().to_string(),
                Screened::Refused(refusal) => refusals.record(format!("Beat {}", number), refusal),
            }
        }

        finished.push((number, text));
    }

    let path = project.append(
        SectionMarker::FinalNarration,
        &format!("source: {} | {} beats", source, finished.len()),
        &format!("Narration extracted from {}.", source),
    )?;
    for (number, text) in &finished {
        append_section(&path, &beat_heading(*number), text)?;
    }

    let sidecar = refusals.write_sidecar(&path, "finalize --smooth")?;
    let refused = refusals.labels().into_iter().map(String::from).collect();
    Ok(WorkflowReport::written(path, finished.len()).with_refusals(refused, sidecar))
}
