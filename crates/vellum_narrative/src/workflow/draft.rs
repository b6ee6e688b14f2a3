//! `draft`: expand every curated beat into Draft 0.

use super::{GenerationContext, WorkflowReport};
use crate::{
    PREVIEW_PREFIX, RefusalLog, Screened, beat_heading, latest_section, prepare_beats, preview,
};
use tracing::{info, instrument};
use vellum_error::VellumResult;
use vellum_project::{DocumentKind, Project, SectionMarker, append_section};

/// Longest source-beat preview written above each draft block.
const PREVIEW_CHARS: usize = 160;

/// Options for [`draft`].
#[derive(Debug, Clone, Default)]
pub struct DraftOptions {
    /// Curated beats file inside the project; `beats_final.md` when absent
    pub beats_file: Option<String>,
    /// Channel key; the configured default when absent
    pub channel: Option<String>,
    /// Request B-roll shot lists where the channel supports them
    pub broll: bool,
    /// Print the plan without calling the service or writing
    pub dry_run: bool,
    /// Repair drifting beat numbers instead of failing
    pub renumber: bool,
}

/// Build Draft 0 in `script.md`, one `## Beat N` block per curated beat.
///
/// Beats are expanded strictly in order and written only once every beat
/// has an answer. A refused beat keeps its source text as the block body
/// and is listed in the sidecar.
#[instrument(skip(ctx, project, options), fields(project = %project.name()))]
pub async fn draft(
    ctx: &GenerationContext<'_>,
    project: &Project,
    options: &DraftOptions,
) -> VellumResult<WorkflowReport> {
    let prompts = ctx.prompts(options.channel.as_deref())?;
    let beats_file = options
        .beats_file
        .as_deref()
        .unwrap_or(DocumentKind::BeatsFinal.file_name());
    let document = project.read_file(beats_file, DocumentKind::BeatsFinal.remedy())?;
    let section = latest_section(&document, &SectionMarker::CuratedBeats.to_string());
    let beats = prepare_beats(section, beats_file, options.renumber)?;

    if options.dry_run {
        let plan = beats
            .iter()
            .map(|b| format!("Beat {}: {}", b.index(), preview(b.text(), PREVIEW_CHARS)))
            .collect::<Vec<_>>()
            .join("\n");
        let plan = format!(
            "Would expand {} beats from {} into {} ({}):\n{}",
            beats.len(),
            beats_file,
            DocumentKind::Script.file_name(),
            prompts.style().display_name(),
            plan
        );
        return Ok(WorkflowReport::planned(plan));
    }

    ctx.driver()?;
    let mut refusals = RefusalLog::new();
    let mut expanded = Vec::with_capacity(beats.len());
    for beat in &beats {
        info!(beat = beat.index(), total = beats.len(), "Expanding beat");
        let request = prompts.expand(beat.text(), options.broll)?;
        let body = match ctx.generate_screened(&request).await? {
            Screened::Accepted(text) => text.trim().to_string(),
            Screened::Refused(refusal) => {
                refusals.record(format!("Beat {}", beat.index()), refusal);
                beat.text().to_string()
            }
        };
        expanded.push((beat, body));
    }

    let path = project.append(
        SectionMarker::Draft,
        &format!("{} | {} beats", beats_file, beats.len()),
        &format!("Draft 0 expanded from {} curated beats.", beats.len()),
    )?;
    for (beat, body) in &expanded {
        append_section(
            &path,
            &format!("{} {}", PREVIEW_PREFIX, preview(beat.text(), PREVIEW_CHARS)),
            &format!("{}\n\n{}", beat_heading(*beat.index()), body),
        )?;
    }

    let sidecar = refusals.write_sidecar(&path, "draft")?;
    let refused = refusals.labels().into_iter().map(String::from).collect();
    Ok(WorkflowReport::written(path, beats.len()).with_refusals(refused, sidecar))
}
