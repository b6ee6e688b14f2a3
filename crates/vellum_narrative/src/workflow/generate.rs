//! Single-shot generation: printed results and single appended sections.

use super::{GenerationContext, WorkflowReport};
use crate::{
    RefusalLog, Screened, beat_heading, latest_section, prepare_beats, preview, without_header,
};
use tracing::{info, instrument, warn};
use vellum_error::{NarrativeError, NarrativeErrorKind, VellumResult};
use vellum_project::{DocumentKind, Project, SectionMarker};

fn require_text<'t>(text: &'t str, what: &str) -> VellumResult<&'t str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NarrativeError::new(NarrativeErrorKind::EmptyInput(format!(
            "{} must not be empty",
            what
        )))
        .into());
    }
    Ok(text)
}

fn seed_detail(ctx: &GenerationContext<'_>, channel: Option<&str>, seed: &str) -> String {
    let channel = channel.unwrap_or(&ctx.config().projects.default_channel);
    format!("{} | seed: {}", channel, preview(seed, 80))
}

/// Generate a numbered outline from a seed idea.
#[instrument(skip(ctx, seed), fields(seed_len = seed.len()))]
pub async fn generate_outline(
    ctx: &GenerationContext<'_>,
    channel: Option<&str>,
    seed: &str,
    beats: u32,
) -> VellumResult<Screened> {
    let seed = require_text(seed, "The story seed")?;
    let request = ctx.prompts(channel)?.outline(seed, beats)?;
    ctx.generate_screened(&request).await
}

/// Generate alternative treatments of a seed idea.
#[instrument(skip(ctx, seed), fields(seed_len = seed.len()))]
pub async fn generate_treatments(
    ctx: &GenerationContext<'_>,
    channel: Option<&str>,
    seed: &str,
    count: u32,
) -> VellumResult<Screened> {
    let seed = require_text(seed, "The seed idea")?;
    let request = ctx.prompts(channel)?.treatments(seed, count)?;
    ctx.generate_screened(&request).await
}

/// Generate title, description, tags and hashtags.
#[instrument(skip(ctx, seed), fields(seed_len = seed.len()))]
pub async fn generate_metadata(
    ctx: &GenerationContext<'_>,
    channel: Option<&str>,
    seed: &str,
) -> VellumResult<Screened> {
    let seed = require_text(seed, "The video concept")?;
    let request = ctx.prompts(channel)?.metadata(seed)?;
    ctx.generate_screened(&request).await
}

/// Expand one beat into narration.
#[instrument(skip(ctx, beat), fields(beat_len = beat.len()))]
pub async fn generate_expansion(
    ctx: &GenerationContext<'_>,
    channel: Option<&str>,
    beat: &str,
    broll: bool,
) -> VellumResult<Screened> {
    let beat = require_text(beat, "The beat")?;
    let request = ctx.prompts(channel)?.expand(beat, broll)?;
    ctx.generate_screened(&request).await
}

/// Generate thumbnail concepts.
#[instrument(skip(ctx, seed), fields(seed_len = seed.len()))]
pub async fn generate_thumbnails(
    ctx: &GenerationContext<'_>,
    channel: Option<&str>,
    seed: &str,
) -> VellumResult<Screened> {
    let seed = require_text(seed, "The seed idea")?;
    let request = ctx.prompts(channel)?.thumbnails(seed)?;
    ctx.generate_screened(&request).await
}

/// Append a single generated section, or log the refusal to the sidecar.
fn save_screened(
    project: &Project,
    marker: SectionMarker,
    detail: &str,
    label: &str,
    screened: Screened,
) -> VellumResult<WorkflowReport> {
    match screened {
        Screened::Accepted(text) => {
            let path = project.append(marker, detail, &text)?;
            Ok(WorkflowReport::written(path, 1).with_text(text))
        }
        Screened::Refused(refusal) => {
            let mut log = RefusalLog::new();
            log.record(label, refusal);
            let output = project.path(marker.document());
            let sidecar = log.write_sidecar(&output, detail)?;
            Ok(WorkflowReport::default().with_refusals(vec![label.to_string()], sidecar))
        }
    }
}

/// Generate an outline and append it to `outline.md`.
#[instrument(skip(ctx, project, seed), fields(project = %project.name()))]
pub async fn add_outline(
    ctx: &GenerationContext<'_>,
    project: &Project,
    channel: Option<&str>,
    seed: &str,
    beats: u32,
) -> VellumResult<WorkflowReport> {
    let screened = generate_outline(ctx, channel, seed, beats).await?;
    let detail = seed_detail(ctx, channel, seed);
    save_screened(project, SectionMarker::Outline, &detail, "outline", screened)
}

/// Generate treatments and append them to `concepts.md`.
#[instrument(skip(ctx, project, seed), fields(project = %project.name()))]
pub async fn save_treatments(
    ctx: &GenerationContext<'_>,
    project: &Project,
    channel: Option<&str>,
    seed: &str,
    count: u32,
) -> VellumResult<WorkflowReport> {
    let screened = generate_treatments(ctx, channel, seed, count).await?;
    let detail = seed_detail(ctx, channel, seed);
    save_screened(project, SectionMarker::Treatments, &detail, "treatments", screened)
}

/// Save an operator idea to `concepts.md`.
///
/// # Errors
///
/// Returns [`NarrativeErrorKind::EmptyInput`] for a blank idea.
pub fn save_idea(project: &Project, idea: &str) -> VellumResult<WorkflowReport> {
    let idea = require_text(idea, "The idea")?;
    let path = project.append(SectionMarker::SavedIdea, "manual", idea)?;
    Ok(WorkflowReport::written(path, 1))
}

/// Options for [`add_beat`].
#[derive(Debug, Clone, Default)]
pub struct AddBeatOptions {
    /// Channel key; the configured default when absent
    pub channel: Option<String>,
    /// Request a B-roll shot list where the channel supports one
    pub broll: bool,
    /// Repair drifting beat numbers instead of failing
    pub renumber: bool,
}

/// Expand beat `number` of the latest outline and append it to `script.md`.
///
/// # Errors
///
/// Fails when `outline.md` is missing, holds no beats, or has no beat
/// with that number.
#[instrument(skip(ctx, project, options), fields(project = %project.name()))]
pub async fn add_beat(
    ctx: &GenerationContext<'_>,
    project: &Project,
    number: u32,
    options: &AddBeatOptions,
) -> VellumResult<WorkflowReport> {
    let prompts = ctx.prompts(options.channel.as_deref())?;
    let outline = latest_outline_body(project)?;
    let beats = prepare_beats(&outline, DocumentKind::Outline.file_name(), options.renumber)?;

    let beat = beats.iter().find(|b| *b.index() == number).ok_or_else(|| {
        NarrativeError::new(NarrativeErrorKind::BeatNotFound {
            number,
            available: beats.len(),
        })
    })?;
    info!(number, preview = %preview(beat.text(), 60), "Expanding beat");

    let request = prompts.expand(beat.text(), options.broll)?;
    let screened = ctx.generate_screened(&request).await?;
    let detail = format!("Beat {}", number);
    let screened = match screened {
        Screened::Accepted(text) => {
            Screened::Accepted(format!("{}\n\n{}", beat_heading(number), text.trim()))
        }
        refused => refused,
    };
    save_screened(project, SectionMarker::Beat, &detail, &detail, screened)
}

/// Text of the latest outline section without its header line.
pub(crate) fn latest_outline_body(project: &Project) -> VellumResult<String> {
    let outline = project.read(DocumentKind::Outline)?;
    let marker = SectionMarker::Outline.to_string();
    if !outline.contains(&marker) {
        warn!("No generated outline section found, reading the whole of outline.md");
        return Ok(outline);
    }
    Ok(without_header(latest_section(&outline, &marker)).to_string())
}
