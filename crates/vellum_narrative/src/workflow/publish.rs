//! `publish`: metadata and thumbnail concepts from the final narration.

use super::notes::latest_blocks;
use super::{GenerationContext, WorkflowReport};
use crate::{RefusalLog, Screened};
use tracing::{info, instrument};
use vellum_error::VellumResult;
use vellum_project::{DocumentKind, Project, SectionMarker};

/// Options for [`publish`].
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Channel key; the configured default when absent
    pub channel: Option<String>,
    /// Generate thumbnail concepts as well as metadata
    pub thumbnails: bool,
    /// Print the prompts without calling the service or writing
    pub dry_run: bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            channel: None,
            thumbnails: true,
            dry_run: false,
        }
    }
}

const REFUSED_NOTE: &str = "_The service declined this part. See the refusal sidecar._";

/// Build a publish pack from the latest final narration and append it to
/// `publish_pack.md`.
#[instrument(skip(ctx, project, options), fields(project = %project.name()))]
pub async fn publish(
    ctx: &GenerationContext<'_>,
    project: &Project,
    options: &PublishOptions,
) -> VellumResult<WorkflowReport> {
    let prompts = ctx.prompts(options.channel.as_deref())?;
    let narration = project.read(DocumentKind::NarrationFinal)?;
    let blocks = latest_blocks(
        &narration,
        SectionMarker::FinalNarration,
        DocumentKind::NarrationFinal.file_name(),
    )?;
    let script = blocks
        .iter()
        .map(|b| b.body().as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let metadata_request = prompts.metadata(&script)?;
    let thumbnail_request = if options.thumbnails {
        Some(prompts.thumbnails(&script)?)
    } else {
        None
    };

    if options.dry_run {
        let mut plan = format!("--- metadata prompt ---\n{}", metadata_request.prompt_text());
        if let Some(request) = &thumbnail_request {
            plan.push_str(&format!("\n\n--- thumbnail prompt ---\n{}", request.prompt_text()));
        }
        return Ok(WorkflowReport::planned(plan));
    }

    ctx.driver()?;
    let mut refusals = RefusalLog::new();

    info!(beats = blocks.len(), "Generating metadata");
    let metadata = match ctx.generate_screened(&metadata_request).await? {
        Screened::Accepted(text) => text.trim().to_string(),
        Screened::Refused(refusal) => {
            refusals.record("metadata", refusal);
            REFUSED_NOTE.to_string()
        }
    };
    let mut body = format!("### METADATA\n\n{}", metadata);

    if let Some(request) = &thumbnail_request {
        info!("Generating thumbnail concepts");
        let thumbnails = match ctx.generate_screened(request).await? {
            Screened::Accepted(text) => text.trim().to_string(),
            Screened::Refused(refusal) => {
                refusals.record("thumbnails", refusal);
                REFUSED_NOTE.to_string()
            }
        };
        body.push_str(&format!("\n\n### THUMBNAIL CONCEPTS\n\n{}", thumbnails));
    }

    let path = project.append(
        SectionMarker::PublishPack,
        &format!(
            "source: {} | {} beats",
            DocumentKind::NarrationFinal.file_name(),
            blocks.len()
        ),
        &body,
    )?;

    let sidecar = refusals.write_sidecar(&path, "publish")?;
    let refused = refusals.labels().into_iter().map(String::from).collect();
    Ok(WorkflowReport::written(path, 1).with_refusals(refused, sidecar))
}
