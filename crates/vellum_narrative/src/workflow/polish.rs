//! `polish`: per-beat editorial passes over the latest draft.

use super::notes::latest_blocks;
use super::{GenerationContext, WorkflowReport};
use crate::{RefusalLog, Screened, beat_heading};
use std::str::FromStr;
use strum::VariantNames;
use tracing::{info, instrument};
use vellum_error::{NarrativeError, NarrativeErrorKind, VellumError, VellumResult};
use vellum_project::{DocumentKind, Project, SectionMarker, append_section};

/// Kind of polish pass.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum PolishMode {
    /// Editorial notes with sentence swaps
    #[default]
    Notes,
    /// Full rewrite for rhythm and clarity
    Rewrite,
    /// Cut by about a quarter
    Tighten,
}

impl PolishMode {
    /// Parse a mode name, listing the valid choices on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_narrative::PolishMode;
    ///
    /// assert_eq!(PolishMode::parse("tighten").unwrap(), PolishMode::Tighten);
    /// let err = PolishMode::parse("shorten").unwrap_err();
    /// assert!(err.to_string().contains("notes, rewrite, tighten"));
    /// ```
    pub fn parse(value: &str) -> VellumResult<Self> {
        Self::from_str(value.trim()).map_err(|_| {
            VellumError::from(NarrativeError::new(NarrativeErrorKind::UnknownPolishMode {
                given: value.to_string(),
                valid: Self::VARIANTS.join(", "),
            }))
        })
    }

    /// Section marker the pass appends under.
    pub fn marker(&self) -> SectionMarker {
        match self {
            PolishMode::Notes => SectionMarker::PolishNotes,
            PolishMode::Rewrite | PolishMode::Tighten => SectionMarker::PolishedScript,
        }
    }

    /// Document the pass appends to.
    pub fn document(&self) -> DocumentKind {
        self.marker().document()
    }
}

/// Options for [`polish`].
#[derive(Debug, Clone, Default)]
pub struct PolishOptions {
    /// Kind of pass
    pub mode: PolishMode,
    /// Channel key; the configured default when absent
    pub channel: Option<String>,
    /// Print the plan without calling the service or writing
    pub dry_run: bool,
}

/// Polish each beat block of the latest Draft 0.
///
/// Nothing is written unless every beat gets an answer. A refused beat is
/// left untouched: notes skip it, rewrites keep the draft text. Refused beats are listed in the sidecar.
#[instrument(skip(ctx, project, options), fields(project = %project.name(), mode = %options.mode))]
pub async fn polish(
    ctx: &GenerationContext<'_>,
    project: &Project,
    options: &PolishOptions,
) -> VellumResult<WorkflowReport> {
    let prompts = ctx.prompts(options.channel.as_deref())?;
    let script = project.read(DocumentKind::Script)?;
    let blocks = latest_blocks(&script, SectionMarker::Draft, DocumentKind::Script.file_name())?;
    let mode = options.mode;

    if options.dry_run {
        let numbers = blocks
            .iter()
            .map(|b| b.number().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Ok(WorkflowReport::planned(format!(
            "Would run a {} pass over beats {} into {}",
            mode,
            numbers,
            mode.document().file_name()
        )));
    }

    ctx.driver()?;
    let mut refusals = RefusalLog::new();
    let mut polished = Vec::with_capacity(blocks.len());
    for block in &blocks {
        info!(beat = block.number(), total = blocks.len(), "Polishing beat");
        let request = prompts.polish(mode, *block.number(), block.body())?;
        match ctx.generate_screened(&request).await? {
            Screened::Accepted(text) => polished.push((*block.number(), text.trim().to_string())),
            Screened::Refused(refusal) => {
                refusals.record(format!("Beat {}", block.number()), refusal);
                match mode {
                    PolishMode::Notes => {}
                    PolishMode::Rewrite | PolishMode::Tighten => {
                        polished.push((*block.number(), block.body().clone()))
                    }
                }
            }
        }
    }

    let path = project.append(
        mode.marker(),
        &format!("mode: {} | {} beats", mode, blocks.len()),
        &format!("{} pass over the latest Draft 0.", mode),
    )?;
    for (number, body) in &polished {
        append_section(&path, &beat_heading(*number), body)?;
    }
    let written = polished.len();

    let sidecar = refusals.write_sidecar(&path, &format!("polish --mode {}", mode))?;
    let refused = refusals.labels().into_iter().map(String::from).collect();
    Ok(WorkflowReport::written(path, written).with_refusals(refused, sidecar))
}
