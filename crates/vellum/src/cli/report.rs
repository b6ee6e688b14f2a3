//! Rendering outcomes and errors for the operator.

use tracing::{debug, warn};
use vellum_error::{VellumError, VellumErrorKind};
use vellum_narrative::{Screened, WorkflowReport};

/// Operator-facing message for an error, without source locations.
///
/// # Examples
///
/// ```
/// use vellum::{NarrativeError, NarrativeErrorKind, VellumError};
/// use vellum::cli::render_error;
///
/// let err = VellumError::from(NarrativeError::new(NarrativeErrorKind::EmptyInput(
///     "The idea must not be empty".to_string(),
/// )));
/// assert_eq!(render_error(&err), "Empty input: The idea must not be empty");
/// ```
pub fn render_error(err: &VellumError) -> String {
    match err.kind() {
        VellumErrorKind::Config(e) => e.message.clone(),
        VellumErrorKind::Builder(e) => e.kind().to_string(),
        VellumErrorKind::Models(e) => e.kind.to_string(),
        VellumErrorKind::Project(e) => e.kind.to_string(),
        VellumErrorKind::Narrative(e) => e.kind.to_string(),
    }
}

/// Print an error to stderr; the full error, location included, goes to the debug log.
pub fn report_error(err: &VellumError) {
    debug!(error = %err, "Command failed");
    eprintln!("error: {}", render_error(err));
}

/// Print generated text, or note a refusal.
pub fn print_screened(screened: &Screened) {
    match screened {
        Screened::Accepted(text) => println!("{}", text),
        Screened::Refused(refusal) => {
            warn!(trigger = %refusal.trigger(), "Service refused the request");
            println!("The service declined this request: {}", refusal.excerpt());
        }
    }
}

/// Summarize a workflow run.
pub fn print_report(report: &WorkflowReport) {
    if let Some(plan) = report.plan() {
        println!("{}", plan);
        println!("(dry run: nothing sent, nothing written)");
        return;
    }
    if let Some(path) = report.output() {
        println!("Saved {} section(s) to {}", report.sections(), path.display());
    }
    if !report.refused().is_empty() {
        println!("Refused and left untouched: {}", report.refused().join(", "));
    }
    if let Some(sidecar) = report.sidecar() {
        println!("Refusal details: {}", sidecar.display());
    }
}
