//! Summary of what a command did.

use std::path::PathBuf;

/// Outcome of a workflow command, for the CLI to print.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct WorkflowReport {
    /// Document that received new sections
    output: Option<PathBuf>,
    /// Beats or sections written
    sections: usize,
    /// Labels of sections the service refused
    refused: Vec<String>,
    /// Refusal sidecar, when one was written
    sidecar: Option<PathBuf>,
    /// Planned work, for dry runs
    plan: Option<String>,
    /// Generated text worth echoing to the operator
    text: Option<String>,
}

impl WorkflowReport {
    /// Report of a dry run: nothing sent, nothing written.
    pub fn planned(plan: impl Into<String>) -> Self {
        Self {
            plan: Some(plan.into()),
            ..Self::default()
        }
    }

    /// Report of written output.
    pub fn written(output: PathBuf, sections: usize) -> Self {
        Self {
            output: Some(output),
            sections,
            ..Self::default()
        }
    }

    /// Attach refusal bookkeeping.
    pub fn with_refusals(mut self, refused: Vec<String>, sidecar: Option<PathBuf>) -> Self {
        self.refused = refused;
        self.sidecar = sidecar;
        self
    }

    /// Attach generated text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Whether this was a dry run.
    pub fn is_dry_run(&self) -> bool {
        self.plan.is_some()
    }
}
