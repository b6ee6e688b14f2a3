//! Refusal detection and the refusal sidecar.

use std::path::{Path, PathBuf};
use tracing::warn;
use vellum_core::GenerateResponse;
use vellum_error::VellumResult;
use vellum_project::{append_section, labelled_header};

/// Phrases that mark an apologetic or declining reply.
const REFUSAL_PHRASES: [&str; 7] = [
    "i'm sorry",
    "i am sorry",
    "cannot assist",
    "can't assist",
    "can't help with",
    "unable to help with",
    "policy",
];

/// Only the opening of a reply is scanned; refusals lead with the apology.
const SCAN_CHARS: usize = 400;

/// Why a reply was treated as a refusal.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Refusal {
    /// Matched phrase, or `explicit` when the service flagged the refusal itself
    trigger: String,
    /// Start of the reply, for the sidecar
    excerpt: String,
}

/// A reply after refusal screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screened {
    /// Usable text
    Accepted(String),
    /// The service declined
    Refused(Refusal),
}

fn excerpt(text: &str) -> String {
    crate::preview(text, 200)
}

/// Scan reply text for refusal phrases, case-insensitively.
///
/// # Examples
///
/// ```
/// use vellum_narrative::detect_refusal;
///
/// assert!(detect_refusal("I'm sorry, but I can't help with that request.").is_some());
/// assert!(detect_refusal("The tower hums at night.").is_none());
/// ```
pub fn detect_refusal(text: &str) -> Option<Refusal> {
    let opening: String = text.chars().take(SCAN_CHARS).collect::<String>().to_lowercase();
    let opening = opening.replace('’', "'");
    REFUSAL_PHRASES
        .iter()
        .find(|phrase| opening.contains(*phrase))
        .map(|phrase| Refusal {
            trigger: (*phrase).to_string(),
            excerpt: excerpt(text),
        })
}

/// Screen a response: explicit refusals first, then the phrase heuristic.
pub fn screen(response: &GenerateResponse) -> Screened {
    if let Some(reason) = response.refusal() {
        return Screened::Refused(Refusal {
            trigger: "explicit".to_string(),
            excerpt: excerpt(reason),
        });
    }
    let text = response.text();
    match detect_refusal(&text) {
        Some(refusal) => Screened::Refused(refusal),
        None => Screened::Accepted(text),
    }
}

/// Refused sections collected during one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefusalLog {
    entries: Vec<(String, Refusal)>,
}

impl RefusalLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a refused section and log it.
    pub fn record(&mut self, label: impl Into<String>, refusal: Refusal) {
        let label = label.into();
        warn!(section = %label, trigger = %refusal.trigger, "Service refused section, leaving it untouched");
        self.entries.push((label, refusal));
    }

    /// Whether nothing was refused.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of refused sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Labels of refused sections, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// Markdown list of refused sections.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(label, refusal)| {
                format!(
                    "- **{}** (matched `{}`): {}",
                    label, refusal.trigger, refusal.excerpt
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `<stem>_refusals.md` beside the output document.
    pub fn sidecar_path(output: &Path) -> PathBuf {
        let stem = output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        output.with_file_name(format!("{}_refusals.md", stem))
    }

    /// Append the log to the sidecar of `output`, if anything was refused.
    ///
    /// `detail` names the command run, for the section header.
    pub fn write_sidecar(&self, output: &Path, detail: &str) -> VellumResult<Option<PathBuf>> {
        if self.is_empty() {
            return Ok(None);
        }
        let path = Self::sidecar_path(output);
        append_section(&path, &labelled_header("REFUSALS", detail), &self.render())?;
        warn!(path = %path.display(), refused = self.len(), "Wrote refusal sidecar");
        Ok(Some(path))
    }
}
