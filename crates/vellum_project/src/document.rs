//! Document catalog, section markers and the append-only writer.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument};
use vellum_error::{ProjectError, ProjectErrorKind, VellumResult};

/// Markdown documents a project accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
pub enum DocumentKind {
    /// Generated outlines
    #[strum(serialize = "outline.md")]
    Outline,
    /// Beat expansions and Draft 0
    #[strum(serialize = "script.md")]
    Script,
    /// Saved ideas and alternative treatments
    #[strum(serialize = "concepts.md")]
    Concepts,
    /// Curated beat lists
    #[strum(serialize = "beats_final.md")]
    BeatsFinal,
    /// Editorial notes with sentence swaps
    #[strum(serialize = "script_polish_notes.md")]
    PolishNotes,
    /// Rewritten or tightened drafts
    #[strum(serialize = "script_polished.md")]
    Polished,
    /// Recording-ready narration
    #[strum(serialize = "script_narration_final.md")]
    NarrationFinal,
    /// Title, description, tags and thumbnails
    #[strum(serialize = "publish_pack.md")]
    PublishPack,
}

impl DocumentKind {
    /// File name inside the project folder.
    pub fn file_name(&self) -> &'static str {
        (*self).into()
    }

    /// Command that produces this document, shown when it is missing.
    pub fn remedy(&self) -> &'static str {
        match self {
            DocumentKind::Outline => "vellum add-outline <project> <seed>",
            DocumentKind::Script => "vellum draft <project>",
            DocumentKind::Concepts => "vellum idea <project> <text>",
            DocumentKind::BeatsFinal => "vellum curate <project>",
            DocumentKind::PolishNotes => "vellum polish <project> --mode notes",
            DocumentKind::Polished => "vellum polish <project> --mode rewrite",
            DocumentKind::NarrationFinal => "vellum finalize <project>",
            DocumentKind::PublishPack => "vellum publish <project>",
        }
    }
}

/// Marker text that opens each appended section.
///
/// The latest section of a document starts at the last line containing
/// its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum SectionMarker {
    /// Outline appended by `add-outline`
    #[strum(serialize = "AUTO-GENERATED OUTLINE")]
    Outline,
    /// Single beat expansion appended by `add-beat`
    #[strum(serialize = "AUTO-GENERATED BEAT")]
    Beat,
    /// Full draft built from curated beats
    #[strum(serialize = "DRAFT 0")]
    Draft,
    /// Curated, renumbered beat list
    #[strum(serialize = "CURATED BEATS")]
    CuratedBeats,
    /// Editorial notes per beat
    #[strum(serialize = "POLISH NOTES")]
    PolishNotes,
    /// Rewritten or tightened draft
    #[strum(serialize = "POLISHED SCRIPT")]
    PolishedScript,
    /// Narration-only script
    #[strum(serialize = "FINAL NARRATION")]
    FinalNarration,
    /// Metadata and thumbnail concepts
    #[strum(serialize = "PUBLISH PACK")]
    PublishPack,
    /// Operator-saved idea
    #[strum(serialize = "SAVED IDEA")]
    SavedIdea,
    /// Generated alternative treatments
    #[strum(serialize = "ALTERNATIVE TREATMENTS")]
    Treatments,
}

impl SectionMarker {
    /// Document this marker's sections are appended to.
    pub fn document(&self) -> DocumentKind {
        match self {
            SectionMarker::Outline => DocumentKind::Outline,
            SectionMarker::Beat | SectionMarker::Draft => DocumentKind::Script,
            SectionMarker::CuratedBeats => DocumentKind::BeatsFinal,
            SectionMarker::PolishNotes => DocumentKind::PolishNotes,
            SectionMarker::PolishedScript => DocumentKind::Polished,
            SectionMarker::FinalNarration => DocumentKind::NarrationFinal,
            SectionMarker::PublishPack => DocumentKind::PublishPack,
            SectionMarker::SavedIdea | SectionMarker::Treatments => DocumentKind::Concepts,
        }
    }
}

/// Build a section header line: `## <MARKER> | <YYYY-MM-DD HH:MM:SS> | <detail>`.
///
/// # Examples
///
/// ```
/// use vellum_project::{SectionMarker, section_header};
///
/// let header = section_header(SectionMarker::Outline, "seed: a humming tower");
/// assert!(header.starts_with("## AUTO-GENERATED OUTLINE | "));
/// assert!(header.ends_with(" | seed: a humming tower"));
/// ```
pub fn section_header(marker: SectionMarker, detail: &str) -> String {
    labelled_header(&marker.to_string(), detail)
}

/// Header line for a section outside the marker catalog, such as a sidecar.
pub fn labelled_header(label: &str, detail: &str) -> String {
    format!(
        "## {} | {} | {}",
        label,
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        detail
    )
}

/// Append a section to a document, creating the file if needed.
///
/// Writes a `---` separator, the header, a blank line, the body and a
/// trailing newline. Existing content is never touched.
#[instrument(skip_all, fields(path = %path.display(), body_len = body.len()))]
pub fn append_section(path: &Path, header: &str, body: &str) -> VellumResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ProjectError::new(ProjectErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

    write!(file, "\n\n---\n\n{}\n\n{}\n", header, body).map_err(|e| {
        ProjectError::new(ProjectErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    debug!("Appended section");
    Ok(())
}

/// Read a whole document as UTF-8.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_document(path: &Path) -> VellumResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ProjectError::new(ProjectErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}
