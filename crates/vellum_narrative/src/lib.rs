//! Narrative extraction and generation workflows for Vellum.
//!
//! The parsers here read the conventions Vellum's documents follow:
//!
//! - numbered beats (`3. The third beat`) in outlines and curated lists,
//! - `## Beat N` blocks in drafts, notes and final narration,
//! - `### NARRATION:` headings inside expanded beats,
//! - `- Original: "..."` / `- Replacement: "..."` pairs in polish notes,
//! - apologetic openings that mark a refused generation.
//!
//! The [`workflow`] commands combine them with the project document layer
//! and a [`vellum_interface::VellumDriver`].
//!
//! # Example
//!
//! ```
//! use vellum_narrative::{apply_swaps, extract_narration, extract_swaps};
//!
//! let beat = "### 1) NARRATION:\nThe tower hummed.\n### 2) CLOSING BEAT:\nSilence.";
//! let notes = "- Original: \"The tower hummed.\"\n- Replacement: \"The tower kept humming.\"";
//!
//! let narration = extract_narration(beat).unwrap();
//! assert_eq!(apply_swaps(&narration, &extract_swaps(notes)), "The tower kept humming.");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod beats;
mod blocks;
mod curation;
mod narration;
mod prompts;
mod refusal;
mod sections;
mod swaps;
pub mod workflow;

pub use beats::{
    Beat, format_beats, parse_beats, prepare_beats, preview, renumber, require_beats,
    validate_numbering,
};
pub use blocks::{BeatBlock, PREVIEW_PREFIX, beat_heading, split_beat_blocks};
pub use curation::{curate_interactive, parse_selection, select_beats};
pub use narration::extract_narration;
pub use prompts::{PromptBuilder, render_template};
pub use refusal::{Refusal, RefusalLog, Screened, detect_refusal, screen};
pub use sections::{latest_section, without_header};
pub use swaps::{SentenceSwap, apply_swaps, apply_swaps_counted, extract_swaps};
pub use workflow::{GenerationContext, PolishMode, WorkflowReport};
