//! Commands that read project documents, call the service and append results.
//!
//! Every command processes beats strictly in order, awaiting one remote call
//! at a time, and writes through the append-only document layer.

mod context;
mod curate;
mod draft;
mod finalize;
mod generate;
mod notes;
mod polish;
mod publish;
mod report;

pub use context::GenerationContext;
pub use curate::{CurateOptions, CurationMode, curate};
pub use draft::{DraftOptions, draft};
pub use finalize::{FinalizeOptions, finalize};
pub use generate::{
    AddBeatOptions, add_beat, add_outline, generate_expansion, generate_metadata, generate_outline,
    generate_thumbnails, generate_treatments, save_idea, save_treatments,
};
pub use polish::{PolishMode, PolishOptions, polish};
pub use publish::{PublishOptions, publish};
pub use report::WorkflowReport;
