//! Project folders and append-only markdown documents.
//!
//! A project is a folder under the projects root holding markdown
//! documents. This crate finds and creates those folders and writes to the
//! documents under one rule: existing content is never rewritten, new
//! material is appended as a timestamped section.
//!
//! # Example
//!
//! ```no_run
//! use vellum_core::ProjectType;
//! use vellum_project::{DocumentKind, ProjectLocator, SectionMarker, create_project};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let locator = ProjectLocator::new("/home/me/Projects");
//! create_project(locator.root(), "Hush Pulse Initiative", ProjectType::Shrouded)?;
//!
//! let project = locator.locate("Hush Pulse Initiative")?;
//! project.append(SectionMarker::SavedIdea, "manual", "A radio tower hums at night.")?;
//! let concepts = project.read(DocumentKind::Concepts)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod locator;
mod scaffold;
mod slug;

pub use document::{
    DocumentKind, SectionMarker, append_section, labelled_header, read_document, section_header,
};
pub use locator::{PROJECTS_ROOT_ENV, Project, ProjectLocator, default_projects_root};
pub use scaffold::{create_project, parse_project_type, template_files};
pub use slug::{nonempty_slug, slug};
