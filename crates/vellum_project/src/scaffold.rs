//! Starter folders for new projects.

use crate::nonempty_slug;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};
use vellum_core::ProjectType;
use vellum_error::{ProjectError, ProjectErrorKind, VellumResult};

/// Subfolders every project receives.
const SUBFOLDERS: [&str; 2] = ["assets", "research"];

const SHROUDED: &[(&str, &str)] = &[
    ("outline.md", include_str!("../templates/shrouded/outline.md")),
    ("script.md", include_str!("../templates/shrouded/script.md")),
    ("broll_notes.md", include_str!("../templates/shrouded/broll_notes.md")),
    ("metadata.md", include_str!("../templates/shrouded/metadata.md")),
    ("notes.md", include_str!("../templates/shrouded/notes.md")),
];

const APERTURE: &[(&str, &str)] = &[
    ("outline.md", include_str!("../templates/aperture/outline.md")),
    ("image_ideas.md", include_str!("../templates/aperture/image_ideas.md")),
    ("audio_notes.md", include_str!("../templates/aperture/audio_notes.md")),
    ("edit_notes.md", include_str!("../templates/aperture/edit_notes.md")),
];

const NOVEL: &[(&str, &str)] = &[
    ("outline.md", include_str!("../templates/novel/outline.md")),
    ("characters.md", include_str!("../templates/novel/characters.md")),
    ("worldbuilding.md", include_str!("../templates/novel/worldbuilding.md")),
    ("chapters.md", include_str!("../templates/novel/chapters.md")),
    ("themes.md", include_str!("../templates/novel/themes.md")),
];

/// Template files for a project type, as `(file name, contents)` with a
/// `{title}` placeholder.
pub fn template_files(project_type: ProjectType) -> &'static [(&'static str, &'static str)] {
    match project_type {
        ProjectType::Shrouded => SHROUDED,
        ProjectType::Aperture => APERTURE,
        ProjectType::Novel => NOVEL,
    }
}

/// Parse a project type name, listing the valid choices on failure.
///
/// # Examples
///
/// ```
/// use vellum_core::ProjectType;
/// use vellum_project::parse_project_type;
///
/// assert_eq!(parse_project_type("aperture").unwrap(), ProjectType::Aperture);
/// let err = parse_project_type("podcast").unwrap_err();
/// assert!(err.to_string().contains("shrouded, aperture, novel"));
/// ```
pub fn parse_project_type(value: &str) -> VellumResult<ProjectType> {
    ProjectType::from_str(value).map_err(|_| {
        ProjectError::new(ProjectErrorKind::UnknownProjectType {
            given: value.to_string(),
            valid: ProjectType::valid_choices(),
        })
        .into()
    })
}

fn create_dir(path: &Path) -> VellumResult<()> {
    std::fs::create_dir_all(path).map_err(|e| {
        ProjectError::new(ProjectErrorKind::DirectoryCreation(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}

/// Create a project folder with starter documents.
///
/// Creates the root if needed, then `root/slug(name)`, the `assets/` and
/// `research/` subfolders, and each template file that does not exist yet.
/// Running it again never overwrites edited files.
#[instrument(skip(root), fields(root = %root.display()))]
pub fn create_project(root: &Path, name: &str, project_type: ProjectType) -> VellumResult<PathBuf> {
    let title = name.trim();
    let dir = root.join(nonempty_slug(name)?);

    create_dir(&dir)?;
    for sub in SUBFOLDERS {
        create_dir(&dir.join(sub))?;
    }

    for (file_name, template) in template_files(project_type) {
        let path = dir.join(file_name);
        if path.exists() {
            debug!(file = file_name, "Keeping existing file");
            continue;
        }
        std::fs::write(&path, template.replace("{title}", title)).map_err(|e| {
            ProjectError::new(ProjectErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        debug!(file = file_name, "Wrote template");
    }

    info!(dir = %dir.display(), %project_type, "Project ready");
    Ok(dir)
}
