//! Projects root resolution and project lookup.

use crate::{DocumentKind, SectionMarker, append_section, nonempty_slug, read_document, section_header};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use vellum_error::{ProjectError, ProjectErrorKind, VellumResult};

/// Environment variable that overrides the configured projects root.
pub const PROJECTS_ROOT_ENV: &str = "VELLUM_PROJECTS_ROOT";

/// `Projects` folder beside the directory holding the running executable.
pub fn default_projects_root() -> VellumResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| {
        ProjectError::new(ProjectErrorKind::DirectoryCreation(format!(
            "cannot determine executable location: {}",
            e
        )))
    })?;
    let exe_dir = exe.parent().unwrap_or(Path::new("."));
    Ok(exe_dir.parent().unwrap_or(exe_dir).join("Projects"))
}

/// Pick the first configured root in precedence order.
fn choose_root(
    cli: Option<PathBuf>,
    env: Option<OsString>,
    config: Option<PathBuf>,
) -> Option<PathBuf> {
    cli.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or(config)
}

/// Finds project folders under a projects root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocator {
    root: PathBuf,
}

impl ProjectLocator {
    /// Locator over an explicit root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the root from, in order: the command-line flag, the
    /// `VELLUM_PROJECTS_ROOT` variable, configuration, and the default
    /// beside the executable.
    #[instrument]
    pub fn resolve(cli: Option<PathBuf>, config: Option<PathBuf>) -> VellumResult<Self> {
        let root = match choose_root(cli, std::env::var_os(PROJECTS_ROOT_ENV), config) {
            Some(root) => root,
            None => default_projects_root()?,
        };
        debug!(root = %root.display(), "Resolved projects root");
        Ok(Self { root })
    }

    /// The projects root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find an existing project folder.
    ///
    /// Tries `root/slug(name)` first, then `root/name`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectErrorKind::EmptyName`] for a blank name and
    /// [`ProjectErrorKind::NotFound`] naming both candidates.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn locate(&self, name: &str) -> VellumResult<Project> {
        let slugged = self.root.join(nonempty_slug(name)?);
        let raw = self.root.join(name);

        for candidate in [&slugged, &raw] {
            if candidate.is_dir() {
                debug!(dir = %candidate.display(), "Located project");
                return Ok(Project {
                    name: name.trim().to_string(),
                    dir: candidate.clone(),
                });
            }
        }

        Err(ProjectError::new(ProjectErrorKind::NotFound {
            slugged: slugged.display().to_string(),
            raw: raw.display().to_string(),
        })
        .into())
    }
}

/// An existing project folder.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Project {
    /// Name as given by the operator, trimmed
    name: String,
    /// Folder on disk
    dir: PathBuf,
}

impl Project {
    /// Wrap a folder that is already known to exist.
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }

    /// Path of a catalogued document.
    pub fn path(&self, kind: DocumentKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Path of an arbitrary file inside the project.
    pub fn file(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Whether a catalogued document exists yet.
    pub fn has(&self, kind: DocumentKind) -> bool {
        self.path(kind).is_file()
    }

    /// Read a catalogued document.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectErrorKind::DocumentMissing`] with the command that
    /// creates the document.
    pub fn read(&self, kind: DocumentKind) -> VellumResult<String> {
        self.read_file(kind.file_name(), kind.remedy())
    }

    /// Read any file inside the project, naming `remedy` if it is missing.
    pub fn read_file(&self, file_name: &str, remedy: &str) -> VellumResult<String> {
        let path = self.file(file_name);
        if !path.is_file() {
            return Err(ProjectError::new(ProjectErrorKind::DocumentMissing {
                path: path.display().to_string(),
                remedy: remedy.to_string(),
            })
            .into());
        }
        read_document(&path)
    }

    /// Append a timestamped section to the marker's document.
    pub fn append(&self, marker: SectionMarker, detail: &str, body: &str) -> VellumResult<PathBuf> {
        self.append_to(marker.document().file_name(), marker, detail, body)
    }

    /// Append a timestamped section to a named file inside the project.
    pub fn append_to(
        &self,
        file_name: &str,
        marker: SectionMarker,
        detail: &str,
        body: &str,
    ) -> VellumResult<PathBuf> {
        let path = self.file(file_name);
        append_section(&path, &section_header(marker, detail), body)?;
        info!(path = %path.display(), marker = %marker, "Saved section");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_precedence() {
        let cli = Some(PathBuf::from("/cli"));
        let env = Some(OsString::from("/env"));
        let config = Some(PathBuf::from("/config"));

        assert_eq!(
            choose_root(cli.clone(), env.clone(), config.clone()),
            Some(PathBuf::from("/cli"))
        );
        assert_eq!(
            choose_root(None, env.clone(), config.clone()),
            Some(PathBuf::from("/env"))
        );
        assert_eq!(
            choose_root(None, Some(OsString::new()), config.clone()),
            Some(PathBuf::from("/config"))
        );
        assert_eq!(choose_root(None, None, None), None);
    }

    #[test]
    fn test_default_root_is_named_projects() {
        let root = default_projects_root().unwrap();
        assert_eq!(root.file_name().and_then(|n| n.to_str()), Some("Projects"));
    }
}
