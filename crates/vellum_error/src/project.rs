//! Project directory and document error types.

/// Kinds of project errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProjectErrorKind {
    /// Neither the slugged nor the raw project folder exists
    #[display("Project not found. Tried:\n  {}\n  {}", slugged, raw)]
    NotFound {
        /// Candidate path built from the slugged name
        slugged: String,
        /// Candidate path built from the raw name
        raw: String,
    },
    /// Project name is blank after trimming
    #[display("Project name is empty")]
    EmptyName,
    /// A document a command depends on has not been created yet
    #[display("Missing document: {}\n  Run `{}` first.", path, remedy)]
    DocumentMissing {
        /// Path that was checked
        path: String,
        /// Command that produces the document
        remedy: String,
    },
    /// Failed to create a directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to read a document
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Failed to write or append to a document
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Project template type not recognized
    #[display("Unknown project type '{}'. Valid choices: {}", given, valid)]
    UnknownProjectType {
        /// Value supplied by the operator
        given: String,
        /// Comma-separated list of accepted values
        valid: String,
    },
}

/// Project error with location tracking.
///
/// # Examples
///
/// ```
/// use vellum_error::{ProjectError, ProjectErrorKind};
///
/// let err = ProjectError::new(ProjectErrorKind::FileRead("outline.md".to_string()));
/// assert!(format!("{}", err).contains("outline.md"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Project Error: {} at line {} in {}", kind, line, file)]
pub struct ProjectError {
    /// The kind of error that occurred
    pub kind: ProjectErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProjectError {
    /// Create a new project error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProjectErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
