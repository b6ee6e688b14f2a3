//! Narrative parsing and workflow error types.

/// Specific error conditions for narrative operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NarrativeErrorKind {
    /// A parse step found no numbered beats
    #[display(
        "No beats found in {}. Expected numbered lines such as:\n  1. The first beat\n  2. The second beat",
        _0
    )]
    NoBeats(String),
    /// Required text input was empty
    #[display("Empty input: {}", _0)]
    EmptyInput(String),
    /// Beat numbering skips or repeats
    #[display(
        "Beat numbering is not sequential: beat #{} is numbered {} (expected {}). Fix the document or pass --renumber",
        position,
        found,
        expected
    )]
    BeatNumbering {
        /// One-based position of the offending beat in parse order
        position: usize,
        /// Number that should appear at this position
        expected: u32,
        /// Number that actually appears
        found: u32,
    },
    /// Requested beat number is not present
    #[display("Beat {} not found ({} beats available)", number, available)]
    BeatNotFound {
        /// Requested beat number
        number: u32,
        /// Number of beats parsed
        available: usize,
    },
    /// Channel key not present in the style configuration
    #[display("Unknown channel '{}'. Valid choices: {}", given, valid)]
    UnknownChannel {
        /// Value supplied by the operator
        given: String,
        /// Comma-separated list of accepted values
        valid: String,
    },
    /// Polish mode not recognized
    #[display("Unknown polish mode '{}'. Valid choices: {}", given, valid)]
    UnknownPolishMode {
        /// Value supplied by the operator
        given: String,
        /// Comma-separated list of accepted values
        valid: String,
    },
    /// Interactive prompt could not be read or written
    #[display("Interactive session failed: {}", _0)]
    Interaction(String),
}

/// Error type for narrative operations.
///
/// # Examples
///
/// ```
/// use vellum_error::{NarrativeError, NarrativeErrorKind};
///
/// let err = NarrativeError::new(NarrativeErrorKind::NoBeats("outline.md".to_string()));
/// assert!(format!("{}", err).contains("No beats found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narrative Error: {} at line {} in {}", kind, line, file)]
pub struct NarrativeError {
    /// The specific error condition
    pub kind: NarrativeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl NarrativeError {
    /// Create a new NarrativeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NarrativeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
