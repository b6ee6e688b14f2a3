//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, ModelsError, NarrativeError, ProjectError};

/// Every error condition a Vellum crate can raise.
///
/// # Examples
///
/// ```
/// use vellum_error::{VellumError, ConfigError};
///
/// let config_err = ConfigError::new("Missing api key");
/// let err: VellumError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VellumErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Project directory or document error
    #[from(ProjectError)]
    Project(ProjectError),
    /// Narrative parsing or workflow error
    #[from(NarrativeError)]
    Narrative(NarrativeError),
}

/// Vellum error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vellum_error::{VellumError, VellumResult, ConfigError};
///
/// fn might_fail() -> VellumResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vellum Error: {}", _0)]
pub struct VellumError(Box<VellumErrorKind>);

impl VellumError {
    /// Create a new error from a kind.
    pub fn new(kind: VellumErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VellumErrorKind {
        &self.0
    }

    /// Whether a retry of the failed operation might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), VellumErrorKind::Models(e) if e.is_retryable())
    }
}

// Generic From implementation for any type that converts to VellumErrorKind
impl<T> From<T> for VellumError
where
    T: Into<VellumErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vellum operations.
pub type VellumResult<T> = std::result::Result<T, VellumError>;
