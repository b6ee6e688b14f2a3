//! Model provider errors and retry classification.

/// Model provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// API key not found in environment
    #[display("{} environment variable not set (add it to your .env file)", _0)]
    MissingApiKey(String),

    /// Request could not be sent or the connection dropped
    #[display("Request failed: {}", _0)]
    Http(String),

    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or error message
        message: String,
    },

    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    Parse(String),

    /// Service returned no choices
    #[display("Service returned an empty response")]
    EmptyResponse,

    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl ModelsErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Transport failures and throttling/server-side statuses are transient;
    /// everything else (bad credentials, malformed requests) is permanent.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_error::ModelsErrorKind;
    ///
    /// let throttled = ModelsErrorKind::Api { status: 429, message: "slow down".into() };
    /// assert!(throttled.is_retryable());
    ///
    /// let unauthorized = ModelsErrorKind::Api { status: 401, message: "bad key".into() };
    /// assert!(!unauthorized.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            ModelsErrorKind::Http(_) => true,
            ModelsErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Whether the underlying condition is worth retrying.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
