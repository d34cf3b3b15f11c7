use thiserror::Error;

/// Result type alias using ApiDiffError
pub type Result<T> = std::result::Result<T, ApiDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A named input file does not exist or cannot be read
    Io,
    /// File contents are not valid JSON
    InvalidJson,
    /// Unrecognized command-line argument
    Usage,
    /// Canonical form or report could not be serialized
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::InvalidJson => "ERR_INVALID_JSON",
            ExErrorKind::Usage => "ERR_USAGE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the
/// context (operation, file path) needed to debug a failed run.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for a contract-diff run
///
/// Every variant is fatal: the run either completes the full diff or stops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiDiffError {
    /// A named file does not exist or is not readable
    #[error("Cannot read {path}: {reason}")]
    FileRead { path: String, reason: String },

    /// File contents are not valid JSON
    #[error("Invalid JSON in {path}: {reason}")]
    InvalidJson { path: String, reason: String },

    /// An unrecognized CLI flag was supplied
    #[error("Unrecognized argument: {arg}")]
    UnrecognizedArgument { arg: String },

    /// A signature or report could not be serialized
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for ApiDiffError {
    fn from(err: serde_json::Error) -> Self {
        ApiDiffError::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<ApiDiffError> for ExError {
    fn from(err: ApiDiffError) -> Self {
        match err {
            ApiDiffError::FileRead { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("load_document")
                .with_path(path)
                .with_message(reason),

            ApiDiffError::InvalidJson { path, reason } => ExError::new(ExErrorKind::InvalidJson)
                .with_op("load_document")
                .with_path(path)
                .with_message(reason),

            ApiDiffError::UnrecognizedArgument { arg } => ExError::new(ExErrorKind::Usage)
                .with_op("parse_args")
                .with_message(format!("Unrecognized argument: {}", arg)),

            ApiDiffError::Serialization { reason } => {
                ExError::new(ExErrorKind::Serialization).with_message(reason)
            }
        }
    }
}

impl From<&ApiDiffError> for ExError {
    fn from(err: &ApiDiffError) -> Self {
        err.clone().into()
    }
}
