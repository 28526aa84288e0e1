use thiserror::Error;

/// Unified error type for semrel operations
#[derive(Error, Debug)]
pub enum SemrelError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Unsupported repository history: {0}")]
    UnsupportedHistory(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semrel
pub type Result<T> = std::result::Result<T, SemrelError>;

impl SemrelError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemrelError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        SemrelError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        SemrelError::Tag(msg.into())
    }

    /// Create an unsupported-history error with context
    pub fn unsupported(msg: impl Into<String>) -> Self {
        SemrelError::UnsupportedHistory(msg.into())
    }

    /// Create an internal (precondition violation) error with context
    pub fn internal(msg: impl Into<String>) -> Self {
        SemrelError::Internal(msg.into())
    }
}
