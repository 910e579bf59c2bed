//! Error types for Vibescope

/// Result type alias using Vibescope's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Vibescope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected input: blank text, empty batch, empty export
    #[error("validation error: {0}")]
    Validation(String),

    /// The classifier failed to become ready
    #[error("initialization error: {0}")]
    Initialization(String),

    /// An individual classification call failed
    #[error("classification error: {0}")]
    Classification(String),

    /// Export encoding errors
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new initialization error
    pub fn initialization(msg: impl Into<String>) -> Self {
        Self::Initialization(msg.into())
    }

    /// Create a new classification error
    pub fn classification(msg: impl Into<String>) -> Self {
        Self::Classification(msg.into())
    }

    /// Create a new encoding error
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
