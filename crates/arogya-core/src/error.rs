use thiserror::Error;

/// Top-level error type for the Arogya client.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for ArogyaError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArogyaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Location error: {0}")]
    Location(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ArogyaError {
    fn from(err: toml::de::Error) -> Self {
        ArogyaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ArogyaError {
    fn from(err: toml::ser::Error) -> Self {
        ArogyaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ArogyaError {
    fn from(err: serde_json::Error) -> Self {
        ArogyaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Arogya operations.
pub type Result<T> = std::result::Result<T, ArogyaError>;
