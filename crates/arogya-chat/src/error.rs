//! Error types for the conversational interface.

use arogya_core::error::ArogyaError;

/// Errors from the chat engine.
///
/// Backend and location failures never surface here: the orchestrator
/// converts them into visible assistant messages.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
}

impl From<ChatError> for ArogyaError {
    fn from(err: ChatError) -> Self {
        ArogyaError::Chat(err.to_string())
    }
}
