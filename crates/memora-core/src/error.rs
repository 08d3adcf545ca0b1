//! Error taxonomy for the chat core.

use thiserror::Error;

/// Chat core error types
#[derive(Error, Debug)]
pub enum ChatError {
    /// Requested conversation id is not present in the directory.
    #[error("conversation not found: {0}")]
    ConversationNotFound(String),

    /// The model collaborator failed or returned an unusable result.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// Persistence read/write failure; fatal for the current request.
    #[error("storage error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<crate::llm::LlmError> for ChatError {
    fn from(err: crate::llm::LlmError) -> Self {
        Self::ModelUnavailable(err.to_string())
    }
}

/// Result type alias for chat core operations
pub type Result<T> = std::result::Result<T, ChatError>;
