//! Chat services: the stateless path, the memory window, and conversation
//! lifecycle orchestration.

pub mod chat;
pub mod conversation;
pub mod memory;

pub use chat::ChatService;
pub use conversation::{ConversationService, ConversationStart};
pub use memory::{DEFAULT_WINDOW_SIZE, MemoryWindow};

use crate::error::{ChatError, Result};
use crate::llm::CompletionResponse;

/// Extract the reply text from a completion.
///
/// An empty or missing completion counts as a model failure; callers never
/// see a partial or garbled reply.
pub(crate) fn completion_text(response: CompletionResponse) -> Result<String> {
    if let Some(usage) = &response.usage {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "model call completed"
        );
    }
    response
        .content
        .filter(|content| !content.is_empty())
        .ok_or_else(|| {
            ChatError::ModelUnavailable("model returned an empty completion".to_string())
        })
}
