//! Conversation lifecycle orchestration.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{ChatError, Result};
use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::models::{Conversation, ConversationSummary, TranscriptMessage};
use crate::storage::Storage;

use super::completion_text;
use super::memory::MemoryWindow;

/// Instruction template used to derive a conversation description from the
/// first user message. The length cap is advisory, not enforced.
const DESCRIPTION_PROMPT: &str =
    "Generate a chat description based on the message, limiting the description to 30 characters: ";

/// Result of starting a new conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationStart {
    pub id: String,
    pub reply: String,
    pub description: String,
}

/// Orchestrates conversation lifecycle: creation with an auto-generated
/// description, existence validation, message dispatch through the memory
/// window, and read access to the directory and transcripts.
///
/// Owner identity is an explicit parameter on every call; the fixed
/// single-user identity lives in server configuration.
#[derive(Clone)]
pub struct ConversationService {
    storage: Arc<Storage>,
    client: Arc<dyn LlmClient>,
    window: MemoryWindow,
}

impl ConversationService {
    pub fn new(storage: Arc<Storage>, client: Arc<dyn LlmClient>, window_size: usize) -> Self {
        let window =
            MemoryWindow::new(storage.clone(), client.clone()).with_window_size(window_size);
        Self {
            storage,
            client,
            window,
        }
    }

    /// Create a conversation from its first message.
    ///
    /// The description is generated before anything is written, so a failed
    /// generation leaves no conversation behind. If the dispatched first
    /// message fails instead, the registered conversation stays behind with
    /// an empty transcript and remains usable.
    pub async fn start_conversation(
        &self,
        owner_id: &str,
        message: &str,
    ) -> Result<ConversationStart> {
        let description = self.generate_description(message).await?;

        let conversation = Conversation::new(owner_id, description.clone());
        self.storage.conversations.create(&conversation)?;
        tracing::info!(conversation_id = %conversation.id, owner_id, "conversation registered");

        let reply = self.window.dispatch(&conversation.id, message).await?;

        Ok(ConversationStart {
            id: conversation.id,
            reply,
            description,
        })
    }

    /// All conversations for an owner, most recently created first.
    pub fn list_conversations(&self, owner_id: &str) -> Result<Vec<ConversationSummary>> {
        Ok(self.storage.conversations.list_for_owner(owner_id)?)
    }

    /// Full message history for a conversation, oldest first.
    pub fn transcript(&self, conversation_id: &str) -> Result<Vec<TranscriptMessage>> {
        self.ensure_exists(conversation_id)?;
        Ok(self.storage.transcripts.list(conversation_id)?)
    }

    /// Send a message to an existing conversation and return the reply.
    pub async fn send_message(&self, conversation_id: &str, message: &str) -> Result<String> {
        self.ensure_exists(conversation_id)?;
        self.window.dispatch(conversation_id, message).await
    }

    fn ensure_exists(&self, conversation_id: &str) -> Result<()> {
        if !self.storage.conversations.exists(conversation_id)? {
            return Err(ChatError::ConversationNotFound(conversation_id.to_string()));
        }
        Ok(())
    }

    async fn generate_description(&self, message: &str) -> Result<String> {
        let prompt = format!("{DESCRIPTION_PROMPT}{message}");
        let request = CompletionRequest::new(vec![Message::user(prompt)]);
        let response = self.client.complete(request).await?;
        completion_text(response)
    }
}
