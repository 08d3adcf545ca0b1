//! Memory window - bounded context assembly and turn persistence.

use std::sync::Arc;

use crate::error::Result;
use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::models::{MessageRole, TranscriptMessage};
use crate::storage::Storage;

use super::completion_text;

/// Default number of recent messages supplied as model context.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Produces the bounded context for a model call and persists new turns.
///
/// The window is size-bounded by message count. Older messages are only
/// excluded from the context at read time; the transcript itself is never
/// compacted.
#[derive(Clone)]
pub struct MemoryWindow {
    storage: Arc<Storage>,
    client: Arc<dyn LlmClient>,
    window_size: usize,
}

impl MemoryWindow {
    pub fn new(storage: Arc<Storage>, client: Arc<dyn LlmClient>) -> Self {
        Self {
            storage,
            client,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Send a user message through the window for one conversation.
    ///
    /// Loads the most recent messages as context, invokes the model, then
    /// persists the USER and ASSISTANT messages as one atomic turn. A failed
    /// model call persists nothing and leaves the conversation usable for
    /// the next attempt.
    pub async fn dispatch(&self, conversation_id: &str, user_message: &str) -> Result<String> {
        let recent = self
            .storage
            .transcripts
            .last(conversation_id, self.window_size)?;

        let mut context: Vec<Message> = recent.iter().map(prompt_message).collect();
        context.push(Message::user(user_message));

        tracing::debug!(
            conversation_id,
            context_messages = context.len(),
            "dispatching model call"
        );

        let response = self.client.complete(CompletionRequest::new(context)).await?;
        let reply = completion_text(response)?;

        let user = TranscriptMessage::user(conversation_id, user_message);
        let assistant = TranscriptMessage::assistant(conversation_id, &reply);
        self.storage.transcripts.append_turn(&user, &assistant)?;

        Ok(reply)
    }
}

fn prompt_message(message: &TranscriptMessage) -> Message {
    match message.role {
        MessageRole::User => Message::user(message.content.as_str()),
        MessageRole::Assistant => Message::assistant(message.content.as_str()),
    }
}
