//! Stateless one-shot chat path.

use std::sync::Arc;

use crate::error::Result;
use crate::llm::{CompletionRequest, LlmClient, Message};

use super::completion_text;

/// Stateless chat: one user message in, one reply out.
///
/// Nothing is persisted and no stored context is attached; this path shares
/// no state with the conversation service.
#[derive(Clone)]
pub struct ChatService {
    client: Arc<dyn LlmClient>,
}

impl ChatService {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub async fn chat(&self, message: &str) -> Result<String> {
        let request = CompletionRequest::new(vec![Message::user(message)]);
        let response = self.client.complete(request).await?;
        completion_text(response)
    }
}
