//! Typed transcript wrapper.
//!
//! Wraps the byte-level append-only log from memora-storage with the
//! transcript message model. Appends are the only write path; nothing is
//! ever updated or deleted.

use crate::models::TranscriptMessage;
use anyhow::Result;
use redb::Database;
use std::sync::Arc;

/// Typed transcript wrapper around memora-storage::TranscriptStorage.
#[derive(Debug, Clone)]
pub struct TranscriptStorage {
    inner: memora_storage::TranscriptStorage,
}

impl TranscriptStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        Ok(Self {
            inner: memora_storage::TranscriptStorage::new(db)?,
        })
    }

    /// Append a single message, returning its sequence number.
    pub fn append(&self, message: &TranscriptMessage) -> Result<u64> {
        let json = serde_json::to_vec(message)?;
        self.inner.append_raw(&message.conversation_id, &json)
    }

    /// Persist one request's USER and ASSISTANT messages atomically.
    ///
    /// Both land in a single transaction at consecutive positions, so no
    /// reader ever observes a half-persisted turn.
    pub fn append_turn(
        &self,
        user: &TranscriptMessage,
        assistant: &TranscriptMessage,
    ) -> Result<(u64, u64)> {
        debug_assert_eq!(user.conversation_id, assistant.conversation_id);
        let user_json = serde_json::to_vec(user)?;
        let assistant_json = serde_json::to_vec(assistant)?;
        self.inner
            .append_pair_raw(&user.conversation_id, &user_json, &assistant_json)
    }

    /// Full transcript for a conversation, oldest first.
    pub fn list(&self, conversation_id: &str) -> Result<Vec<TranscriptMessage>> {
        let mut messages = Vec::new();
        for (_, bytes) in self.inner.list_raw(conversation_id)? {
            messages.push(serde_json::from_slice(&bytes)?);
        }
        Ok(messages)
    }

    /// The most recent `limit` messages of a conversation, oldest first.
    pub fn last(&self, conversation_id: &str, limit: usize) -> Result<Vec<TranscriptMessage>> {
        let mut messages = Vec::new();
        for (_, bytes) in self.inner.last_raw(conversation_id, limit)? {
            messages.push(serde_json::from_slice(&bytes)?);
        }
        Ok(messages)
    }

    /// Count messages in a conversation.
    pub fn count(&self, conversation_id: &str) -> Result<usize> {
        self.inner.count(conversation_id)
    }
}
