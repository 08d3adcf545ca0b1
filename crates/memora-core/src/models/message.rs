//! Transcript message models.

use serde::{Deserialize, Serialize};

/// Role of a transcript message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Single message in a conversation transcript.
///
/// Messages are append-only; content and role are stored exactly as
/// submitted or as returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub conversation_id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: i64,
}

impl TranscriptMessage {
    pub fn user(conversation_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            role: MessageRole::User,
            content: content.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn assistant(conversation_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
