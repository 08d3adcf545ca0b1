//! Conversation-memory endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use memora_core::models::{ConversationSummary, MessageRole, TranscriptMessage};
use memora_core::services::ConversationStart;

use crate::api::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct StartConversationRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// Wire form of one transcript message: content plus role only.
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub content: String,
    pub role: MessageRole,
}

impl From<TranscriptMessage> for MessageView {
    fn from(message: TranscriptMessage) -> Self {
        Self {
            content: message.content,
            role: message.role,
        }
    }
}

// GET /api/chat-memory
pub async fn list_conversations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConversationSummary>>, ApiError> {
    let conversations = state
        .conversations
        .list_conversations(&state.config.owner_id)?;
    Ok(Json(conversations))
}

// GET /api/chat-memory/{id}
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<MessageView>>, ApiError> {
    let transcript = state.conversations.transcript(&id)?;
    Ok(Json(transcript.into_iter().map(MessageView::from).collect()))
}

// POST /api/chat-memory/start
pub async fn start_conversation(
    State(state): State<AppState>,
    Json(request): Json<StartConversationRequest>,
) -> Result<Json<ConversationStart>, ApiError> {
    let started = state
        .conversations
        .start_conversation(&state.config.owner_id, &request.message)
        .await?;
    Ok(Json(started))
}

// POST /api/chat-memory/{id}
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<MessageView>, ApiError> {
    let reply = state.conversations.send_message(&id, &request.message).await?;
    Ok(Json(MessageView {
        content: reply,
        role: MessageRole::Assistant,
    }))
}
