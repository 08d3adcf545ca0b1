//! Stateless chat endpoint.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::api::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

// POST /api/chat
pub async fn stateless_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let reply = state.chat.chat(&request.message).await?;
    Ok(Json(ChatResponse { message: reply }))
}
