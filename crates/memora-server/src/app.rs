//! Router assembly.

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::api::AppState;
use crate::api::chat::stateless_chat;
use crate::api::conversations::{
    get_transcript, list_conversations, send_message, start_conversation,
};

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> axum::Json<Health> {
    axum::Json(Health {
        status: "memora is working!".to_string(),
    })
}

pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        // Stateless chat
        .route("/api/chat", post(stateless_chat))
        // Conversation directory; POST keeps the memoryless chat the memory
        // surface also answers
        .route(
            "/api/chat-memory",
            get(list_conversations).post(stateless_chat),
        )
        .route("/api/chat-memory/start", post(start_conversation))
        // Transcript access and follow-up messages
        .route(
            "/api/chat-memory/{id}",
            get(get_transcript).post(send_message),
        )
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use memora_core::llm::{MockLlmClient, MockStep};
    use memora_core::{AppCore, ServiceConfig};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn test_app(steps: Vec<MockStep>) -> (Router, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let client = Arc::new(MockLlmClient::from_steps("mock-model", steps));
        let core = AppCore::new(
            db_path.to_str().unwrap(),
            client,
            ServiceConfig::default(),
        )
        .unwrap();
        (router(Arc::new(core)), temp_dir)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_works() {
        let (app, _temp_dir) = test_app(vec![]);

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn stateless_chat_returns_reply() {
        let (app, _temp_dir) = test_app(vec![MockStep::text("hello there")]);

        let response = app
            .oneshot(post_json("/api/chat", json!({"message": "hi"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "hello there");
    }

    #[tokio::test]
    async fn model_failure_maps_to_502() {
        let (app, _temp_dir) = test_app(vec![MockStep::error("model down")]);

        let response = app
            .oneshot(post_json("/api/chat", json!({"message": "hi"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], 502);
    }

    #[tokio::test]
    async fn memory_surface_also_answers_memoryless_chat() {
        let (app, _temp_dir) = test_app(vec![MockStep::text("plain reply")]);

        let response = app
            .oneshot(post_json("/api/chat-memory", json!({"message": "hi"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "plain reply");
    }

    #[tokio::test]
    async fn conversation_flow_over_http() {
        let (app, _temp_dir) = test_app(vec![
            MockStep::text("Math questions"),
            MockStep::text("4"),
            MockStep::text("6"),
        ]);

        // Start a conversation with the first message
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/chat-memory/start",
                json!({"message": "What is 2+2?"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let started = body_json(response).await;
        assert_eq!(started["reply"], "4");
        assert_eq!(started["description"], "Math questions");
        let id = started["id"].as_str().unwrap().to_string();

        // The directory lists it
        let response = app
            .clone()
            .oneshot(get_request("/api/chat-memory"))
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed[0]["id"], id.as_str());
        assert_eq!(listed[0]["description"], "Math questions");

        // Follow-up message
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/chat-memory/{}", id),
                json!({"message": "And 3+3?"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let message = body_json(response).await;
        assert_eq!(message["content"], "6");
        assert_eq!(message["role"], "ASSISTANT");

        // Full transcript in order
        let response = app
            .oneshot(get_request(&format!("/api/chat-memory/{}", id)))
            .await
            .unwrap();
        let transcript = body_json(response).await;
        let transcript = transcript.as_array().unwrap();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0]["role"], "USER");
        assert_eq!(transcript[0]["content"], "What is 2+2?");
        assert_eq!(transcript[1]["role"], "ASSISTANT");
        assert_eq!(transcript[2]["role"], "USER");
        assert_eq!(transcript[3]["role"], "ASSISTANT");
        assert_eq!(transcript[3]["content"], "6");
    }

    #[tokio::test]
    async fn unknown_conversation_maps_to_404() {
        let (app, _temp_dir) = test_app(vec![]);

        let response = app
            .clone()
            .oneshot(get_request("/api/chat-memory/no-such-id"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(post_json(
                "/api/chat-memory/no-such-id",
                json!({"message": "hi"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
