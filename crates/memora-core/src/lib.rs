//! Memora core - conversation-memory chat services.
//!
//! Layered the storage-up way: domain models, typed storage wrappers over
//! the byte-level memora-storage crate, the LLM client abstraction, and the
//! services that orchestrate stateless chat and memory-backed conversations.

pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod paths;
pub mod services;
pub mod storage;

pub use config::ServiceConfig;
pub use error::ChatError;

use std::sync::Arc;

use llm::LlmClient;
use services::{ChatService, ConversationService};
use storage::Storage;

/// Core application state shared between all API handlers.
pub struct AppCore {
    pub storage: Arc<Storage>,
    pub chat: ChatService,
    pub conversations: ConversationService,
    pub config: ServiceConfig,
}

impl AppCore {
    pub fn new(
        db_path: &str,
        client: Arc<dyn LlmClient>,
        config: ServiceConfig,
    ) -> anyhow::Result<Self> {
        let storage = Arc::new(Storage::new(db_path)?);

        tracing::info!(
            window_size = config.window_size,
            "initializing chat services"
        );

        let chat = ChatService::new(client.clone());
        let conversations = ConversationService::new(storage.clone(), client, config.window_size);

        Ok(Self {
            storage,
            chat,
            conversations,
            config,
        })
    }
}
