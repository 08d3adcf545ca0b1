//! LLM module - Multi-provider LLM client abstraction

mod anthropic;
mod client;
mod error;
mod factory;
mod mock_client;
mod openai;

pub use anthropic::AnthropicClient;
pub use client::{CompletionRequest, CompletionResponse, LlmClient, Message, Role, TokenUsage};
pub use error::LlmError;
pub use factory::client_from_env;
pub use mock_client::{MockLlmClient, MockStep};
pub use openai::OpenAIClient;
