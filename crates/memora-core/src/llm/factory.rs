//! LLM client construction from environment configuration.

use std::sync::Arc;

use super::anthropic::AnthropicClient;
use super::client::LlmClient;
use super::error::{LlmError, Result};
use super::openai::OpenAIClient;

const PROVIDER_ENV: &str = "MEMORA_LLM_PROVIDER";
const MODEL_ENV: &str = "MEMORA_LLM_MODEL";
const ANTHROPIC_KEY_ENV: &str = "ANTHROPIC_API_KEY";
const OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_PROVIDER: &str = "anthropic";

/// Build an LLM client from environment variables.
///
/// `MEMORA_LLM_PROVIDER` selects `anthropic` (default) or `openai`;
/// `MEMORA_LLM_MODEL` overrides the provider's default model; the provider's
/// API key variable must be set.
pub fn client_from_env() -> Result<Arc<dyn LlmClient>> {
    let provider =
        std::env::var(PROVIDER_ENV).unwrap_or_else(|_| DEFAULT_PROVIDER.to_string());
    let model = std::env::var(MODEL_ENV).ok();

    match provider.as_str() {
        "anthropic" => {
            let mut client = AnthropicClient::new(require_key(ANTHROPIC_KEY_ENV)?);
            if let Some(model) = model {
                client = client.with_model(model);
            }
            Ok(Arc::new(client))
        }
        "openai" => {
            let mut client = OpenAIClient::new(require_key(OPENAI_KEY_ENV)?);
            if let Some(model) = model {
                client = client.with_model(model);
            }
            Ok(Arc::new(client))
        }
        other => Err(LlmError::Llm(format!("unknown LLM provider: {}", other))),
    }
}

fn require_key(var: &str) -> Result<String> {
    std::env::var(var)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| LlmError::Llm(format!("{} is not set", var)))
}
