//! Service configuration from the environment.

use crate::services::DEFAULT_WINDOW_SIZE;

const OWNER_ID_ENV: &str = "MEMORA_OWNER_ID";
const WINDOW_SIZE_ENV: &str = "MEMORA_WINDOW_SIZE";

/// Fixed single-user identity used until real user management exists.
pub const DEFAULT_OWNER_ID: &str = "default";

/// Runtime configuration for the chat services.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Owner recorded on every conversation and used for listings.
    pub owner_id: String,
    /// Number of recent messages supplied as model context.
    pub window_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            owner_id: DEFAULT_OWNER_ID.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let owner_id = std::env::var(OWNER_ID_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OWNER_ID.to_string());

        let window_size = std::env::var(WINDOW_SIZE_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_WINDOW_SIZE);

        Self {
            owner_id,
            window_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.owner_id, DEFAULT_OWNER_ID);
        assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
    }
}
