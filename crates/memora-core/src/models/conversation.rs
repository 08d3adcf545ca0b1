//! Conversation directory models.

use serde::{Deserialize, Serialize};

/// A persisted conversation: one owner, one description.
///
/// Registered exactly once at conversation start and immutable afterwards;
/// conversations are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub created_at: i64,
}

impl Conversation {
    pub fn new(owner_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            description: description.into(),
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Directory listing entry: id and description only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationSummary {
    pub id: String,
    pub description: String,
}

impl From<&Conversation> for ConversationSummary {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id.clone(),
            description: conversation.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let first = Conversation::new("owner-1", "First chat");
        let second = Conversation::new("owner-1", "Second chat");

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(first.owner_id, "owner-1");
        assert_eq!(first.description, "First chat");
        assert!(first.created_at > 0);
    }

    #[test]
    fn test_summary_from_conversation() {
        let conversation = Conversation::new("owner-1", "Trip planning");
        let summary = ConversationSummary::from(&conversation);

        assert_eq!(summary.id, conversation.id);
        assert_eq!(summary.description, "Trip planning");
    }
}
