//! Typed conversation directory wrapper.
//!
//! Provides type-safe access to the conversation directory, wrapping the
//! byte-level API from memora-storage with our Rust models.

use crate::models::{Conversation, ConversationSummary};
use anyhow::Result;
use redb::Database;
use std::sync::Arc;

/// Typed conversation directory wrapper around memora-storage::ConversationStorage.
#[derive(Debug, Clone)]
pub struct ConversationStorage {
    inner: memora_storage::ConversationStorage,
}

impl ConversationStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        Ok(Self {
            inner: memora_storage::ConversationStorage::new(db)?,
        })
    }

    /// Register a new conversation (fails if the id is already taken).
    pub fn create(&self, conversation: &Conversation) -> Result<()> {
        if self.inner.exists(&conversation.id)? {
            return Err(anyhow::anyhow!(
                "Conversation {} already exists",
                conversation.id
            ));
        }
        let json = serde_json::to_vec(conversation)?;
        self.inner.put_raw(&conversation.id, &json)
    }

    /// Get a conversation by ID.
    pub fn get(&self, id: &str) -> Result<Option<Conversation>> {
        if let Some(bytes) = self.inner.get_raw(id)? {
            Ok(Some(serde_json::from_slice(&bytes)?))
        } else {
            Ok(None)
        }
    }

    /// Check if a conversation is registered.
    pub fn exists(&self, id: &str) -> Result<bool> {
        self.inner.exists(id)
    }

    /// List conversations for an owner as summaries, most recently created
    /// first. Creation-time ties are broken by id, descending.
    pub fn list_for_owner(&self, owner_id: &str) -> Result<Vec<ConversationSummary>> {
        let mut conversations = Vec::new();
        for (_, bytes) in self.inner.list_raw()? {
            let conversation: Conversation = serde_json::from_slice(&bytes)?;
            if conversation.owner_id == owner_id {
                conversations.push(conversation);
            }
        }

        conversations.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(conversations.iter().map(ConversationSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup() -> (ConversationStorage, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = ConversationStorage::new(db).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_create_and_get() {
        let (storage, _temp_dir) = setup();

        let conversation = Conversation::new("owner-1", "Trip planning");
        storage.create(&conversation).unwrap();

        let retrieved = storage.get(&conversation.id).unwrap().unwrap();
        assert_eq!(retrieved.id, conversation.id);
        assert_eq!(retrieved.owner_id, "owner-1");
        assert_eq!(retrieved.description, "Trip planning");
        assert_eq!(retrieved.created_at, conversation.created_at);
    }

    #[test]
    fn test_create_duplicate_fails() {
        let (storage, _temp_dir) = setup();

        let conversation = Conversation::new("owner-1", "First");
        storage.create(&conversation).unwrap();

        let mut duplicate = Conversation::new("owner-1", "Second");
        duplicate.id = conversation.id.clone();

        let result = storage.create(&duplicate);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_nonexistent() {
        let (storage, _temp_dir) = setup();

        let result = storage.get("nonexistent").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_exists() {
        let (storage, _temp_dir) = setup();

        let conversation = Conversation::new("owner-1", "Chat");
        assert!(!storage.exists(&conversation.id).unwrap());

        storage.create(&conversation).unwrap();
        assert!(storage.exists(&conversation.id).unwrap());
    }

    #[test]
    fn test_list_for_owner_filters_by_owner() {
        let (storage, _temp_dir) = setup();

        storage.create(&Conversation::new("owner-1", "A")).unwrap();
        storage.create(&Conversation::new("owner-1", "B")).unwrap();
        storage.create(&Conversation::new("owner-2", "C")).unwrap();

        let summaries = storage.list_for_owner("owner-1").unwrap();
        assert_eq!(summaries.len(), 2);

        let other = storage.list_for_owner("owner-2").unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].description, "C");
    }

    #[test]
    fn test_list_orders_most_recent_first() {
        let (storage, _temp_dir) = setup();

        let mut oldest = Conversation::new("owner-1", "oldest");
        oldest.created_at = 1000;
        let mut newest = Conversation::new("owner-1", "newest");
        newest.created_at = 3000;
        let mut middle = Conversation::new("owner-1", "middle");
        middle.created_at = 2000;

        storage.create(&oldest).unwrap();
        storage.create(&newest).unwrap();
        storage.create(&middle).unwrap();

        let summaries = storage.list_for_owner("owner-1").unwrap();
        assert_eq!(summaries[0].description, "newest");
        assert_eq!(summaries[1].description, "middle");
        assert_eq!(summaries[2].description, "oldest");
    }

    #[test]
    fn test_list_breaks_created_at_ties_by_id() {
        let (storage, _temp_dir) = setup();

        let mut first = Conversation::new("owner-1", "first");
        first.id = "aaa".to_string();
        first.created_at = 1000;
        let mut second = Conversation::new("owner-1", "second");
        second.id = "bbb".to_string();
        second.created_at = 1000;

        storage.create(&first).unwrap();
        storage.create(&second).unwrap();

        let summaries = storage.list_for_owner("owner-1").unwrap();
        assert_eq!(summaries[0].id, "bbb");
        assert_eq!(summaries[1].id, "aaa");
    }
}
