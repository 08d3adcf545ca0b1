//! Storage layer with typed wrappers around memora-storage.
//!
//! This module provides type-safe access to the storage layer by wrapping
//! the byte-level APIs from memora-storage with Rust types from our models.

pub mod conversation;
pub mod transcript;

use anyhow::Result;
use redb::Database;
use std::sync::Arc;

pub use conversation::ConversationStorage;
pub use transcript::TranscriptStorage;

/// Central storage manager that initializes all storage subsystems.
///
/// The conversation directory and the transcript log share one redb
/// database; it is the only shared mutable resource in the system.
pub struct Storage {
    db: Arc<Database>,
    pub conversations: ConversationStorage,
    pub transcripts: TranscriptStorage,
}

impl Storage {
    /// Create a new storage instance at the given path.
    pub fn new(path: &str) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);

        let conversations = ConversationStorage::new(db.clone())?;
        let transcripts = TranscriptStorage::new(db.clone())?;

        Ok(Self {
            db,
            conversations,
            transcripts,
        })
    }

    /// Get a reference to the underlying database
    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_subsystems_share_one_database() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let storage = Storage::new(db_path.to_str().unwrap()).unwrap();

        let db = storage.get_db();
        assert!(Arc::ptr_eq(&db, &storage.db));
    }
}
