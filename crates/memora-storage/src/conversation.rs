//! Conversation directory storage - byte-level API for conversation records.

use anyhow::Result;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::sync::Arc;

const CONVERSATIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("conversations");

/// Low-level conversation directory storage with byte-level API.
///
/// Conversation records are registered once and never updated or deleted.
#[derive(Debug, Clone)]
pub struct ConversationStorage {
    db: Arc<Database>,
}

impl ConversationStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(CONVERSATIONS_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Store raw conversation data
    pub fn put_raw(&self, id: &str, data: &[u8]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CONVERSATIONS_TABLE)?;
            table.insert(id, data)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get raw conversation data by ID
    pub fn get_raw(&self, id: &str) -> Result<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONVERSATIONS_TABLE)?;

        if let Some(data) = table.get(id)? {
            Ok(Some(data.value().to_vec()))
        } else {
            Ok(None)
        }
    }

    /// List all raw conversation data
    pub fn list_raw(&self) -> Result<Vec<(String, Vec<u8>)>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONVERSATIONS_TABLE)?;

        let mut conversations = Vec::new();
        for item in table.iter()? {
            let (key, value) = item?;
            conversations.push((key.value().to_string(), value.value().to_vec()));
        }

        Ok(conversations)
    }

    /// Check if a conversation exists
    pub fn exists(&self, id: &str) -> Result<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONVERSATIONS_TABLE)?;
        Ok(table.get(id)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_storage() -> ConversationStorage {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        ConversationStorage::new(db).unwrap()
    }

    #[test]
    fn test_put_and_get_raw() {
        let storage = create_test_storage();

        let data = b"conversation record";
        storage.put_raw("conv-001", data).unwrap();

        let retrieved = storage.get_raw("conv-001").unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap(), data);
    }

    #[test]
    fn test_get_nonexistent() {
        let storage = create_test_storage();

        let result = storage.get_raw("nonexistent").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_list_raw() {
        let storage = create_test_storage();

        storage.put_raw("conv-001", b"data1").unwrap();
        storage.put_raw("conv-002", b"data2").unwrap();

        let conversations = storage.list_raw().unwrap();
        assert_eq!(conversations.len(), 2);
    }

    #[test]
    fn test_exists() {
        let storage = create_test_storage();

        assert!(!storage.exists("conv-001").unwrap());

        storage.put_raw("conv-001", b"data").unwrap();
        assert!(storage.exists("conv-001").unwrap());
    }
}
