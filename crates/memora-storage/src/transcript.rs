//! Transcript storage - byte-level API for the append-only message log.
//!
//! Messages are keyed by `conversation_id:seq` where `seq` is a zero-padded
//! per-conversation sequence number, so lexicographic key order within one
//! conversation is exactly append order. Records are never updated or
//! deleted; the memory window is a read-time truncation over this log.

use anyhow::Result;
use redb::{Database, ReadableDatabase, ReadableTable, Table, TableDefinition};
use std::sync::Arc;

const TRANSCRIPT_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("transcript");

fn message_key(conversation_id: &str, seq: u64) -> String {
    format!("{conversation_id}:{seq:012}")
}

fn parse_seq(key: &str) -> Option<u64> {
    key.rsplit_once(':').and_then(|(_, seq)| seq.parse().ok())
}

fn next_seq_in(
    table: &Table<'_, &'static str, &'static [u8]>,
    conversation_id: &str,
) -> Result<u64> {
    let prefix = format!("{conversation_id}:");
    let mut next = 0u64;

    for item in table.iter()? {
        let (key, _) = item?;
        let key_str = key.value();

        if key_str.starts_with(&prefix)
            && let Some(seq) = parse_seq(key_str)
        {
            next = next.max(seq + 1);
        }
    }

    Ok(next)
}

/// Low-level append-only transcript storage with byte-level API
#[derive(Debug, Clone)]
pub struct TranscriptStorage {
    db: Arc<Database>,
}

impl TranscriptStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(TRANSCRIPT_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Append a single raw message record, returning its sequence number.
    ///
    /// The sequence number is computed inside the write transaction, so
    /// concurrent appends to the same conversation never collide.
    pub fn append_raw(&self, conversation_id: &str, data: &[u8]) -> Result<u64> {
        let write_txn = self.db.begin_write()?;
        let seq = {
            let mut table = write_txn.open_table(TRANSCRIPT_TABLE)?;
            let seq = next_seq_in(&table, conversation_id)?;
            table.insert(message_key(conversation_id, seq).as_str(), data)?;
            seq
        };
        write_txn.commit()?;
        Ok(seq)
    }

    /// Append two raw message records in one transaction.
    ///
    /// Both records are committed together at consecutive sequence numbers,
    /// which keeps a request's USER+ASSISTANT turn atomic and contiguous.
    pub fn append_pair_raw(
        &self,
        conversation_id: &str,
        first: &[u8],
        second: &[u8],
    ) -> Result<(u64, u64)> {
        let write_txn = self.db.begin_write()?;
        let seqs = {
            let mut table = write_txn.open_table(TRANSCRIPT_TABLE)?;
            let seq = next_seq_in(&table, conversation_id)?;
            table.insert(message_key(conversation_id, seq).as_str(), first)?;
            table.insert(message_key(conversation_id, seq + 1).as_str(), second)?;
            (seq, seq + 1)
        };
        write_txn.commit()?;
        Ok(seqs)
    }

    /// List all raw message records for a conversation, oldest first.
    pub fn list_raw(&self, conversation_id: &str) -> Result<Vec<(u64, Vec<u8>)>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TRANSCRIPT_TABLE)?;

        let prefix = format!("{conversation_id}:");
        let mut messages = Vec::new();

        for item in table.iter()? {
            let (key, value) = item?;
            let key_str = key.value();

            if key_str.starts_with(&prefix)
                && let Some(seq) = parse_seq(key_str)
            {
                messages.push((seq, value.value().to_vec()));
            }
        }

        Ok(messages)
    }

    /// List the most recent `limit` raw records for a conversation,
    /// still oldest first.
    pub fn last_raw(&self, conversation_id: &str, limit: usize) -> Result<Vec<(u64, Vec<u8>)>> {
        let mut messages = self.list_raw(conversation_id)?;
        if messages.len() > limit {
            messages = messages.split_off(messages.len() - limit);
        }
        Ok(messages)
    }

    /// Count messages in a conversation
    pub fn count(&self, conversation_id: &str) -> Result<usize> {
        Ok(self.list_raw(conversation_id)?.len())
    }
}
