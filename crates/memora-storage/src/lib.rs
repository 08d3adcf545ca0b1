//! Memora Storage - Low-level storage abstraction layer
//!
//! This crate provides the persistence layer for Memora, using redb as the
//! embedded database. It exposes byte-level APIs so higher layers can keep
//! their own domain models; typed wrappers live in the memora-core crate.
//!
//! # Tables
//!
//! - `conversations` - Conversation directory records
//! - `transcript` - Append-only per-conversation message log

pub mod conversation;
pub mod transcript;

pub use conversation::ConversationStorage;
pub use transcript::TranscriptStorage;
