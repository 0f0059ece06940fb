//! Persistence layer: key-value storage and the note collection mirror.
//!
//! # Responsibility
//! - Define the `KeyValueStore` contract and its SQLite/in-memory backends.
//! - Mirror the full note collection under one namespaced key.
//!
//! # Invariants
//! - Writes replace the full collection value; there are no partial writes.
//! - Reading a missing or corrupt value degrades to an empty collection.

pub mod kv_store;
pub mod note_store;
