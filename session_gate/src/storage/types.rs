use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::StoreError;

/// Raw session record as held in the session document.
///
/// The store never interprets record contents; decoding into a typed
/// record happens at the session layer, where a failed decode counts as
/// a corrupted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordData {
    pub value: serde_json::Value,
}

/// A session store holding a single document that maps session ids to
/// records.
///
/// Implementations must apply every mutation as one read-modify-write of
/// the whole document, serialized against other writers in the same
/// process: two concurrent writers may not lose each other's updates.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Initialize the store. This is called once at startup.
    async fn init(&self) -> Result<(), StoreError>;

    /// Read the whole session document.
    async fn get_all(&self) -> Result<HashMap<String, RecordData>, StoreError>;

    /// Replace the whole session document.
    async fn replace_all(&self, records: HashMap<String, RecordData>) -> Result<(), StoreError>;

    /// Insert or overwrite a single record.
    async fn put(&self, session_id: &str, value: RecordData) -> Result<(), StoreError>;

    /// Get a single record.
    async fn get(&self, session_id: &str) -> Result<Option<RecordData>, StoreError>;

    /// Remove a single record. Removing an absent record is a no-op.
    async fn remove(&self, session_id: &str) -> Result<(), StoreError>;
}
