use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::errors::StoreError;
use super::types::{RecordData, SessionStore};

/// In-memory session store, used by tests and throwaway setups.
pub struct InMemorySessionStore {
    document: Mutex<HashMap<String, RecordData>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory session store");
        Self {
            document: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn init(&self) -> Result<(), StoreError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn get_all(&self) -> Result<HashMap<String, RecordData>, StoreError> {
        Ok(self.document.lock().await.clone())
    }

    async fn replace_all(&self, records: HashMap<String, RecordData>) -> Result<(), StoreError> {
        *self.document.lock().await = records;
        Ok(())
    }

    async fn put(&self, session_id: &str, value: RecordData) -> Result<(), StoreError> {
        self.document
            .lock()
            .await
            .insert(session_id.to_string(), value);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<RecordData>, StoreError> {
        Ok(self.document.lock().await.get(session_id).cloned())
    }

    async fn remove(&self, session_id: &str) -> Result<(), StoreError> {
        self.document.lock().await.remove(session_id);
        Ok(())
    }
}
