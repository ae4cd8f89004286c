use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::errors::StoreError;
use super::types::{RecordData, SessionStore};

/// File-backed session store keeping the whole document in one JSON file.
///
/// Every operation holds `write_lock` for its full read-modify-write
/// cycle, so concurrent callers in the same process cannot interleave
/// and lose updates. Readers take the same lock to avoid observing a
/// half-written document.
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::info!("Creating file session store at {}", path.display());
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, RecordData>, StoreError> {
        tracing::debug!("Reading sessions from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, document: &HashMap<String, RecordData>) -> Result<(), StoreError> {
        tracing::debug!("Writing sessions to {}", self.path.display());
        let content = serde_json::to_string_pretty(document)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    /// Create an empty session document if the file does not exist yet.
    async fn init(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        if tokio::fs::try_exists(&self.path).await? {
            tracing::info!("Session file already exists. Skipping creation");
        } else {
            tracing::info!("Session file does not exist. Creating it");
            self.save(&HashMap::new()).await?;
        }
        Ok(())
    }

    async fn get_all(&self) -> Result<HashMap<String, RecordData>, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.load().await
    }

    async fn replace_all(&self, records: HashMap<String, RecordData>) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.save(&records).await
    }

    async fn put(&self, session_id: &str, value: RecordData) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        document.insert(session_id.to_string(), value);
        self.save(&document).await
    }

    async fn get(&self, session_id: &str) -> Result<Option<RecordData>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let document = self.load().await?;
        Ok(document.get(session_id).cloned())
    }

    async fn remove(&self, session_id: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        document.remove(session_id);
        self.save(&document).await
    }
}
