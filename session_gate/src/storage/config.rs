use std::sync::Arc;
use std::{env, sync::LazyLock};

use super::errors::StoreError;
use super::file::FileSessionStore;
use super::memory::InMemorySessionStore;
use super::types::SessionStore;

pub static SESSION_STORE_TYPE: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_STORE_TYPE")
        .ok()
        .unwrap_or("file".to_string())
});

pub static SESSION_STORE_PATH: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_STORE_PATH")
        .ok()
        .unwrap_or("sessions.json".to_string())
});

/// Build the session store selected by `SESSION_STORE_TYPE`.
///
/// The store still has to be initialized with [`SessionStore::init`]
/// before first use.
pub fn session_store_from_env() -> Result<Arc<dyn SessionStore>, StoreError> {
    let store_type = SESSION_STORE_TYPE.as_str();
    tracing::info!("Initializing session store with type: {}", store_type);

    match store_type {
        "memory" => Ok(Arc::new(InMemorySessionStore::new())),
        "file" => Ok(Arc::new(FileSessionStore::new(SESSION_STORE_PATH.as_str()))),
        t => Err(StoreError::Config(format!(
            "Unsupported session store type: {t}. Supported types are 'memory' and 'file'"
        ))),
    }
}
