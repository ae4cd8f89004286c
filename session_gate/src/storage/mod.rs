mod config;
mod errors;
mod file;
mod memory;
mod types;


pub use config::{SESSION_STORE_PATH, SESSION_STORE_TYPE, session_store_from_env};
pub use errors::StoreError;
pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
pub use types::{RecordData, SessionStore};
