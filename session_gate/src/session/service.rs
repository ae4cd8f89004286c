use std::sync::Arc;

use super::clock::Clock;
use super::errors::SessionError;
use super::types::{NewSession, SessionLookup, SessionRecord};
use crate::storage::SessionStore;
use crate::utils::gen_random_string;

/// Creates, looks up and deletes sessions in the configured store.
///
/// The service never decides what a lookup outcome means for a request;
/// it only reports what the store holds.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Create a session for `username` that expires `ttl` seconds from now.
    ///
    /// The session id and CSRF token are independent random strings.
    pub async fn create(&self, username: &str, ttl: u64) -> Result<NewSession, SessionError> {
        let session_id = gen_random_string(32)?;
        let csrf_token = gen_random_string(32)?;
        let expires_at = self.expiration_timestamp(ttl);

        let record = SessionRecord {
            username: username.to_string(),
            csrf_token: csrf_token.clone(),
            expires_at,
        };
        self.store.put(&session_id, record.into()).await?;
        tracing::debug!(
            "Created new session for username: {}. Expires at: {}",
            username,
            expires_at
        );

        Ok(NewSession {
            session_id,
            csrf_token,
            expires_at,
        })
    }

    /// Look up a session id without mutating the store.
    ///
    /// A record that fails to decode is reported as
    /// [`SessionLookup::Corrupted`]; deleting it is the caller's call.
    pub async fn find(&self, session_id: &str) -> Result<SessionLookup, SessionError> {
        let Some(data) = self.store.get(session_id).await? else {
            return Ok(SessionLookup::Missing);
        };

        match SessionRecord::try_from(data) {
            Ok(record) => Ok(SessionLookup::Found(record)),
            Err(e) => {
                tracing::warn!(
                    "Failed to decode session record for session_id {}: {}",
                    session_id,
                    e
                );
                Ok(SessionLookup::Corrupted)
            }
        }
    }

    /// Remove a session from the store. Removing an absent session is a
    /// no-op.
    pub async fn delete(&self, session_id: &str) -> Result<(), SessionError> {
        self.store.remove(session_id).await?;
        Ok(())
    }

    /// Whether a session expiring at `expires_at` is still valid. A
    /// session is expired from the exact moment its expiry is reached.
    pub fn is_session_valid(&self, expires_at: f64) -> bool {
        let now = self.clock.now();
        tracing::debug!(
            "Checking session validity. Expires at: {}, current time: {}",
            expires_at,
            now
        );
        now < expires_at
    }

    /// Expiry timestamp for a session created now with the given ttl.
    pub fn expiration_timestamp(&self, ttl: u64) -> f64 {
        self.clock.now() + ttl as f64
    }
}
