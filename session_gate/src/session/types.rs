use serde::{Deserialize, Serialize};

use super::errors::SessionError;
use crate::storage::RecordData;

/// A session record as persisted in the session store.
///
/// The field names are part of the store format, including the mixed
/// naming: `csrfToken` is camel-cased while `username` and `expires_at`
/// stay snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
    /// Seconds on the gateway clock at which the session expires.
    pub expires_at: f64,
}

impl From<SessionRecord> for RecordData {
    fn from(record: SessionRecord) -> Self {
        Self {
            value: serde_json::to_value(&record).expect("Failed to serialize SessionRecord"),
        }
    }
}

impl TryFrom<RecordData> for SessionRecord {
    type Error = SessionError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        serde_json::from_value(data.value).map_err(|e| SessionError::Corrupted(e.to_string()))
    }
}

/// Result of looking up a session id in the store.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLookup {
    /// No record is stored under this session id.
    Missing,
    /// A record is stored under this session id but could not be decoded.
    Corrupted,
    /// The decoded record. Whether it has expired is for the caller to decide.
    Found(SessionRecord),
}

/// A freshly created session together with its CSRF token.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub session_id: String,
    pub csrf_token: String,
    pub expires_at: f64,
}
