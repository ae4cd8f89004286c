use thiserror::Error;

use crate::storage::StoreError;
use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// The stored record exists but could not be decoded.
    #[error("Corrupted session record: {0}")]
    Corrupted(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupted_error_display() {
        // Given a SessionError for an undecodable record
        let error = SessionError::Corrupted("missing field `username`".to_string());

        // When converting to a string
        let error_string = error.to_string();

        // Then it should format correctly
        assert_eq!(
            error_string,
            "Corrupted session record: missing field `username`"
        );
    }

    #[test]
    fn test_from_store_error() {
        // Given a StoreError
        let store_error = StoreError::Io("disk offline".to_string());

        // When converting to SessionError
        let session_error = SessionError::from(store_error);

        // Then it should be a Storage variant carrying the inner message
        match session_error {
            SessionError::Storage(inner) => {
                assert_eq!(inner.to_string(), "Store I/O error: disk offline");
            }
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_from_util_error() {
        // Given a UtilError
        let util_error = UtilError::Crypto("rng unavailable".to_string());

        // When converting to SessionError
        let session_error = SessionError::from(util_error);

        // Then it should be a Utils variant
        assert!(matches!(session_error, SessionError::Utils(_)));
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<SessionError>();
    }
}
