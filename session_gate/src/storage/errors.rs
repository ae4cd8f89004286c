use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(String),

    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),

    #[error("Store configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        // Given a StoreError with an Io variant
        let error = StoreError::Io("file missing".to_string());

        // When converting to a string
        let error_string = error.to_string();

        // Then it should format correctly
        assert_eq!(error_string, "Store I/O error: file missing");
    }

    #[test]
    fn test_serde_error_display() {
        // Given a StoreError with a Serde variant
        let error = StoreError::Serde("Invalid JSON".to_string());

        // When converting to a string
        let error_string = error.to_string();

        // Then it should format correctly
        assert_eq!(error_string, "Json conversion(Serde) error: Invalid JSON");
    }

    #[test]
    fn test_from_io_error() {
        // Given an std::io::Error
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");

        // When converting to StoreError
        let store_error = StoreError::from(io_error);

        // Then it should be an Io variant
        match store_error {
            StoreError::Io(msg) => assert!(msg.contains("no such file")),
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_from_serde_error() {
        // Given a serde_json::Error
        let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

        // When converting to StoreError
        let store_error = StoreError::from(serde_error);

        // Then it should be a Serde variant
        match store_error {
            StoreError::Serde(msg) => {
                assert!(msg.contains("expected") || msg.contains("invalid"));
            }
            _ => panic!("Expected Serde variant"),
        }
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<StoreError>();
    }
}
