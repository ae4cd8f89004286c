use std::sync::LazyLock;

use async_trait::async_trait;
use subtle::ConstantTimeEq;
use thiserror::Error;

static ADMIN_USERNAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("GATEWAY_ADMIN_USERNAME")
        .ok()
        .unwrap_or("admin".to_string())
});

static ADMIN_PASSWORD: LazyLock<String> = LazyLock::new(|| {
    std::env::var("GATEWAY_ADMIN_PASSWORD")
        .ok()
        .unwrap_or("P@ssword9".to_string())
});

// The two display strings are client-visible 401 details. The unknown
// username one has no space after the colon; the password one does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("User with username:{0} not found")]
    UnknownUsername(String),

    #[error("Password validation failed for user with username: {0}")]
    WrongPassword(String),
}

/// Validates login credentials.
///
/// The gateway only consults this during login; established sessions are
/// never re-checked against it.
#[async_trait]
pub trait Credentials: Send + Sync + 'static {
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), CredentialError>;
}

/// A single username/password pair, typically sourced from the
/// environment.
#[derive(Clone)]
pub struct FixedCredentials {
    username: String,
    password: String,
}

impl FixedCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The pair configured via `GATEWAY_ADMIN_USERNAME` and
    /// `GATEWAY_ADMIN_PASSWORD`.
    pub fn from_env() -> Self {
        Self::new(ADMIN_USERNAME.as_str(), ADMIN_PASSWORD.as_str())
    }
}

#[async_trait]
impl Credentials for FixedCredentials {
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), CredentialError> {
        tracing::debug!("Validating credentials for username: {}", username);

        if username != self.username {
            return Err(CredentialError::UnknownUsername(username.to_string()));
        }

        if password
            .as_bytes()
            .ct_eq(self.password.as_bytes())
            .into()
        {
            Ok(())
        } else {
            Err(CredentialError::WrongPassword(username.to_string()))
        }
    }
}
