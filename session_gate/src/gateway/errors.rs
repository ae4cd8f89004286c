//! Error types for gateway operations

use thiserror::Error;

use crate::credentials::CredentialError;
use crate::csrf::CsrfError;
use crate::session::SessionError;

/// Errors that a gateway operation can return.
///
/// The display strings double as the client-visible error details, so
/// their wording is part of the HTTP contract.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A status or logout request carried no session cookie.
    #[error("No session_id cookie found")]
    MissingCookie,

    /// A guarded request carried no session cookie.
    #[error("No session_id cookie found in request")]
    Unauthenticated,

    /// A status or logout cookie names no record in the store.
    #[error("Invalid session_id cookie sent")]
    UnknownSession,

    /// A guarded request's cookie names no record in the store. Same
    /// condition as `UnknownSession` but the guard surface has its own
    /// detail string.
    #[error("Invalid session_id cookie")]
    InvalidSession,

    /// Login credentials did not validate.
    #[error("{0}")]
    BadCredentials(CredentialError),

    /// A guarded request failed the CSRF check.
    #[error("{0}")]
    Csrf(CsrfError),

    /// The session behind the cookie had expired; its record is purged.
    #[error("session expired for session_id={0}")]
    SessionExpired(String),

    /// The record behind the cookie could not be decoded; it is purged.
    #[error("Corrupted session record found in db")]
    CorruptedSession,

    /// Error from session or store operations
    #[error("Session error: {0}")]
    Session(SessionError),
}

// Custom From implementation that automatically logs errors

impl From<SessionError> for GatewayError {
    fn from(err: SessionError) -> Self {
        let error = Self::Session(err);
        tracing::error!("{}", error);
        error
    }
}
