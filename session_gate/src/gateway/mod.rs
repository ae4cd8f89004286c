mod errors;


pub use errors::GatewayError;

use std::sync::Arc;

use crate::credentials::Credentials;
use crate::csrf::{CsrfError, verify_csrf_token};
use crate::events::{AuthEvent, EventSink, RemovalReason};
use crate::session::{SessionLookup, SessionService};

/// Outcome of a login request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials were validated and a fresh session was created. The
    /// caller should hand the session id to the client as a cookie.
    LoggedIn {
        session_id: String,
        csrf_token: String,
    },
    /// The request already carried a valid session, so credentials were
    /// never checked and no cookie needs to be set.
    AlreadyActive {
        session_id: String,
        csrf_token: String,
    },
}

/// Outcome of a login status request.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusOutcome {
    LoggedIn {
        session_id: String,
        csrf_token: String,
    },
    LoggedOut,
}

/// Outcome of a logout request. Both variants leave the record purged.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoutOutcome {
    LoggedOut {
        session_id: String,
        username: String,
    },
    AlreadyExpired {
        session_id: String,
        username: String,
    },
}

/// A session that passed every guard check.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizedSession {
    pub session_id: String,
    pub username: String,
}

/// The authentication gateway: login, status, logout and the guard for
/// protected requests.
///
/// Every operation takes the session cookie value as the caller saw it;
/// the gateway itself never touches HTTP.
pub struct AuthGateway {
    sessions: SessionService,
    credentials: Arc<dyn Credentials>,
    events: Arc<dyn EventSink>,
    session_ttl: u64,
}

impl AuthGateway {
    pub fn new(
        sessions: SessionService,
        credentials: Arc<dyn Credentials>,
        events: Arc<dyn EventSink>,
        session_ttl: u64,
    ) -> Self {
        Self {
            sessions,
            credentials,
            events,
            session_ttl,
        }
    }

    /// Lifetime in seconds for newly created sessions, which is also the
    /// cookie Max-Age the HTTP layer should send.
    pub fn session_ttl(&self) -> u64 {
        self.session_ttl
    }

    /// Handle a login request.
    ///
    /// A valid session on the request short-circuits the whole flow:
    /// the submitted credentials are not checked and the existing
    /// session is returned. An expired or corrupted record is purged
    /// first and the login proceeds; an unknown cookie only produces a
    /// warning. Credentials are validated after the cookie has been
    /// dealt with, and nothing is mutated when they fail.
    pub async fn login(
        &self,
        session_cookie: Option<&str>,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, GatewayError> {
        tracing::info!("Received a login request for username: {}", username);

        if let Some(session_id) = session_cookie {
            match self.sessions.find(session_id).await? {
                SessionLookup::Missing => {
                    self.events.emit(AuthEvent::UnknownSessionCookie {
                        session_id: session_id.to_string(),
                    });
                }
                SessionLookup::Corrupted => {
                    self.purge(session_id, RemovalReason::Corrupted).await?;
                }
                SessionLookup::Found(record) => {
                    if self.sessions.is_session_valid(record.expires_at) {
                        tracing::info!("Session is valid. Skipping login");
                        self.events.emit(AuthEvent::SessionReused {
                            session_id: session_id.to_string(),
                            username: record.username,
                        });
                        return Ok(LoginOutcome::AlreadyActive {
                            session_id: session_id.to_string(),
                            csrf_token: record.csrf_token,
                        });
                    }
                    tracing::info!("Session is expired");
                    self.purge(session_id, RemovalReason::Expired).await?;
                }
            }
        }

        if let Err(e) = self.credentials.authenticate(username, password).await {
            self.events.emit(AuthEvent::CredentialsRejected {
                username: username.to_string(),
            });
            return Err(GatewayError::BadCredentials(e));
        }

        let session = self.sessions.create(username, self.session_ttl).await?;
        self.events.emit(AuthEvent::SessionCreated {
            session_id: session.session_id.clone(),
            username: username.to_string(),
        });
        Ok(LoginOutcome::LoggedIn {
            session_id: session.session_id,
            csrf_token: session.csrf_token,
        })
    }

    /// Report whether the request's session is logged in.
    ///
    /// An expired session is purged and reported as logged out rather
    /// than as an error; the client learns it simply has no session
    /// anymore.
    pub async fn status(
        &self,
        session_cookie: Option<&str>,
    ) -> Result<StatusOutcome, GatewayError> {
        let session_id = session_cookie.ok_or(GatewayError::MissingCookie)?;

        match self.sessions.find(session_id).await? {
            SessionLookup::Missing => {
                self.note_unknown_cookie(session_id);
                Err(GatewayError::UnknownSession)
            }
            SessionLookup::Corrupted => {
                self.purge(session_id, RemovalReason::Corrupted).await?;
                Err(GatewayError::CorruptedSession)
            }
            SessionLookup::Found(record) => {
                if self.sessions.is_session_valid(record.expires_at) {
                    Ok(StatusOutcome::LoggedIn {
                        session_id: session_id.to_string(),
                        csrf_token: record.csrf_token,
                    })
                } else {
                    self.purge(session_id, RemovalReason::Expired).await?;
                    Ok(StatusOutcome::LoggedOut)
                }
            }
        }
    }

    /// Handle a logout request.
    ///
    /// Valid and expired sessions are both purged; the outcome records
    /// which of the two it was so the HTTP layer can phrase its answer.
    pub async fn logout(
        &self,
        session_cookie: Option<&str>,
    ) -> Result<LogoutOutcome, GatewayError> {
        let session_id = session_cookie.ok_or(GatewayError::MissingCookie)?;
        tracing::info!("Received a logout request for session_id: {}", session_id);

        match self.sessions.find(session_id).await? {
            SessionLookup::Missing => {
                self.note_unknown_cookie(session_id);
                Err(GatewayError::UnknownSession)
            }
            SessionLookup::Corrupted => {
                self.purge(session_id, RemovalReason::Corrupted).await?;
                Err(GatewayError::CorruptedSession)
            }
            SessionLookup::Found(record) => {
                if self.sessions.is_session_valid(record.expires_at) {
                    self.purge(session_id, RemovalReason::LoggedOut).await?;
                    Ok(LogoutOutcome::LoggedOut {
                        session_id: session_id.to_string(),
                        username: record.username,
                    })
                } else {
                    tracing::info!("Session is expired");
                    self.purge(session_id, RemovalReason::Expired).await?;
                    Ok(LogoutOutcome::AlreadyExpired {
                        session_id: session_id.to_string(),
                        username: record.username,
                    })
                }
            }
        }
    }

    /// Guard a protected request.
    ///
    /// Checks run in a fixed order: cookie present, record exists, CSRF
    /// header present, record decodes, CSRF token matches, session not
    /// expired. A missing CSRF header therefore rejects the request
    /// before a corrupted record would be purged, and a CSRF mismatch
    /// leaves the record untouched.
    pub async fn authorize(
        &self,
        session_cookie: Option<&str>,
        csrf_header: Option<&str>,
    ) -> Result<AuthorizedSession, GatewayError> {
        let session_id = session_cookie.ok_or(GatewayError::Unauthenticated)?;

        match self.sessions.find(session_id).await? {
            SessionLookup::Missing => {
                self.note_unknown_cookie(session_id);
                Err(GatewayError::InvalidSession)
            }
            SessionLookup::Corrupted => {
                self.require_csrf_header(session_id, csrf_header)?;
                self.purge(session_id, RemovalReason::Corrupted).await?;
                Err(GatewayError::CorruptedSession)
            }
            SessionLookup::Found(record) => {
                let header_token = self.require_csrf_header(session_id, csrf_header)?;
                if let Err(e) = verify_csrf_token(header_token, &record.csrf_token) {
                    self.events.emit(AuthEvent::CsrfRejected {
                        session_id: session_id.to_string(),
                        reason: e.clone(),
                    });
                    return Err(GatewayError::Csrf(e));
                }

                if self.sessions.is_session_valid(record.expires_at) {
                    Ok(AuthorizedSession {
                        session_id: session_id.to_string(),
                        username: record.username,
                    })
                } else {
                    tracing::info!("Session is expired");
                    self.purge(session_id, RemovalReason::Expired).await?;
                    Err(GatewayError::SessionExpired(session_id.to_string()))
                }
            }
        }
    }

    /// Delete a session record and emit the matching event.
    async fn purge(&self, session_id: &str, reason: RemovalReason) -> Result<(), GatewayError> {
        match reason {
            RemovalReason::Expired => {
                tracing::info!("Deleting expired session: {}", session_id);
            }
            RemovalReason::Corrupted => {
                tracing::warn!("Deleting corrupted session record: {}", session_id);
            }
            RemovalReason::LoggedOut => {
                tracing::info!("Deleting session on logout: {}", session_id);
            }
        }
        self.sessions.delete(session_id).await?;
        self.events.emit(AuthEvent::SessionDeleted {
            session_id: session_id.to_string(),
            reason,
        });
        Ok(())
    }

    fn note_unknown_cookie(&self, session_id: &str) {
        self.events.emit(AuthEvent::UnknownSessionCookie {
            session_id: session_id.to_string(),
        });
    }

    fn require_csrf_header<'a>(
        &self,
        session_id: &str,
        csrf_header: Option<&'a str>,
    ) -> Result<&'a str, GatewayError> {
        match csrf_header {
            Some(token) => Ok(token),
            None => {
                self.events.emit(AuthEvent::CsrfRejected {
                    session_id: session_id.to_string(),
                    reason: CsrfError::MissingHeader,
                });
                Err(GatewayError::Csrf(CsrfError::MissingHeader))
            }
        }
    }
}
