use std::sync::Mutex;

use crate::csrf::CsrfError;

/// Why the gateway removed a session record from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    Expired,
    Corrupted,
    LoggedOut,
}

/// Authentication events emitted by the gateway.
///
/// Every session mutation and every rejection produces exactly one
/// event, so a sink sees the full authentication history.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SessionCreated {
        session_id: String,
        username: String,
    },
    /// A login found an active session and skipped credential checks.
    SessionReused {
        session_id: String,
        username: String,
    },
    SessionDeleted {
        session_id: String,
        reason: RemovalReason,
    },
    CsrfRejected {
        session_id: String,
        reason: CsrfError,
    },
    CredentialsRejected {
        username: String,
    },
    /// A request carried a session cookie with no record behind it.
    UnknownSessionCookie {
        session_id: String,
    },
}

/// Receives gateway events. Implementations must not block.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: AuthEvent);
}

/// Logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: AuthEvent) {
        match event {
            AuthEvent::SessionCreated {
                session_id,
                username,
            } => {
                tracing::info!("Created session {} for username: {}", session_id, username);
            }
            AuthEvent::SessionReused {
                session_id,
                username,
            } => {
                tracing::info!(
                    "Reusing active session {} for username: {}. Skipping login",
                    session_id,
                    username
                );
            }
            AuthEvent::SessionDeleted { session_id, reason } => {
                tracing::info!("Deleted session {} ({:?})", session_id, reason);
            }
            AuthEvent::CsrfRejected { session_id, reason } => {
                tracing::warn!("Rejected request for session {}: {}", session_id, reason);
            }
            AuthEvent::CredentialsRejected { username } => {
                tracing::warn!("Credential validation failed for username: {}", username);
            }
            AuthEvent::UnknownSessionCookie { session_id } => {
                tracing::warn!(
                    "No record for session cookie {}: stale cookie or forged session id",
                    session_id
                );
            }
        }
    }
}

/// Collects events for inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<AuthEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything recorded so far, in emission order.
    pub fn take(&self) -> Vec<AuthEvent> {
        std::mem::take(
            &mut *self
                .events
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        )
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: AuthEvent) {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_preserves_emission_order() {
        // Given a recording sink
        let sink = RecordingEventSink::new();

        // When emitting two events
        sink.emit(AuthEvent::SessionCreated {
            session_id: "sid1".to_string(),
            username: "alice".to_string(),
        });
        sink.emit(AuthEvent::SessionDeleted {
            session_id: "sid1".to_string(),
            reason: RemovalReason::LoggedOut,
        });

        // Then take should drain them in order
        let events = sink.take();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            AuthEvent::SessionCreated {
                session_id: "sid1".to_string(),
                username: "alice".to_string(),
            }
        );
        assert_eq!(
            events[1],
            AuthEvent::SessionDeleted {
                session_id: "sid1".to_string(),
                reason: RemovalReason::LoggedOut,
            }
        );

        // And a second take should find nothing
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_tracing_sink_accepts_every_event() {
        // The tracing sink only forwards to the subscriber; emitting every
        // variant must not panic.
        let sink = TracingEventSink;
        sink.emit(AuthEvent::SessionCreated {
            session_id: "sid".to_string(),
            username: "alice".to_string(),
        });
        sink.emit(AuthEvent::SessionReused {
            session_id: "sid".to_string(),
            username: "alice".to_string(),
        });
        sink.emit(AuthEvent::SessionDeleted {
            session_id: "sid".to_string(),
            reason: RemovalReason::Expired,
        });
        sink.emit(AuthEvent::CsrfRejected {
            session_id: "sid".to_string(),
            reason: CsrfError::MissingHeader,
        });
        sink.emit(AuthEvent::CredentialsRejected {
            username: "alice".to_string(),
        });
        sink.emit(AuthEvent::UnknownSessionCookie {
            session_id: "sid".to_string(),
        });
    }
}
