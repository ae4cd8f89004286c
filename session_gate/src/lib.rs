//! session_gate - Cookie session authentication gateway
//!
//! This crate provides the session lifecycle state machine behind a
//! cookie-authenticated HTTP API: login, login status, logout and a guard
//! for protected requests, backed by a pluggable session store and
//! double-submit CSRF verification. All collaborators (store, clock,
//! credential check, event sink) are injected, so the whole state machine
//! is testable without a server or a filesystem.

mod credentials;
mod csrf;
mod events;
mod gateway;
mod session;
mod storage;
mod utils;

pub use credentials::{CredentialError, Credentials, FixedCredentials};

pub use csrf::{CSRF_HEADER, CsrfError};

pub use events::{AuthEvent, EventSink, RecordingEventSink, RemovalReason, TracingEventSink};

pub use gateway::{
    AuthGateway, AuthorizedSession, GatewayError, LoginOutcome, LogoutOutcome, StatusOutcome,
};

pub use session::{
    Clock, ManualClock, MonotonicClock, NewSession, SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME,
    SessionError, SessionLookup, SessionRecord, SessionService,
};

pub use storage::{
    FileSessionStore, InMemorySessionStore, RecordData, SESSION_STORE_PATH, SESSION_STORE_TYPE,
    SessionStore, StoreError, session_store_from_env,
};

pub use utils::{UtilError, gen_random_string, header_set_cookie};
