use axum::RequestPartsExt;
use axum::extract::{FromRef, FromRequestParts};
use axum_extra::{TypedHeader, headers};
use http::{StatusCode, request::Parts};

use session_gate::{CSRF_HEADER, SESSION_COOKIE_NAME};

use super::error::IntoResponseError;
use super::state::GatewayState;

/// A guarded session, available as an axum extractor.
///
/// Extracting `AuthSession` runs the gateway's full guard: the session
/// cookie must name a live session and the `X-CSRF-TOKEN` header must
/// match the session's token. Requests that fail any check are rejected
/// with the gateway's status code and detail text; expired and corrupted
/// sessions are purged in the process.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use axum::{Router, routing::get};
/// use session_gate::{
///     AuthGateway, FixedCredentials, InMemorySessionStore, MonotonicClock, SessionService,
///     TracingEventSink,
/// };
/// use session_gate_axum::{AuthSession, GatewayState, gateway_router};
///
/// async fn protected_handler(session: AuthSession) -> String {
///     format!("Hello, {}!", session.username)
/// }
///
/// let store = Arc::new(InMemorySessionStore::new());
/// let sessions = SessionService::new(store, Arc::new(MonotonicClock::new()));
/// let gateway = AuthGateway::new(
///     sessions,
///     Arc::new(FixedCredentials::from_env()),
///     Arc::new(TracingEventSink),
///     60,
/// );
/// let state = GatewayState::new(Arc::new(gateway));
///
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler))
///     .with_state(state.clone())
///     .merge(gateway_router(state));
/// ```
#[derive(Clone, Debug)]
pub struct AuthSession {
    /// Session id from the request cookie
    pub session_id: String,
    /// Username the session was created for
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
    GatewayState: FromRef<S>,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let gateway_state = GatewayState::from_ref(state);

        // A request without a Cookie header is the same as one without a
        // session cookie; the gateway decides what that means.
        let cookies = parts.extract::<TypedHeader<headers::Cookie>>().await.ok();
        let session_cookie = cookies
            .as_ref()
            .and_then(|cookies| cookies.get(SESSION_COOKIE_NAME.as_str()));

        let csrf_header = parts
            .headers
            .get(CSRF_HEADER)
            .and_then(|h| h.to_str().ok());

        let authorized = gateway_state
            .gateway
            .authorize(session_cookie, csrf_header)
            .await
            .into_response_error()?;

        tracing::debug!(
            "Authorized request for session_id: {}",
            authorized.session_id
        );

        Ok(Self {
            session_id: authorized.session_id,
            username: authorized.username,
        })
    }
}
