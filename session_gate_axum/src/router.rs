//! Router for the gateway's login, status and logout endpoints

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers::{login, login_status, logout};
use super::state::GatewayState;

/// Create a router for the session endpoints with HTTP tracing.
///
/// The routes are relative, so the application chooses the mount point:
/// nesting under `/api/v1` yields `/api/v1/login`, `/api/v1/login/status`
/// and `/api/v1/logout`.
pub fn gateway_router(state: GatewayState) -> Router {
    gateway_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same endpoints as [`gateway_router`] without the HTTP tracing
/// middleware. Use this to add your own tracing layer or to keep test
/// output quiet.
pub fn gateway_router_no_trace(state: GatewayState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/login/status", get(login_status))
        .route("/logout", get(logout))
        .with_state(state)
}
