use axum::{Router, routing::get};
use std::net::SocketAddr;
use tokio::task::JoinHandle;

use session_gate_axum::{GatewayState, gateway_router};

use crate::handlers::all_resources;

/// Assemble the demo application.
///
/// The session endpoints live under `/api/v1` (`/login`, `/login/status`,
/// `/logout`) and the sample protected listing under
/// `/api/v1/protected/resources`.
pub(crate) fn build_router(state: GatewayState) -> Router {
    Router::new()
        .nest("/api/v1", gateway_router(state.clone()))
        .nest(
            "/api/v1/protected",
            Router::new()
                .route("/resources", get(all_resources))
                .with_state(state),
        )
}

pub(crate) fn spawn_http_server(port: u16, app: Router) -> JoinHandle<()> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        tracing::debug!("HTTP server listening on {}", addr);
        axum::serve(listener, app).await.unwrap();
    })
}
