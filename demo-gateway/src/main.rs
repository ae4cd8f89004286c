use dotenvy::dotenv;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_gate::{
    AuthGateway, FixedCredentials, MonotonicClock, SESSION_COOKIE_MAX_AGE, SessionService,
    TracingEventSink, session_store_from_env,
};
use session_gate_axum::GatewayState;

mod handlers;
mod server;

use crate::server::{build_router, spawn_http_server};

const HTTP_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Initializing session store");
    let store = session_store_from_env()?;
    store.init().await?;
    tracing::info!("Session store initialized successfully");

    let sessions = SessionService::new(store, Arc::new(MonotonicClock::new()));
    let gateway = AuthGateway::new(
        sessions,
        Arc::new(FixedCredentials::from_env()),
        Arc::new(TracingEventSink),
        *SESSION_COOKIE_MAX_AGE,
    );
    let state = GatewayState::new(Arc::new(gateway));

    let app = build_router(state);

    let http_server = spawn_http_server(HTTP_PORT, app);
    http_server.await?;
    Ok(())
}
