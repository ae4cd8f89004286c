use std::sync::Arc;

use session_gate::AuthGateway;

/// Shared state for the gateway routes and the [`AuthSession`]
/// extractor.
///
/// Cloning is cheap; the gateway itself lives behind an `Arc`. Any
/// application state can embed this and expose it via
/// `axum::extract::FromRef`.
///
/// [`AuthSession`]: crate::AuthSession
#[derive(Clone)]
pub struct GatewayState {
    pub gateway: Arc<AuthGateway>,
}

impl GatewayState {
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self { gateway }
    }
}
