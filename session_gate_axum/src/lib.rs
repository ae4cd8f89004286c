//! Axum integration for the `session-gate` authentication gateway.
//!
//! Provides a ready-made router for the login, login-status and logout
//! endpoints, plus an [`AuthSession`] extractor that applies the full
//! guard (session cookie + CSRF header) to any protected route. All
//! handlers run against an [`AuthGateway`](session_gate::AuthGateway)
//! carried in [`GatewayState`]; nothing in this crate is global.

mod error;
mod handlers;
mod router;
mod session;
mod state;

pub use handlers::{LoginRequest, LoginResponse, LoginStatusResponse, LogoutResponse};
pub use router::{gateway_router, gateway_router_no_trace};
pub use session::AuthSession;
pub use state::GatewayState;
