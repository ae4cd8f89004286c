use axum::{Json, extract::State};
use axum_extra::{TypedHeader, headers};
use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use session_gate::{
    LoginOutcome, LogoutOutcome, SESSION_COOKIE_NAME, StatusOutcome, header_set_cookie,
};

use super::error::IntoResponseError;
use super::state::GatewayState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub session_id: String,
    pub csrf_token: String,
}

/// `session_id` and `csrf_token` serialize as explicit nulls when logged
/// out; clients rely on the fields being present either way.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatusResponse {
    pub is_logged_in: bool,
    pub session_id: Option<String>,
    pub csrf_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// The session cookie value, if the request carried one.
fn session_cookie(cookies: &Option<TypedHeader<headers::Cookie>>) -> Option<&str> {
    cookies
        .as_ref()
        .and_then(|cookies| cookies.get(SESSION_COOKIE_NAME.as_str()))
}

pub(super) async fn login(
    State(state): State<GatewayState>,
    cookies: Option<TypedHeader<headers::Cookie>>,
    Json(body): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<LoginResponse>), (StatusCode, String)> {
    let outcome = state
        .gateway
        .login(session_cookie(&cookies), &body.username, &body.password)
        .await
        .into_response_error()?;

    let mut headers = HeaderMap::new();
    let response = match outcome {
        LoginOutcome::LoggedIn {
            session_id,
            csrf_token,
        } => {
            header_set_cookie(
                &mut headers,
                SESSION_COOKIE_NAME.to_string(),
                session_id.clone(),
                state.gateway.session_ttl() as i64,
            )
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

            LoginResponse {
                message: format!("Logged in user: {} successfully", body.username),
                session_id,
                csrf_token,
            }
        }
        // The active session is returned as-is; no new cookie is set.
        LoginOutcome::AlreadyActive {
            session_id,
            csrf_token,
        } => LoginResponse {
            message: format!(
                "There is already an active session for user: {}. Skipping login",
                body.username
            ),
            session_id,
            csrf_token,
        },
    };

    Ok((headers, Json(response)))
}

pub(super) async fn login_status(
    State(state): State<GatewayState>,
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Result<Json<LoginStatusResponse>, (StatusCode, String)> {
    tracing::info!("Received a login status request");

    let outcome = state
        .gateway
        .status(session_cookie(&cookies))
        .await
        .into_response_error()?;

    let response = match outcome {
        StatusOutcome::LoggedIn {
            session_id,
            csrf_token,
        } => LoginStatusResponse {
            is_logged_in: true,
            session_id: Some(session_id),
            csrf_token: Some(csrf_token),
        },
        StatusOutcome::LoggedOut => LoginStatusResponse {
            is_logged_in: false,
            session_id: None,
            csrf_token: None,
        },
    };

    Ok(Json(response))
}

pub(super) async fn logout(
    State(state): State<GatewayState>,
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Result<(HeaderMap, Json<LogoutResponse>), (StatusCode, String)> {
    tracing::info!("Received a logout request");

    let outcome = state
        .gateway
        .logout(session_cookie(&cookies))
        .await
        .into_response_error()?;

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.to_string(),
        String::new(),
        0,
    )
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let message = match outcome {
        LogoutOutcome::LoggedOut {
            session_id,
            username,
        } => format!("Logged out session_id:{session_id} for user: {username} successfully"),
        LogoutOutcome::AlreadyExpired {
            session_id,
            username,
        } => format!("session_id:{session_id} for user: {username} is already expired"),
    };

    Ok((headers, Json(LogoutResponse { message })))
}
