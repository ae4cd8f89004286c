use http::StatusCode;
use session_gate::GatewayError;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for GatewayError to map variants to appropriate status codes
///
/// The error's display text becomes the response body, so clients see
/// the same detail strings on every surface.
impl<T> IntoResponseError<T> for Result<T, GatewayError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                GatewayError::MissingCookie => StatusCode::BAD_REQUEST,
                GatewayError::Unauthenticated
                | GatewayError::UnknownSession
                | GatewayError::InvalidSession
                | GatewayError::BadCredentials(_)
                | GatewayError::Csrf(_)
                | GatewayError::SessionExpired(_) => StatusCode::UNAUTHORIZED,
                GatewayError::CorruptedSession | GatewayError::Session(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session_gate::{CredentialError, CsrfError, SessionError, StoreError};

    #[test]
    fn test_missing_cookie_is_bad_request() {
        // Create a Result with GatewayError::MissingCookie
        let result: Result<(), GatewayError> = Err(GatewayError::MissingCookie);

        // Convert to response
        let response_error = result.into_response_error();

        // Verify status code is BAD_REQUEST (400) with the detail text
        assert_eq!(
            response_error.unwrap_err(),
            (
                StatusCode::BAD_REQUEST,
                "No session_id cookie found".to_string()
            )
        );
    }

    #[test]
    fn test_unauthenticated_is_unauthorized() {
        let result: Result<(), GatewayError> = Err(GatewayError::Unauthenticated);

        let response_error = result.into_response_error();

        assert_eq!(
            response_error.unwrap_err(),
            (
                StatusCode::UNAUTHORIZED,
                "No session_id cookie found in request".to_string()
            )
        );
    }

    #[test]
    fn test_unknown_session_is_unauthorized() {
        let result: Result<(), GatewayError> = Err(GatewayError::UnknownSession);

        let response_error = result.into_response_error();

        assert_eq!(
            response_error.unwrap_err(),
            (
                StatusCode::UNAUTHORIZED,
                "Invalid session_id cookie sent".to_string()
            )
        );
    }

    #[test]
    fn test_invalid_session_is_unauthorized() {
        let result: Result<(), GatewayError> = Err(GatewayError::InvalidSession);

        let response_error = result.into_response_error();

        assert_eq!(
            response_error.unwrap_err(),
            (
                StatusCode::UNAUTHORIZED,
                "Invalid session_id cookie".to_string()
            )
        );
    }

    #[test]
    fn test_bad_credentials_is_unauthorized() {
        let result: Result<(), GatewayError> = Err(GatewayError::BadCredentials(
            CredentialError::WrongPassword("admin".to_string()),
        ));

        let response_error = result.into_response_error();

        assert_eq!(
            response_error.unwrap_err(),
            (
                StatusCode::UNAUTHORIZED,
                "Password validation failed for user with username: admin".to_string()
            )
        );
    }

    #[test]
    fn test_csrf_errors_are_unauthorized() {
        let missing: Result<(), GatewayError> =
            Err(GatewayError::Csrf(CsrfError::MissingHeader));
        let mismatch: Result<(), GatewayError> = Err(GatewayError::Csrf(CsrfError::Mismatch));

        assert_eq!(
            missing.into_response_error().unwrap_err(),
            (
                StatusCode::UNAUTHORIZED,
                "No csrf token header found in request".to_string()
            )
        );
        assert_eq!(
            mismatch.into_response_error().unwrap_err(),
            (
                StatusCode::UNAUTHORIZED,
                "csrf token validation failed".to_string()
            )
        );
    }

    #[test]
    fn test_session_expired_is_unauthorized() {
        let result: Result<(), GatewayError> =
            Err(GatewayError::SessionExpired("sid123".to_string()));

        let response_error = result.into_response_error();

        assert_eq!(
            response_error.unwrap_err(),
            (
                StatusCode::UNAUTHORIZED,
                "session expired for session_id=sid123".to_string()
            )
        );
    }

    #[test]
    fn test_corrupted_session_is_internal_error() {
        let result: Result<(), GatewayError> = Err(GatewayError::CorruptedSession);

        let response_error = result.into_response_error();

        assert_eq!(
            response_error.unwrap_err(),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Corrupted session record found in db".to_string()
            )
        );
    }

    #[test]
    fn test_store_failure_is_internal_error() {
        let result: Result<(), GatewayError> = Err(GatewayError::Session(
            SessionError::Storage(StoreError::Io("disk offline".to_string())),
        ));

        let response_error = result.into_response_error();

        let (status, _) = response_error.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_success_case() {
        // Create a successful Result
        let result: Result<String, GatewayError> = Ok("Success".to_string());

        // Convert to response error
        let response_error = result.into_response_error();

        // Verify the result is Ok
        assert_eq!(response_error.unwrap(), "Success");
    }
}
