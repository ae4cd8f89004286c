use subtle::ConstantTimeEq;
use thiserror::Error;

/// Request header carrying the CSRF token for guarded endpoints.
///
/// Header lookup is case-insensitive, so clients may send any casing.
pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsrfError {
    #[error("No csrf token header found in request")]
    MissingHeader,

    #[error("csrf token validation failed")]
    Mismatch,
}

/// Compare the token sent with a request against the session's token in
/// constant time.
pub(crate) fn verify_csrf_token(header_token: &str, session_token: &str) -> Result<(), CsrfError> {
    if header_token
        .as_bytes()
        .ct_eq(session_token.as_bytes())
        .into()
    {
        Ok(())
    } else {
        Err(CsrfError::Mismatch)
    }
}
