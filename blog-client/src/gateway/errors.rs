use http::StatusCode;
use thiserror::Error;

/// Errors produced by the HTTP gateway
///
/// Non-2xx responses are classified by status class up front so that callers
/// never have to inspect stringified errors. Authorization failures are the
/// single class the session layer reacts to; see
/// [`GatewayError::is_authorization_failure`].
#[derive(Debug, Error, Clone)]
pub enum GatewayError {
    /// The request never produced an HTTP response (DNS, refused, I/O)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a 4xx status
    #[error("Client error: {0}")]
    ClientError(StatusCode),

    /// The backend answered with a 5xx status
    #[error("Server error: {0}")]
    ServerError(StatusCode),

    /// The response body could not be deserialized
    #[error("Decode error: {0}")]
    Decode(String),

    /// The endpoint path could not be joined to the base address
    #[error("Invalid request URL: {0}")]
    BadRequestUrl(String),
}

impl GatewayError {
    /// Whether this error means the presented credential token was rejected
    ///
    /// True exactly for 401 Unauthorized and 403 Forbidden. Every other
    /// error class leaves the session alone.
    pub fn is_authorization_failure(&self) -> bool {
        matches!(
            self,
            Self::ClientError(StatusCode::UNAUTHORIZED) | Self::ClientError(StatusCode::FORBIDDEN)
        )
    }

    pub(crate) fn from_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::ServerError(status)
        } else {
            Self::ClientError(status)
        }
    }
}
