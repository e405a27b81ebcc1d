use thiserror::Error;

use crate::gateway::GatewayError;

/// Errors surfaced by protected resource operations
#[derive(Debug, Error, Clone)]
pub enum CoordinationError {
    /// The backend rejected the credential token; the session has been reset
    #[error("Session expired")]
    SessionExpired,

    /// Error from the HTTP gateway
    #[error("Gateway error: {0}")]
    Gateway(GatewayError),
}

impl From<GatewayError> for CoordinationError {
    fn from(err: GatewayError) -> Self {
        let error = Self::Gateway(err);
        tracing::error!("{}", error);
        error
    }
}
