use thiserror::Error;

use crate::gateway::GatewayError;

#[derive(Debug, Error, Clone)]
pub enum AuthError {
    /// The submission never left the client
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error from the HTTP gateway
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}
