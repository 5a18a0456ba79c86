// Central Error Type for the Copr client

use thiserror::Error;

use crate::port::TransportError;

/// Classified failure of a single Copr RPC call.
///
/// Every kind is terminal for the call that produced it; nothing in this
/// crate retries.
#[derive(Error, Debug)]
pub enum CoprError {
    /// Authenticated command invoked without both login and token
    #[error(
        "Authentication is required to perform this command but no login was provided in configuration"
    )]
    AuthenticationMissing,

    #[error("Failed to call remote Copr procedure: {0}")]
    Transport(#[from] TransportError),

    #[error("Copr RPC failed: HTTP {status} {reason}")]
    Http { status: u16, reason: String },

    /// Malformed body, or a required field missing/mistyped
    #[error("Copr RPC protocol error: {0}")]
    Protocol(String),

    /// Well-formed envelope whose `output` is not "ok"
    #[error("Copr RPC returned failure response")]
    Rpc,

    #[error("Copr session is closed")]
    SessionClosed,
}

impl CoprError {
    pub(crate) fn protocol(msg: impl Into<String>) -> Self {
        CoprError::Protocol(msg.into())
    }

    /// HTTP status of an `Http` failure
    pub fn http_status(&self) -> Option<u16> {
        match self {
            CoprError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using CoprError
pub type Result<T> = std::result::Result<T, CoprError>;
