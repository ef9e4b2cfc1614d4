//! FreeIPA error types.

use serde::Serialize;
use std::fmt;

/// Unified error type for all FreeIPA RPC operations.
///
/// Serializable so a dispatcher can report failures as structured results
/// instead of bare strings.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum IpaError {
    /// `call` was invoked before a successful `authenticate`.
    NotAuthenticated,
    /// The login endpoint rejected the credentials.
    AuthenticationFailed { status: u16 },
    /// The server rejected the request — either an in-band fault object or
    /// an HTTP-level error. `code` and `name` allow programmatic handling.
    Api { code: i64, message: String, name: String },
    /// Transport-level failure; no response was obtained from the server.
    Network(String),
    /// Client-side input mistake, raised before any I/O.
    InvalidParameter(String),
}

pub type IpaResult<T> = Result<T, IpaError>;

impl fmt::Display for IpaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "not authenticated: call authenticate() first"),
            Self::AuthenticationFailed { status } => {
                write!(f, "FreeIPA login failed with HTTP {}", status)
            }
            Self::Api { code, message, name } => {
                write!(f, "FreeIPA API error {} ({}): {}", code, name, message)
            }
            Self::Network(msg) => write!(f, "network error: {}", msg),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for IpaError {}

impl From<reqwest::Error> for IpaError {
    fn from(e: reqwest::Error) -> Self {
        IpaError::Network(e.to_string())
    }
}
