//! Fleet error types.

use serde::Serialize;
use std::fmt;

/// Unified error type for fleet operations.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum FleetError {
    /// Malformed identifier, hostname, or timeout value. Raised before any
    /// I/O so configuration mistakes never reach the network.
    Validation(String),
    /// Connection, authentication, or channel failure — the command never
    /// ran on the remote host.
    Channel { host: String, message: String },
    /// Worker task failure.
    Internal(String),
}

pub type FleetResult<T> = Result<T, FleetError>;

impl FleetError {
    /// The underlying message without the host prefix; used when folding a
    /// per-host failure into its batch result entry.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Internal(msg) => msg,
            Self::Channel { message, .. } => message,
        }
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation error: {}", msg),
            Self::Channel { host, message } => {
                write!(f, "SSH channel error on {}: {}", host, message)
            }
            Self::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for FleetError {}
