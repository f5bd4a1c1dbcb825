//! Error types for portscout.
//!
//! Uses `thiserror` for ergonomic error definitions. A refused connection is
//! not an error: it is a closed port.

use crate::types::Port;
use std::path::PathBuf;
use thiserror::Error;

/// A connect attempt that ended in something other than open or refused.
///
/// Any of these aborts the scan that produced it.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to create socket")]
    SocketCreation(#[source] std::io::Error),

    #[error("connect to port {port}/tcp timed out")]
    Timeout { port: Port },

    #[error("connect to port {port}/tcp failed")]
    ConnectionFailed {
        port: Port,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// The port whose connect attempt failed, when the failure is tied to one.
    pub fn port(&self) -> Option<Port> {
        match self {
            Self::Timeout { port } | Self::ConnectionFailed { port, .. } => Some(*port),
            Self::SocketCreation(_) | Self::Io(_) => None,
        }
    }
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidFormat(e.to_string())
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
