//! Scanner trait abstraction.
//!
//! Defines the interface the scan driver checks ports through, so the
//! driver can be exercised without touching the network.

use crate::error::ScanResult;
use crate::types::Port;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Status of a scanned port.
///
/// The third outcome, an unexpected failure, is the `Err` side of
/// [`Scanner::scan_port`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    /// The connection was accepted.
    Open,
    /// The remote host actively refused the connection.
    Closed,
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// A port worth reporting, with its service name when open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortResult {
    /// The port that was scanned.
    pub port: Port,
    /// Status determined by the connect attempt.
    pub status: PortStatus,
    /// Registered service name; `None` for closed ports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl PortResult {
    /// An open port and the name it is registered under.
    pub fn open(port: Port, service: impl Into<String>) -> Self {
        Self {
            port,
            status: PortStatus::Open,
            service: Some(service.into()),
        }
    }

    /// A closed port.
    pub fn closed(port: Port) -> Self {
        Self {
            port,
            status: PortStatus::Closed,
            service: None,
        }
    }

    /// Check if the port is open.
    pub fn is_open(&self) -> bool {
        self.status == PortStatus::Open
    }
}

/// The report line: `22/tcp, ssh` or `22/tcp, Not open.`
impl fmt::Display for PortResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.service.as_deref()) {
            (PortStatus::Open, Some(service)) => write!(f, "{}/tcp, {}", self.port, service),
            (PortStatus::Open, None) => write!(f, "{}/tcp, unknown", self.port),
            (PortStatus::Closed, _) => write!(f, "{}/tcp, Not open.", self.port),
        }
    }
}

/// Trait for port scanner implementations.
///
/// Each call is one independent connect attempt: it must finish within a
/// bounded time and must not keep any socket alive after returning.
pub trait Scanner {
    /// Scan a single port.
    fn scan_port(&self, port: Port) -> ScanResult<PortStatus>;

    /// Get the target address.
    fn target(&self) -> Ipv4Addr;
}
