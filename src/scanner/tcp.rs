//! TCP Connect Scanner implementation.
//!
//! Performs blocking TCP connects through `socket2`, so the socket's
//! send/receive timeouts can be set before connecting and the connect itself
//! is bounded by the platform's non-blocking connect + poll.

use crate::config::AppSettings;
use crate::error::{ScanError, ScanResult};
use crate::scanner::traits::{PortStatus, Scanner};
use crate::types::Port;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;
use tracing::debug;

/// Per-connect socket timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectTimeouts {
    pub send: Duration,
    pub recv: Duration,
    pub connect: Duration,
}

impl Default for ConnectTimeouts {
    fn default() -> Self {
        Self {
            send: Duration::from_secs(1),
            recv: Duration::from_secs(5),
            connect: Duration::from_secs(5),
        }
    }
}

impl From<&AppSettings> for ConnectTimeouts {
    fn from(settings: &AppSettings) -> Self {
        Self {
            send: Duration::from_millis(settings.send_timeout_ms),
            recv: Duration::from_millis(settings.recv_timeout_ms),
            connect: Duration::from_millis(settings.connect_timeout_ms),
        }
    }
}

/// TCP Connect Scanner.
///
/// Uses standard socket connect() calls to determine port status.
/// Does not require elevated privileges. Every connect attempt owns a fresh socket
/// that is closed before `scan_port` returns.
pub struct TcpConnectScanner {
    target: Ipv4Addr,
    timeouts: ConnectTimeouts,
}

impl TcpConnectScanner {
    /// Create a new TCP connect scanner.
    pub fn new(target: Ipv4Addr, timeouts: ConnectTimeouts) -> Self {
        Self { target, timeouts }
    }

    fn open_socket(&self) -> ScanResult<Socket> {
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))
            .map_err(ScanError::SocketCreation)?;
        socket.set_write_timeout(Some(self.timeouts.send))?;
        socket.set_read_timeout(Some(self.timeouts.recv))?;
        Ok(socket)
    }
}

impl Scanner for TcpConnectScanner {
    fn scan_port(&self, port: Port) -> ScanResult<PortStatus> {
        let addr = SocketAddr::V4(SocketAddrV4::new(self.target, port.as_u16()));
        let socket = self.open_socket()?;
        let outcome = socket.connect_timeout(&addr.into(), self.timeouts.connect);
        drop(socket);

        let status = classify(port, outcome)?;
        debug!(%port, %status, "port scanned");
        Ok(status)
    }

    fn target(&self) -> Ipv4Addr {
        self.target
    }
}

/// Map a connect result onto a port status.
fn classify(port: Port, outcome: io::Result<()>) -> ScanResult<PortStatus> {
    match outcome {
        Ok(()) => Ok(PortStatus::Open),
        Err(e) if e.kind() == io::ErrorKind::ConnectionRefused => Ok(PortStatus::Closed),
        Err(e) if e.kind() == io::ErrorKind::TimedOut => {
            debug!(%port, error = %e, "connect timed out");
            Err(ScanError::Timeout { port })
        }
        Err(e) => {
            debug!(%port, error = %e, "connect failed");
            Err(ScanError::ConnectionFailed { port, source: e })
        }
    }
}
