//! # portscout - A Sequential TCP Port Scanner
//!
//! portscout resolves a target to an IPv4 address, then walks a port range
//! one port at a time, attempting a timeout-bounded TCP connect on each and
//! naming the service behind every port that accepts.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use portscout::scanner::{ConnectTimeouts, Scanner, TcpConnectScanner};
//! use portscout::types::{Port, ScanTarget};
//!
//! let target = ScanTarget::resolve("127.0.0.1").unwrap();
//! let scanner = TcpConnectScanner::new(target.ip, ConnectTimeouts::default());
//!
//! let port = Port::new(22).unwrap();
//! match scanner.scan_port(port) {
//!     Ok(status) => println!("Port {} is {}", port, status),
//!     Err(e) => eprintln!("scan failed: {}", e),
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Port, range and target types, plus target resolution
//! - [`scanner`] - The TCP connect scanner, the `Scanner` trait and the scan driver
//! - [`services`] - Port to service name lookup
//! - [`config`] - Timeout and services settings
//! - [`error`] - Error types
//! - [`output`] - Report formatting

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use error::{ConfigError, ScanError};
pub use scanner::{run_scan, PortResult, PortStatus, ScanReport, Scanner};
pub use types::{Port, PortRange, ScanMode, ScanTarget};
