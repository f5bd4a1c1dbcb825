//! Scanner module - drives a scan over a port range.
//!
//! Ports are scanned strictly one at a time in ascending order. The first
//! connect attempt that fails with anything other than a refusal ends the scan.

pub mod tcp;
pub mod traits;

use crate::error::ScanResult;
use crate::services::ServiceDb;
use crate::types::{ScanMode, ScanTarget};
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io;
use std::time::Instant;
use tracing::{debug, info};

pub use tcp::{ConnectTimeouts, TcpConnectScanner};
pub use traits::{PortResult, PortStatus, Scanner};

/// Complete scan results.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub target: ScanTarget,
    pub mode: ScanMode,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub ports_scanned: usize,
    pub open_ports: usize,
    pub closed_ports: usize,
    /// Reported ports in ascending order: open ports, plus the closed
    /// port of a single-port scan.
    pub results: Vec<PortResult>,
}

/// Execute a complete scan.
///
/// `on_result` sees each reported port as soon as it is classified, in
/// port order. Returns the first scan error unchanged; ports after it
/// are never scanned.
pub fn run_scan<S, F>(
    scanner: &S,
    target: &ScanTarget,
    services: &ServiceDb,
    mode: ScanMode,
    progress: Option<&ProgressBar>,
    mut on_result: F,
) -> ScanResult<ScanReport>
where
    S: Scanner + ?Sized,
    F: FnMut(&PortResult) -> io::Result<()>,
{
    let started_at = Utc::now();
    let start = Instant::now();
    let range = mode.range();
    info!(host = %target, %mode, "starting scan");

    let mut results = Vec::new();
    let mut ports_scanned = 0;
    let mut open_ports = 0;
    let mut closed_ports = 0;

    for port in range.iter() {
        let status = scanner.scan_port(port)?;
        ports_scanned += 1;

        if let Some(pb) = progress {
            pb.inc(1);
        }

        let result = match status {
            PortStatus::Open => {
                open_ports += 1;
                PortResult::open(port, services.describe(port.as_u16()))
            }
            PortStatus::Closed => {
                closed_ports += 1;
                if !mode.reports_closed() {
                    continue;
                }
                PortResult::closed(port)
            }
        };

        match progress {
            Some(pb) => pb.suspend(|| on_result(&result))?,
            None => on_result(&result)?,
        }
        results.push(result);
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    debug!(ports_scanned, open_ports, duration_ms, "scan complete");

    Ok(ScanReport {
        target: target.clone(),
        mode,
        started_at,
        duration_ms,
        ports_scanned,
        open_ports,
        closed_ports,
        results,
    })
}

/// Progress bar for range scans, drawn on stderr.
pub fn progress_bar(mode: ScanMode) -> ProgressBar {
    let pb = ProgressBar::new(mode.range().len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}
