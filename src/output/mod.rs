//! Output formatting module.
//!
//! Plain output streams one line per reported port while the scan runs.
//! JSON and CSV are written once, from the finished report.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::print_error;

use crate::cli::OutputFormat;
use crate::scanner::{PortResult, ScanReport};
use crate::types::ScanTarget;
use std::io::{self, Write};

/// Writes a scan report to `out` in the chosen format.
pub struct ReportWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Called once the target is resolved, before any port is scanned.
    pub fn begin(&mut self, target: &ScanTarget) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => plain::write_header(&mut self.out, target),
            OutputFormat::Json | OutputFormat::Csv => Ok(()),
        }
    }

    /// Called for every reported port, in port order.
    pub fn port(&mut self, result: &PortResult) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => plain::write_result(&mut self.out, result),
            OutputFormat::Json | OutputFormat::Csv => Ok(()),
        }
    }

    /// Called after the last port of a successful scan.
    pub fn finish(&mut self, report: &ScanReport) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => plain::write_footer(&mut self.out),
            OutputFormat::Json => write_json(&mut self.out, report),
            OutputFormat::Csv => write_csv(&mut self.out, report),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
