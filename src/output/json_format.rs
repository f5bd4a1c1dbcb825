//! JSON output formatting.

use crate::scanner::ScanReport;
use std::io::{self, Write};

/// Print the report as pretty JSON.
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    out.flush()
}
