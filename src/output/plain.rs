//! Plain text output formatting.
//!
//! The report is line oriented and uncolored so it can be piped and
//! diffed; only the stderr messages are styled.

use crate::scanner::PortResult;
use crate::types::ScanTarget;
use console::style;
use std::io::{self, Write};

/// Print the scan banner before the first port is scanned.
pub fn write_header<W: Write>(out: &mut W, target: &ScanTarget) -> io::Result<()> {
    writeln!(out, "Scanning for {}", target)?;
    writeln!(out)
}

/// Print one reported port.
pub fn write_result<W: Write>(out: &mut W, result: &PortResult) -> io::Result<()> {
    writeln!(out, "{}", result)?;
    out.flush()
}

/// Print the closing line after the last port is scanned.
pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "End.")?;
    out.flush()
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}
