//! CSV output formatting.

use crate::scanner::ScanReport;
use std::io::{self, Write};

/// Print the reported ports as CSV.
pub fn write_csv<W: Write>(out: W, report: &ScanReport) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["port", "protocol", "status", "service"])?;

    for result in &report.results {
        wtr.write_record([
            result.port.to_string().as_str(),
            "tcp",
            result.status.to_string().as_str(),
            result.service.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
