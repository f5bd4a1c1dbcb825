//! Command-line interface definitions for portscout.
//!
//! Uses `clap` derive macros for declarative argument parsing.

use crate::types::{Port, ScanMode};
use clap::{ArgGroup, Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// A sequential TCP connect port scanner.
#[derive(Parser, Debug)]
#[command(name = "portscout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a host's TCP ports one at a time", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["fast", "all", "port"])))]
pub struct Cli {
    /// Target IPv4 address or hostname
    #[arg(value_name = "ADDRESS")]
    pub target: String,

    /// Scan the well-known ports (1-1023)
    #[arg(long)]
    pub fast: bool,

    /// Scan every port (1-65535)
    #[arg(long)]
    pub all: bool,

    /// Scan a single port; values outside 1-65535 are clamped into range
    #[arg(long, value_name = "N", value_parser = Port::parse_clamped, allow_negative_numbers = true)]
    pub port: Option<Port>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Show a progress bar on stderr while scanning
    #[arg(long)]
    pub progress: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON settings file (timeouts, services database path)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The scan mode selected on the command line.
    pub fn mode(&self) -> ScanMode {
        match (self.port, self.all) {
            (Some(port), _) => ScanMode::Single(port),
            (None, true) => ScanMode::All,
            (None, false) => ScanMode::Fast,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Line per reported port, as the scan runs
    #[default]
    Plain,
    /// JSON report after the scan completes
    Json,
    /// CSV rows after the scan completes
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("portscout").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_modes() {
        assert_eq!(parse(&["10.0.0.1", "--fast"]).unwrap().mode(), ScanMode::Fast);
        assert_eq!(parse(&["10.0.0.1", "--all"]).unwrap().mode(), ScanMode::All);
        assert_eq!(
            parse(&["10.0.0.1", "--port", "22"]).unwrap().mode(),
            ScanMode::Single(Port::clamped(22))
        );
    }

    #[test]
    fn test_port_is_clamped() {
        let low = parse(&["10.0.0.1", "--port", "0"]).unwrap();
        assert_eq!(low.mode(), ScanMode::Single(Port::clamped(1)));

        let high = parse(&["10.0.0.1", "--port", "70000"]).unwrap();
        assert_eq!(high.mode(), ScanMode::Single(Port::clamped(65535)));

        let negative = parse(&["10.0.0.1", "--port", "-5"]).unwrap();
        assert_eq!(negative.mode(), ScanMode::Single(Port::clamped(1)));
    }

    #[test]
    fn test_non_numeric_port_rejected() {
        let err = parse(&["10.0.0.1", "--port", "ssh"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_arguments() {
        assert!(parse(&[]).is_err());
        let err = parse(&["10.0.0.1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_modes_are_exclusive() {
        let err = parse(&["10.0.0.1", "--fast", "--all"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(parse(&["10.0.0.1", "--slow"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["localhost", "--fast"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Plain);
        assert!(!cli.progress);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_format_option() {
        let cli = parse(&["localhost", "--all", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
