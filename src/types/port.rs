//! Port types with validation and clamping.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortRange` and `ScanMode` describe which ports a scan walks through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;

/// A validated network port number (1-65535).
///
/// Using a newtype prevents accidental misuse of raw u16 values
/// and ensures port numbers are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;
    /// Highest port of the well-known range scanned by `--fast`.
    pub const WELL_KNOWN_MAX: u16 = 1023;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Create a Port by clamping any integer into 1-65535.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u16)
    }

    /// Parse a user-supplied port argument, clamping it into range.
    ///
    /// Integers too large (or too small) for `i64` saturate before clamping,
    /// so `99999999999999999999` still means port 65535. Anything that is
    /// not an integer is rejected.
    pub fn parse_clamped(s: &str) -> Result<Self, PortError> {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(value) => Ok(Self::clamped(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(Self(Self::MAX)),
                IntErrorKind::NegOverflow => Ok(Self(Self::MIN)),
                _ => Err(PortError::InvalidFormat(s.to_string())),
            },
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PortError::OutOfRange(value))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Error type for port parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(u16),
    #[error("invalid port number '{0}': enter an integer")]
    InvalidFormat(String),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
}

/// A range of ports (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    /// Create a new port range.
    pub fn new(start: Port, end: Port) -> Result<Self, PortError> {
        if start.0 > end.0 {
            Err(PortError::InvalidRange(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Create a range containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    /// The well-known ports, 1-1023.
    pub const fn well_known() -> Self {
        Self {
            start: Port(Port::MIN),
            end: Port(Port::WELL_KNOWN_MAX),
        }
    }

    /// Every port, 1-65535.
    pub const fn full() -> Self {
        Self {
            start: Port(Port::MIN),
            end: Port(Port::MAX),
        }
    }

    pub const fn start(&self) -> Port {
        self.start
    }

    pub const fn end(&self) -> Port {
        self.end
    }

    /// Get the number of ports in this range.
    pub const fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize + 1
    }

    /// Iterate over all ports in this range, ascending.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        (self.start.0..=self.end.0).map(Port)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Which ports a scan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "port")]
pub enum ScanMode {
    /// Well-known ports, 1-1023.
    Fast,
    /// All ports, 1-65535.
    All,
    /// Exactly one port.
    Single(Port),
}

impl ScanMode {
    /// The ports this mode scans, in ascending order.
    pub const fn range(&self) -> PortRange {
        match self {
            Self::Fast => PortRange::well_known(),
            Self::All => PortRange::full(),
            Self::Single(port) => PortRange::single(*port),
        }
    }

    /// Single-port scans say so explicitly when the port is closed;
    /// range scans stay quiet about closed ports.
    pub const fn reports_closed(&self) -> bool {
        matches!(self, Self::Single(_))
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => write!(f, "fast ({})", self.range()),
            Self::All => write!(f, "all ({})", self.range()),
            Self::Single(port) => write!(f, "port {}", port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation() {
        assert!(Port::new(0).is_none());
        assert!(Port::new(1).is_some());
        assert!(Port::new(65535).is_some());
        assert_eq!(Port::try_from(0), Err(PortError::OutOfRange(0)));
    }

    #[test]
    fn test_clamping() {
        assert_eq!(Port::parse_clamped("0").unwrap().as_u16(), 1);
        assert_eq!(Port::parse_clamped("-20").unwrap().as_u16(), 1);
        assert_eq!(Port::parse_clamped("70000").unwrap().as_u16(), 65535);
        assert_eq!(Port::parse_clamped(" 22 ").unwrap().as_u16(), 22);
        assert_eq!(
            Port::parse_clamped("99999999999999999999").unwrap().as_u16(),
            65535
        );
        assert_eq!(
            Port::parse_clamped("-99999999999999999999").unwrap().as_u16(),
            1
        );
    }

    #[test]
    fn test_clamping_rejects_non_integers() {
        assert!(matches!(
            Port::parse_clamped("ssh"),
            Err(PortError::InvalidFormat(_))
        ));
        assert!(Port::parse_clamped("").is_err());
        assert!(Port::parse_clamped("22.5").is_err());
    }

    #[test]
    fn test_mode_ranges() {
        let fast = ScanMode::Fast.range();
        assert_eq!(fast.len(), 1023);
        assert_eq!(fast.start().as_u16(), 1);
        assert_eq!(fast.end().as_u16(), 1023);
        assert!(fast.iter().all(|p| p.as_u16() <= Port::WELL_KNOWN_MAX));

        assert_eq!(ScanMode::All.range().len(), 65535);

        let single = ScanMode::Single(Port::clamped(443)).range();
        assert_eq!(single.iter().collect::<Vec<_>>(), vec![Port::clamped(443)]);
    }

    #[test]
    fn test_range_is_ascending() {
        let range = PortRange::new(Port::clamped(10), Port::clamped(15)).unwrap();
        let ports: Vec<u16> = range.iter().map(Port::as_u16).collect();
        assert_eq!(ports, vec![10, 11, 12, 13, 14, 15]);
        assert!(PortRange::new(Port::clamped(15), Port::clamped(10)).is_err());
    }

    #[test]
    fn test_only_single_mode_reports_closed() {
        assert!(!ScanMode::Fast.reports_closed());
        assert!(!ScanMode::All.reports_closed());
        assert!(ScanMode::Single(Port::clamped(80)).reports_closed());
    }
}
