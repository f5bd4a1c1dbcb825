//! Target resolution.
//!
//! Turns a user-supplied hostname or dotted-decimal literal into the single
//! IPv4 address every connect attempt of a scan targets:
//! - IPv4 literals are used as-is, without touching the network
//! - Hostnames go through the system resolver configuration (including
//!   `/etc/hosts`), IPv4 answers only

use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::{debug, warn};
use trust_dns_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use trust_dns_resolver::{system_conf, Resolver};

/// A scan target that has been resolved to an IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScanTarget {
    /// The original input (hostname or IP string).
    pub original: String,
    /// The resolved address.
    pub ip: Ipv4Addr,
}

impl ScanTarget {
    /// Create a new scan target.
    pub fn new(original: impl Into<String>, ip: Ipv4Addr) -> Self {
        Self {
            original: original.into(),
            ip,
        }
    }

    /// Resolve a hostname or IPv4 literal.
    pub fn resolve(input: &str) -> Result<Self, TargetError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TargetError::Empty);
        }

        if let Some(ip) = parse_literal(input)? {
            return Ok(Self::new(input, ip));
        }

        let ip = lookup_ipv4(input)?;
        debug!(host = input, %ip, "resolved target");
        Ok(Self::new(input, ip))
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ip)
    }
}

/// Error type for target resolution. Always fatal to the invocation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TargetError {
    #[error("no target address given")]
    Empty,
    #[error("IPv6 targets are not supported: {0}")]
    Ipv6Unsupported(Ipv6Addr),
    #[error("failed to resolve '{0}': {1}")]
    DnsResolutionFailed(String, String),
    #[error("no IPv4 address found for '{0}'")]
    NoAddressesFound(String),
}

/// Try the input as an address literal. `Ok(None)` means "looks like a name".
fn parse_literal(input: &str) -> Result<Option<Ipv4Addr>, TargetError> {
    match input.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => Ok(Some(ip)),
        Ok(IpAddr::V6(ip)) => Err(TargetError::Ipv6Unsupported(ip)),
        Err(_) => Ok(None),
    }
}

/// Forward-resolve a hostname and keep the first IPv4 answer.
fn lookup_ipv4(host: &str) -> Result<Ipv4Addr, TargetError> {
    let (config, mut opts) = system_conf::read_system_conf().unwrap_or_else(|e| {
        warn!(error = %e, "could not read system resolver config, using defaults");
        (ResolverConfig::default(), ResolverOpts::default())
    });
    opts.ip_strategy = LookupIpStrategy::Ipv4Only;

    let resolver = Resolver::new(config, opts)
        .map_err(|e| TargetError::DnsResolutionFailed(host.to_string(), e.to_string()))?;

    let response = resolver
        .lookup_ip(host)
        .map_err(|e| TargetError::DnsResolutionFailed(host.to_string(), e.to_string()))?;

    response
        .iter()
        .find_map(|ip| match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| TargetError::NoAddressesFound(host.to_string()))
}
