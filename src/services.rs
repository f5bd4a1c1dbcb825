//! Service name lookup for open ports.
//!
//! Reads the platform's services database (`/etc/services`) and keeps the
//! TCP entries. When that file is unavailable, a built-in table of IANA
//! well-known TCP names stands in for it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Default location of the services database.
pub const SYSTEM_SERVICES_FILE: &str = "/etc/services";

/// Label used when a port has no registered name.
pub const UNKNOWN_SERVICE: &str = "unknown";

/// Well-known TCP names, used when no services file can be read.
const BUILTIN_SERVICES: &[(u16, &str)] = &[
    (7, "echo"),
    (9, "discard"),
    (13, "daytime"),
    (20, "ftp-data"),
    (21, "ftp"),
    (22, "ssh"),
    (23, "telnet"),
    (25, "smtp"),
    (37, "time"),
    (43, "whois"),
    (53, "domain"),
    (70, "gopher"),
    (79, "finger"),
    (80, "http"),
    (88, "kerberos"),
    (110, "pop3"),
    (111, "sunrpc"),
    (113, "auth"),
    (119, "nntp"),
    (123, "ntp"),
    (135, "epmap"),
    (139, "netbios-ssn"),
    (143, "imap2"),
    (161, "snmp"),
    (179, "bgp"),
    (194, "irc"),
    (389, "ldap"),
    (443, "https"),
    (445, "microsoft-ds"),
    (465, "submissions"),
    (513, "login"),
    (514, "shell"),
    (515, "printer"),
    (543, "klogin"),
    (544, "kshell"),
    (554, "rtsp"),
    (587, "submission"),
    (631, "ipp"),
    (636, "ldaps"),
    (873, "rsync"),
    (993, "imaps"),
    (995, "pop3s"),
];

/// TCP port to service name mapping.
#[derive(Debug, Clone, Default)]
pub struct ServiceDb {
    names: HashMap<u16, String>,
}

impl ServiceDb {
    /// Load `path`, falling back to the built-in table if it can't be read.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(db) => {
                debug!(path = %path.display(), entries = db.len(), "loaded services database");
                db
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "services database unavailable, using built-in names"
                );
                Self::builtin()
            }
        }
    }

    /// Load a services file in `/etc/services` format.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse `/etc/services` content, keeping TCP entries only.
    ///
    /// Lines look like `ssh  22/tcp  # comment`; aliases after the port are
    /// ignored and the first name listed for a port wins.
    pub fn parse(content: &str) -> Self {
        let mut names = HashMap::new();

        for line in content.lines() {
            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();
            let (Some(name), Some(port_proto)) = (fields.next(), fields.next()) else {
                continue;
            };
            let Some((port, proto)) = port_proto.split_once('/') else {
                continue;
            };
            if !proto.eq_ignore_ascii_case("tcp") {
                continue;
            }
            if let Ok(port) = port.parse::<u16>() {
                names.entry(port).or_insert_with(|| name.to_string());
            }
        }

        Self { names }
    }

    /// The built-in well-known table.
    pub fn builtin() -> Self {
        let names = BUILTIN_SERVICES
            .iter()
            .map(|&(port, name)| (port, name.to_string()))
            .collect();
        Self { names }
    }

    /// Look up the registered service name for a TCP port.
    pub fn lookup(&self, port: u16) -> Option<&str> {
        self.names.get(&port).map(String::as_str)
    }

    /// Service name, or "unknown" if the port isn't registered.
    pub fn describe(&self, port: u16) -> &str {
        self.lookup(port).unwrap_or(UNKNOWN_SERVICE)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
# Network services, Internet style
tcpmux		1/tcp				# TCP port service multiplexer
ssh		22/tcp				# SSH Remote Login Protocol
domain		53/tcp
domain		53/udp
http		80/tcp		www		# WorldWideWeb HTTP
www-alt		80/tcp
syslog		514/udp
  # indented comment
malformed
bogus		70000/tcp
";

    #[test]
    fn test_parse_tcp_entries() {
        let db = ServiceDb::parse(SAMPLE);
        assert_eq!(db.lookup(1), Some("tcpmux"));
        assert_eq!(db.lookup(22), Some("ssh"));
        assert_eq!(db.lookup(53), Some("domain"));
        assert_eq!(db.len(), 4);
    }

    #[test]
    fn test_first_entry_wins() {
        let db = ServiceDb::parse(SAMPLE);
        assert_eq!(db.lookup(80), Some("http"));
    }

    #[test]
    fn test_udp_only_entries_are_unknown() {
        let db = ServiceDb::parse(SAMPLE);
        assert_eq!(db.lookup(514), None);
        assert_eq!(db.describe(514), "unknown");
    }

    #[test]
    fn test_builtin_names() {
        let db = ServiceDb::builtin();
        assert_eq!(db.lookup(22), Some("ssh"));
        assert_eq!(db.lookup(80), Some("http"));
        assert_eq!(db.lookup(443), Some("https"));
        assert_eq!(db.describe(12345), "unknown");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let db = ServiceDb::load(file.path()).unwrap();
        assert_eq!(db.lookup(22), Some("ssh"));
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let db = ServiceDb::load_or_builtin(&dir.path().join("services"));
        assert_eq!(db.lookup(22), Some("ssh"));
        assert_eq!(db.len(), BUILTIN_SERVICES.len());
    }
}
