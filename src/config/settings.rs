//! Application settings.

use crate::error::{ConfigError, ConfigResult};
use crate::services::SYSTEM_SERVICES_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Timeout and lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Socket send timeout in milliseconds.
    pub send_timeout_ms: u64,
    /// Socket receive timeout in milliseconds.
    pub recv_timeout_ms: u64,
    /// Upper bound on a single connect attempt in milliseconds.
    pub connect_timeout_ms: u64,
    /// Services database consulted for open ports.
    pub services_file: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            send_timeout_ms: 1000,
            recv_timeout_ms: 5000,
            connect_timeout_ms: 5000,
            services_file: PathBuf::from(SYSTEM_SERVICES_FILE),
        }
    }
}

impl AppSettings {
    /// Load settings from a specific file. Missing keys keep their defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject timeouts a socket would read as "wait forever".
    pub fn validate(&self) -> ConfigResult<()> {
        let timeouts = [
            ("send_timeout_ms", self.send_timeout_ms),
            ("recv_timeout_ms", self.recv_timeout_ms),
            ("connect_timeout_ms", self.connect_timeout_ms),
        ];
        for (field, value) in timeouts {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}
