use nullnet_liberror::{location, Error, ErrorHandler, Location};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A device without events for this long is marked offline.
    pub ping_timeout_sec: u64,
    pub offline_check_interval_sec: u64,
    pub session_ttl_sec: u64,
    pub bcrypt_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ping_timeout_sec: 300,
            offline_check_interval_sec: 60,
            session_ttl_sec: 24 * 60 * 60,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path).handle_err(location!())?;
        serde_json::from_str(&json).handle_err(location!())
    }

    /// Reads the configuration file, falling back to defaults when it doesn't exist.
    pub fn load(path: &str) -> Result<Self, Error> {
        if Path::new(path).exists() {
            let config = Self::from_file(path)?;
            log::info!("Loaded configuration from '{path}'");
            Ok(config)
        } else {
            log::warn!("Configuration file '{path}' not found; using defaults");
            Ok(Self::default())
        }
    }

    pub fn ping_timeout(&self) -> Duration {
        Duration::from_secs(self.ping_timeout_sec)
    }

    pub fn offline_check_interval(&self) -> Duration {
        Duration::from_secs(self.offline_check_interval_sec.max(1))
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_sec)
    }
}
