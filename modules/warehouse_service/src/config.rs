//! Configuration for warehouse service module

use serde::Deserialize;
use std::time::Duration;

/// Warehouse service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Deadline for a single REST call; the store call is abandoned past it
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Run schema migrations on startup
    #[serde(default = "default_true")]
    pub auto_migrate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            auto_migrate: true,
        }
    }
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_true() -> bool {
    true
}
