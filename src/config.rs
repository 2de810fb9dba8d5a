//! Configuration loading from environment variables.
//!
//! All values come from `INFERLINK_*` environment variables with sensible
//! defaults. Invalid values fall back to defaults without crashing.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `INFERLINK_LOAD_TIMEOUT_MS` | 0 | Per-attempt load timeout (0 = disabled) |
//! | `INFERLINK_LOG_LEVEL` | info | Log level filter |
//! | `INFERLINK_LOG_FORMAT` | json | Log format (`json` or `pretty`) |

use std::time::Duration;

use crate::telemetry::{LogConfig, LogFormat};

/// Coordinator tuning knobs.
#[derive(Debug, Clone, Default)]
pub struct CoordinatorConfig {
    /// Abort a load attempt after this long; `None` waits indefinitely,
    /// matching the plugin host's own timeout behavior.
    pub load_timeout: Option<Duration>,
}

impl CoordinatorConfig {
    /// Load configuration from `INFERLINK_*` environment variables.
    pub fn from_env() -> Self {
        let timeout_ms = env_u64("INFERLINK_LOAD_TIMEOUT_MS", 0);
        Self {
            load_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
        }
    }
}

/// Build a [`LogConfig`] from `INFERLINK_LOG_*` environment variables.
pub fn log_config_from_env() -> LogConfig {
    let format = match std::env::var("INFERLINK_LOG_FORMAT").as_deref() {
        Ok("pretty") => LogFormat::Pretty,
        _ => LogFormat::Json,
    };
    let level =
        std::env::var("INFERLINK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    LogConfig { format, level }
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
