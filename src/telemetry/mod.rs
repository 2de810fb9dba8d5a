//! Structured logging and load metrics.

mod logging;
mod metrics;

pub use logging::{init_logging, LogConfig, LogError, LogFormat};
pub use metrics::{
    record_load_failure, record_load_started, record_load_success, record_load_superseded,
};
