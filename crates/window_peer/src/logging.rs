//! Logging utilities
//!
//! The peer logs through the `log` facade; binaries that embed it can wire
//! up `env_logger` with [`init`]. The only log line the peer itself emits on
//! a healthy window is the unsupported-reparent diagnostic.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the environment (`RUST_LOG`)
pub fn init() {
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}
