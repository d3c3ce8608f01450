//! Logging setup
//!
//! Logs go to stderr so they never interleave with the rendered lists on
//! stdout. `RUST_LOG` controls the level; only warnings show by default.

use env_logger::{Builder, Env};

/// Initialize the global logger
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let env = Env::default().default_filter_or("warn");
    if Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialized");
    }
}
