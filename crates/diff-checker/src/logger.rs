//! Logging to stderr using env_logger
//!
//! Defaults to `warn` so regular output on stdout stays clean; set `RUST_LOG`
//! (e.g. `RUST_LOG=debug`) to see config lookup and diff timings.

use env_logger::Env;

/// Initialize stderr logging
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();
}
