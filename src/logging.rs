//! Logging initialization utilities.

use env_logger::Env;

fn builder() -> env_logger::Builder {
    let env = Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env)
}

/// Initialize logging with a default filter level.
///
/// Panics if a global logger is already installed.
pub fn init() {
    builder().init();
}

/// Initialize logging unless a logger is already installed.
///
/// Returns `true` when this call installed the logger.
pub fn try_init() -> bool {
    builder().try_init().is_ok()
}
