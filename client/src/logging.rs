//! Log subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `filter` (e.g. `"info"` or
/// `"spl_token_demo=debug"`). Falls back to `info` if the directive is invalid.
/// Calling it twice is harmless: the second install is ignored.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
