//! Logging initialisation.
//!
//! Library crates log through the `log` facade; a binary (or test) that wants
//! output calls [`init`] once. The `tracing-log` bridge forwards `log`
//! records into the installed `tracing` subscriber.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global fmt subscriber. Idempotent; respects `RUST_LOG`,
/// defaulting to `info` when unset.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
