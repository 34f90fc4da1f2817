//! Logging through `tracing` and `tracing-subscriber`.
//!
//! Diagnostics go to stderr so they never mix with command output. The level
//! comes from the `-v` count unless `RUST_LOG` is set, which always wins.
//!
//! - 0 (no `-v`): warn
//! - 1 (`-v`): info, e.g. books added and deleted
//! - 2 (`-vv`): debug, e.g. refused inserts and config loading
//! - 3+ (`-vvv`): trace

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = build_env_filter(level_for_verbosity(verbosity));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

/// Other crates stay at warn whatever the verbosity.
fn default_directive(level: Level) -> String {
    format!("warn,bookshelf={}", level.as_str().to_lowercase())
}
