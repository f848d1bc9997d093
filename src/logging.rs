//! Diagnostic logging for the CLI.
//!
//! The library only emits `tracing` events; the binary decides where they go.
//! Logs are written to stderr so stdout stays clean for `--json`.
//!
//! - no `-v`: warnings only
//! - `-v`: unknown rules and dropped effects (`debug`)
//! - `-vv`: every tokenized and applied rule (`trace`)
//!
//! `RUST_LOG` overrides the verbosity flags when set.

use std::io;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once, before any aggregation.
pub fn init_logging(verbosity: u8, with_ansi: bool) {
    let filter = build_env_filter(level_for(verbosity));
    let layer = fmt::layer().with_writer(io::stderr).with_ansi(with_ansi).with_target(false).without_time();

    // A second init (e.g. from a test harness) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("warn,ruledoc={level}")))
}
