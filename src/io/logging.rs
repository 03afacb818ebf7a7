//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Crate target that receives log output by default
const CRATE_TARGET: &str = "subtile";

/// Log level for a CLI verbosity count
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(verbosity: u8) -> String {
    format!("{CRATE_TARGET}={}", level_for(verbosity))
}

/// Initialize tracing on stderr based on CLI verbosity level
///
/// `RUST_LOG` overrides the verbosity flag if set. Calling this more than
/// once keeps the first subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
