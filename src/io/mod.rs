//! Input/output operations, configuration and error handling

/// Command-line interface and batch driver
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
/// Grid file, zone map and directory reading
pub mod reader;
