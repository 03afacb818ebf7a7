//! Tile records and the tabular report built from them

/// Sequential numbering of the grids read from one source
pub mod assembler;
/// Per-tile record layout and derivation
pub mod record;
/// CSV report output
pub mod writer;

pub use record::{ProcessingConfig, TileRecord};
pub use writer::ReportWriter;
