//! Per-zone statistics for tiled numeric grid run outputs
//!
//! Each input file holds one or more fixed-size integer grids. Every grid is
//! partitioned into named zones by a zone map, optional merge rules add
//! combined zones, and each zone is reduced to its mean and population
//! standard deviation. All tiles of all files end up in one flat CSV report.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Mean and standard deviation helpers
pub mod math;
/// Tile records and CSV report output
pub mod report;
/// Zone maps and per-zone aggregation
pub mod zones;

pub use io::error::{Result, SubtileError};
