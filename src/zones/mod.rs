//! Zone layout and per-zone aggregation
//!
//! This module contains the zone-related functionality:
//! - Zone labels and the cell-to-zone map
//! - Partitioning grids into zones, merging zones and computing statistics

/// Partitioning, merging and statistics over zones
pub mod aggregate;
/// Zone labels and cell-to-zone layout
pub mod map;

pub use aggregate::{Grid, MergeRule, ZoneStats, Zones};
pub use map::{Region, ZoneLabel, ZoneMap};
