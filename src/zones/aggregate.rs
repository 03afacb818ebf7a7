//! Zone partitioning, merging and per-zone statistics
//!
//! Aggregation runs in three passes. `partition` collects each grid cell into
//! the value list of its zone, `apply_merges` appends derived zones built by
//! concatenating two existing value lists, and `statistics` reduces every
//! list to its mean and population standard deviation. Merged zones share
//! the value-list representation of primary zones, so every later stage
//! treats them alike.

use indexmap::IndexMap;
use ndarray::Array2;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::io::error::{Result, SubtileError, invalid_parameter, shape_error};
use crate::math::moments::{mean, population_std_dev};
use crate::zones::map::{ZoneLabel, ZoneMap};

/// Numeric grid read from one tile of an input file
pub type Grid = Array2<i64>;

/// Zone value lists keyed by label, in deterministic insertion order
pub type Zones = IndexMap<ZoneLabel, Vec<i64>>;

/// Request for an additional zone holding the values of two existing zones
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeRule {
    /// Zone whose values come first
    pub first: ZoneLabel,
    /// Zone whose values are appended
    pub second: ZoneLabel,
}

impl MergeRule {
    /// Create a rule merging `first` and `second`
    pub fn new(first: impl Into<ZoneLabel>, second: impl Into<ZoneLabel>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Label of the derived zone
    pub fn label(&self) -> ZoneLabel {
        ZoneLabel::merged(&self.first, &self.second)
    }
}

impl fmt::Display for MergeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first, self.second)
    }
}

impl FromStr for MergeRule {
    type Err = SubtileError;

    /// Parse `first,second`
    fn from_str(s: &str) -> Result<Self> {
        let (first, second) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("merge", &s, &"expected two labels as A,B"))?;
        let (first, second) = (first.trim(), second.trim());
        if first.is_empty() || second.is_empty() {
            return Err(invalid_parameter("merge", &s, &"labels must not be empty"));
        }
        Ok(Self::new(first, second))
    }
}

/// Summary statistics of one zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneStats {
    /// Arithmetic mean
    pub average: f64,
    /// Population standard deviation
    pub stdv: f64,
}

/// Collect grid values into their zones
///
/// Cells are visited in row-major order, so both the label order and the
/// value order within each zone are reproducible.
///
/// # Errors
///
/// Returns a shape error if the grid and zone map dimensions differ
pub fn partition(grid: &Grid, zone_map: &ZoneMap) -> Result<Zones> {
    let expected = zone_map.dimensions();
    let found = grid.dim();
    if expected != found {
        return Err(shape_error(&format!(
            "grid is {}x{}, zone map is {}x{}",
            found.0, found.1, expected.0, expected.1
        )));
    }

    let mut zones: Zones = zone_map
        .labels()
        .map(|label| (label.clone(), Vec::new()))
        .collect();

    for ((row, col), label) in zone_map.cells() {
        if let (Some(values), Some(&value)) = (zones.get_mut(label), grid.get([row, col])) {
            values.push(value);
        }
    }

    Ok(zones)
}

/// Append one derived zone per merge rule
///
/// Rules are applied in order against the growing zone set, so a rule may
/// reference the label produced by an earlier one. Source zones are kept,
/// and repeating an identical rule leaves the zone set unchanged.
///
/// # Errors
///
/// Returns an unknown zone error if a rule names a label that is not present,
/// or a duplicate zone error if its derived label already names another zone
pub fn apply_merges(mut zones: Zones, merge_rules: &[MergeRule]) -> Result<Zones> {
    let mut derived: HashMap<ZoneLabel, &MergeRule> = HashMap::new();
    for rule in merge_rules {
        let label = rule.label();
        if derived.get(&label).is_some_and(|&earlier| earlier == rule) {
            continue;
        }
        if zones.contains_key(&label) {
            return Err(SubtileError::DuplicateZone {
                label: label.to_string(),
            });
        }

        let first = lookup(&zones, &rule.first)?;
        let second = lookup(&zones, &rule.second)?;
        let combined: Vec<i64> = first.iter().chain(second).copied().collect();
        zones.insert(label.clone(), combined);
        derived.insert(label, rule);
    }
    Ok(zones)
}

fn lookup<'a>(zones: &'a Zones, label: &ZoneLabel) -> Result<&'a Vec<i64>> {
    zones.get(label).ok_or_else(|| SubtileError::UnknownZone {
        label: label.to_string(),
    })
}

/// Mean and population standard deviation of every zone, in zone order
///
/// # Errors
///
/// Returns an empty zone error if any zone has no values
pub fn statistics(zones: &Zones) -> Result<IndexMap<ZoneLabel, ZoneStats>> {
    zones
        .iter()
        .map(|(label, values)| -> Result<(ZoneLabel, ZoneStats)> {
            let samples: Vec<f64> = values.iter().map(|&value| value as f64).collect();
            let empty = || SubtileError::EmptyZone {
                label: label.to_string(),
            };
            let average = mean(&samples).ok_or_else(empty)?;
            let stdv = population_std_dev(&samples).ok_or_else(empty)?;
            Ok((label.clone(), ZoneStats { average, stdv }))
        })
        .collect()
}

/// Run partition, merge and statistics passes for one grid
///
/// # Errors
///
/// Propagates shape, unknown zone and empty zone errors from the passes
pub fn aggregate(
    grid: &Grid,
    zone_map: &ZoneMap,
    merge_rules: &[MergeRule],
) -> Result<IndexMap<ZoneLabel, ZoneStats>> {
    let zones = partition(grid, zone_map)?;
    let zones = apply_merges(zones, merge_rules)?;
    statistics(&zones)
}
