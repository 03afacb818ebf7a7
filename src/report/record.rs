//! Flat per-tile records combining tile metadata with zone statistics

use std::fmt;

use crate::io::configuration::{
    ABSOLUTE_TILE_COLUMN, AVERAGE_PREFIX, DEFAULT_SURFACE_BOUNDARY, RUN_COLUMN, STDV_PREFIX,
    SURFACE_COLUMN, TILE_COLUMN,
};
use crate::io::error::{Result, SubtileError, invalid_parameter};
use crate::zones::aggregate::{Grid, MergeRule, aggregate};
use crate::zones::map::ZoneMap;

/// Zone layout and derivation settings shared by every tile of a batch
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    /// Cell-to-zone layout applied to each grid
    pub zone_map: ZoneMap,
    /// Derived zones appended after partitioning
    pub merge_rules: Vec<MergeRule>,
    /// First tile index on the bottom surface
    pub surface_boundary: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            zone_map: ZoneMap::default(),
            merge_rules: Vec::new(),
            surface_boundary: DEFAULT_SURFACE_BOUNDARY,
        }
    }
}

impl ProcessingConfig {
    /// Check settings that cannot be expressed in the types
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the surface boundary is zero
    pub fn validate(&self) -> Result<()> {
        if self.surface_boundary == 0 {
            return Err(invalid_parameter(
                "surface_boundary",
                &self.surface_boundary,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Side of the part a tile was measured on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Tiles before the surface boundary
    Top,
    /// Tiles at or after the surface boundary
    Bottom,
}

impl Surface {
    /// Classify a tile index and compute its position within the surface
    ///
    /// Bottom tiles are renumbered so the boundary tile becomes tile 1.
    pub const fn classify(tile_index: usize, boundary: usize) -> (Self, usize) {
        if tile_index < boundary {
            (Self::Top, tile_index)
        } else {
            (Self::Bottom, tile_index + 1 - boundary)
        }
    }

    /// Name written to reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single cell of a record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// Free text such as the run identifier or surface
    Text(String),
    /// Tile index
    Index(usize),
    /// Zone statistic
    Number(f64),
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Index(index) => write!(f, "{index}"),
            // Integral numbers keep a fractional digit so they read as floats
            Self::Number(number) if number.is_finite() && number.fract() == 0.0 => {
                write!(f, "{number:.1}")
            }
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Ordered column/value pairs describing one tile
///
/// Columns always start with run, surface, tile within surface and
/// absolute tile index, followed by an average/stdv pair per zone.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRecord {
    fields: Vec<(String, RecordValue)>,
}

impl TileRecord {
    /// Aggregate a grid and lay out its record
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or aggregation fails;
    /// a grid of the wrong size is reported with its run and tile index
    pub fn build(
        tile_index: usize,
        grid: &Grid,
        config: &ProcessingConfig,
        run_id: &str,
    ) -> Result<Self> {
        config.validate()?;
        let stats =
            aggregate(grid, &config.zone_map, &config.merge_rules).map_err(|error| match error {
                SubtileError::Shape { reason } => SubtileError::GridShape {
                    run: run_id.to_string(),
                    tile: tile_index,
                    reason,
                },
                other => other,
            })?;
        let (surface, tile_within_surface) =
            Surface::classify(tile_index, config.surface_boundary);

        let mut fields = Vec::with_capacity(4 + stats.len() * 2);
        fields.push((RUN_COLUMN.to_string(), RecordValue::Text(run_id.to_string())));
        fields.push((
            SURFACE_COLUMN.to_string(),
            RecordValue::Text(surface.name().to_string()),
        ));
        fields.push((TILE_COLUMN.to_string(), RecordValue::Index(tile_within_surface)));
        fields.push((ABSOLUTE_TILE_COLUMN.to_string(), RecordValue::Index(tile_index)));

        for (label, zone) in &stats {
            fields.push((
                format!("{AVERAGE_PREFIX}{label}"),
                RecordValue::Number(zone.average),
            ));
            fields.push((format!("{STDV_PREFIX}{label}"), RecordValue::Number(zone.stdv)));
        }

        Ok(Self { fields })
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(column, _)| column.as_str())
    }

    /// Values in column order
    pub fn values(&self) -> impl Iterator<Item = &RecordValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    /// Value stored under `column`
    pub fn get(&self, column: &str) -> Option<&RecordValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Run identifier
    pub fn run(&self) -> &str {
        match self.get(RUN_COLUMN) {
            Some(RecordValue::Text(run)) => run,
            _ => "",
        }
    }

    /// Absolute tile index
    pub fn absolute_tile_index(&self) -> usize {
        match self.get(ABSOLUTE_TILE_COLUMN) {
            Some(RecordValue::Index(index)) => *index,
            _ => 0,
        }
    }
}
