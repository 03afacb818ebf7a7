//! Zone labels and the static cell-to-zone layout
//!
//! A zone map assigns every cell of a fixed-size grid to a named zone. The
//! built-in layout splits a 12x14 tile into four quadrant bands around a
//! central block, with the clipped corners set aside as `NotValid`.

use indexmap::IndexSet;
use ndarray::Array2;
use std::fmt;

use crate::io::configuration::{GRID_COLS, GRID_ROWS, MERGE_SEPARATOR};
use crate::io::error::{Result, shape_error};

/// Name of a zone
///
/// Labels are open strings so custom maps can use any naming scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneLabel(String);

impl ZoneLabel {
    /// Create a label from any string-like value
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Label of the zone derived by merging `first` and `second`
    pub fn merged(first: &Self, second: &Self) -> Self {
        Self(format!("{}{MERGE_SEPARATOR}{}", first.0, second.0))
    }

    /// Label text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneLabel {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ZoneLabel {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Zones of the built-in layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Clipped corner cells
    NotValid,
    /// Upper-left band
    TopLeft,
    /// Upper-right band
    TopRight,
    /// Lower-left band
    BottomLeft,
    /// Lower-right band
    BottomRight,
    /// Central block
    Center,
}

impl Region {
    /// Label text used in reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotValid => "NotValid",
            Self::TopLeft => "TopLeft",
            Self::TopRight => "TopRight",
            Self::BottomLeft => "BottomLeft",
            Self::BottomRight => "BottomRight",
            Self::Center => "Center",
        }
    }

    const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::TopLeft,
            2 => Self::TopRight,
            3 => Self::BottomLeft,
            4 => Self::BottomRight,
            5 => Self::Center,
            _ => Self::NotValid,
        }
    }
}

impl From<Region> for ZoneLabel {
    fn from(region: Region) -> Self {
        Self::new(region.name())
    }
}

// 0 NotValid, 1 TopLeft, 2 TopRight, 3 BottomLeft, 4 BottomRight, 5 Center
const DEFAULT_LAYOUT: [[u8; GRID_COLS]; GRID_ROWS] = [
    [0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 0],
    [1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2],
    [1, 1, 1, 5, 5, 5, 5, 5, 5, 5, 5, 2, 2, 2],
    [1, 1, 1, 5, 5, 5, 5, 5, 5, 5, 5, 2, 2, 2],
    [1, 1, 1, 5, 5, 5, 5, 5, 5, 5, 5, 2, 2, 2],
    [3, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4],
    [3, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4],
    [3, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4],
    [3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4],
    [0, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 0],
    [0, 0, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 0, 0],
];

/// Immutable mapping from grid cell coordinates to zone labels
///
/// Distinct labels are recorded in row-major first-encounter order when the
/// map is built, which fixes the zone order of every report derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneMap {
    cells: Array2<ZoneLabel>,
    labels: IndexSet<ZoneLabel>,
}

impl Default for ZoneMap {
    fn default() -> Self {
        let cells = Array2::from_shape_fn((GRID_ROWS, GRID_COLS), |(row, col)| {
            let code = DEFAULT_LAYOUT
                .get(row)
                .and_then(|codes| codes.get(col))
                .copied()
                .unwrap_or(0);
            ZoneLabel::from(Region::from_code(code))
        });
        Self::from_cells(cells)
    }
}

impl ZoneMap {
    /// Build a map from caller-supplied label rows
    ///
    /// # Errors
    ///
    /// Returns a shape error if the table is empty or its rows differ in length
    pub fn from_rows(rows: Vec<Vec<ZoneLabel>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(shape_error(&"zone map table is empty"));
        }

        let mut flat = Vec::with_capacity(row_count * col_count);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != col_count {
                return Err(shape_error(&format!(
                    "zone map row {} has {} labels, expected {col_count}",
                    index + 1,
                    row.len()
                )));
            }
            flat.extend(row);
        }

        let cells = Array2::from_shape_vec((row_count, col_count), flat)
            .map_err(|e| shape_error(&e))?;
        Ok(Self::from_cells(cells))
    }

    fn from_cells(cells: Array2<ZoneLabel>) -> Self {
        let labels = cells.iter().cloned().collect();
        Self { cells, labels }
    }

    /// Label of the zone containing cell (`row`, `col`)
    pub fn label_at(&self, row: usize, col: usize) -> Option<&ZoneLabel> {
        self.cells.get([row, col])
    }

    /// Map dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Distinct labels in first-encounter order
    pub fn labels(&self) -> impl Iterator<Item = &ZoneLabel> {
        self.labels.iter()
    }

    /// Cells in row-major order paired with their labels
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &ZoneLabel)> {
        self.cells.indexed_iter()
    }
}
