//! Processing constants and runtime configuration defaults

// Dimensions of the built-in zone layout
/// Number of rows in a default grid
pub const GRID_ROWS: usize = 12;
/// Number of columns in a default grid
pub const GRID_COLS: usize = 14;

/// Tile indices below this value lie on the top surface
pub const DEFAULT_SURFACE_BOUNDARY: usize = 20;

/// Joins the two source labels of a merged zone
pub const MERGE_SEPARATOR: &str = "+";

/// Separator between tokens of a grid row
pub const FIELD_DELIMITER: char = ',';

// Report column names
/// Column holding the run identifier
pub const RUN_COLUMN: &str = "Run";
/// Column holding the surface name
pub const SURFACE_COLUMN: &str = "Surface";
/// Column holding the tile index within its surface
pub const TILE_COLUMN: &str = "Tile";
/// Column holding the absolute tile index
pub const ABSOLUTE_TILE_COLUMN: &str = "Tile_38";
/// Prefix of per-zone average columns
pub const AVERAGE_PREFIX: &str = "Average_";
/// Prefix of per-zone standard deviation columns
pub const STDV_PREFIX: &str = "Stdv_";

// Output settings
/// Report file written when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "subtile_pf_output.csv";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Merge pairs applied by `--standard-merges`
pub const STANDARD_MERGES: [(&str, &str); 4] = [
    ("TopLeft", "BottomLeft"),
    ("TopRight", "BottomRight"),
    ("TopLeft", "TopRight"),
    ("BottomLeft", "BottomRight"),
];
