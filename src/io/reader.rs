//! Text input: tile grids, zone map tables and input directory listing
//!
//! Grid files hold one grid row per line as comma-separated integers. Grids
//! are separated by one or more blank lines, and a final grid without a
//! trailing blank line is still returned.

use ndarray::Array2;
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::configuration::FIELD_DELIMITER;
use crate::io::error::{Result, SubtileError, WithContext, io_error, shape_error};
use crate::zones::aggregate::Grid;
use crate::zones::map::{ZoneLabel, ZoneMap};

/// Tokenizes grid files with a fixed row width
#[derive(Debug, Clone, Copy)]
pub struct GridFileReader {
    width: usize,
}

impl GridFileReader {
    /// Create a reader expecting `width` values per row
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Reader matching the column count of a zone map
    pub fn for_zone_map(zone_map: &ZoneMap) -> Self {
        Self::new(zone_map.dimensions().1)
    }

    /// Expected values per row
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Split source text into grids
    ///
    /// # Errors
    ///
    /// Returns a malformed row error for any line that is not exactly
    /// `width` comma-separated integers
    pub fn parse(&self, run_id: &str, text: &str) -> Result<Vec<Grid>> {
        let mut grids = Vec::new();
        let mut pending: Vec<i64> = Vec::new();
        let mut pending_rows = 0;

        for (offset, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                if pending_rows > 0 {
                    grids.push(self.flush(&mut pending, &mut pending_rows)?);
                }
                continue;
            }
            pending.extend(self.parse_row(run_id, offset + 1, line)?);
            pending_rows += 1;
        }

        if pending_rows > 0 {
            grids.push(self.flush(&mut pending, &mut pending_rows)?);
        }

        Ok(grids)
    }

    /// Read a grid file, using its file name as the run identifier
    ///
    /// # Errors
    ///
    /// Returns a file system error if the file cannot be read, or any error
    /// from [`GridFileReader::parse`]
    pub fn read_path(&self, path: &Path) -> Result<(String, Vec<Grid>)> {
        let run = run_id(path);
        let text = fs::read_to_string(path).with_path(path, "read")?;
        let grids = self.parse(&run, &text)?;
        Ok((run, grids))
    }

    fn parse_row(&self, run_id: &str, line_number: usize, line: &str) -> Result<Vec<i64>> {
        let malformed = |reason: String| SubtileError::MalformedRow {
            run: run_id.to_string(),
            line: line_number,
            reason,
        };

        let row = line
            .split(FIELD_DELIMITER)
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<i64>()
                    .map_err(|e| malformed(format!("'{token}' is not an integer: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        if row.len() != self.width {
            return Err(malformed(format!(
                "expected {} values, found {}",
                self.width,
                row.len()
            )));
        }
        Ok(row)
    }

    fn flush(&self, pending: &mut Vec<i64>, pending_rows: &mut usize) -> Result<Grid> {
        let values = std::mem::take(pending);
        let rows = std::mem::take(pending_rows);
        Array2::from_shape_vec((rows, self.width), values).map_err(|e| shape_error(&e))
    }
}

/// Run identifier of a source file: its file name
pub fn run_id(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Parse a zone map table: one row per line, comma-separated labels
///
/// Blank lines are ignored.
///
/// # Errors
///
/// Returns a shape error if the table is empty or ragged
pub fn parse_zone_map(text: &str) -> Result<ZoneMap> {
    let rows = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(FIELD_DELIMITER)
                .map(|label| ZoneLabel::new(label.trim()))
                .collect()
        })
        .collect();
    ZoneMap::from_rows(rows)
}

/// Load a zone map table from disk
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, or a shape error
/// if the table is empty or ragged
pub fn read_zone_map(path: &Path) -> Result<ZoneMap> {
    let text = fs::read_to_string(path).with_path(path, "read zone map")?;
    parse_zone_map(&text)
}

/// Input files for a target path, sorted by path
///
/// A file target is returned as is. For a directory, regular files are
/// listed; hidden files, subdirectories and `exclude` are skipped.
///
/// # Errors
///
/// Returns an error if the target does not exist or cannot be listed, or if
/// a file target is the `exclude` path itself
pub fn list_inputs(target: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    let excluded = exclude.and_then(|path| path.canonicalize().ok());
    if target.is_file() {
        if excluded.is_some() && target.canonicalize().ok() == excluded {
            return Err(io_error(&format!(
                "Output would overwrite input file '{}'",
                target.display()
            )));
        }
        return Ok(vec![target.to_path_buf()]);
    }
    if !target.is_dir() {
        return Err(io_error(&format!(
            "Target '{}' must be a file or directory",
            target.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(target).with_path(target, "list directory")? {
        let path = entry.with_path(target, "list directory")?.path();
        let hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        if hidden || !path.is_file() {
            continue;
        }
        if excluded.is_some() && path.canonicalize().ok() == excluded {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}
