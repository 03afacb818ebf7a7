//! Error types and context management for zone aggregation and report generation

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all zone aggregation operations
#[derive(Debug)]
pub enum SubtileError {
    /// Grid and zone map dimensions disagree, or a label table is not rectangular
    Shape {
        /// Description of which dimensions disagree
        reason: String,
    },

    /// Grid of one tile does not match the zone map dimensions
    GridShape {
        /// Run identifier of the source the grid came from
        run: String,
        /// Absolute tile index of the grid
        tile: usize,
        /// Description of which dimensions disagree
        reason: String,
    },

    /// Input line could not be tokenized into a grid row
    MalformedRow {
        /// Run identifier of the source being read
        run: String,
        /// 1-based line number within the source
        line: usize,
        /// Explanation of what is wrong with the line
        reason: String,
    },

    /// Merge rule references a zone that is not defined
    UnknownZone {
        /// Label that could not be found
        label: String,
    },

    /// Merge rule derives a label that already names a different zone
    DuplicateZone {
        /// Label produced by the rule
        label: String,
    },

    /// Zone has no values at statistics time
    EmptyZone {
        /// Label of the empty zone
        label: String,
    },

    /// Record columns differ from the report schema fixed by the first record
    SchemaMismatch {
        /// Run identifier of the offending record
        run: String,
        /// Absolute tile index of the offending record
        tile: usize,
        /// Description of the difference
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SubtileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { reason } => write!(f, "Shape error: {reason}"),
            Self::GridShape { run, tile, reason } => {
                write!(f, "Shape error at '{run}' tile {tile}: {reason}")
            }
            Self::MalformedRow { run, line, reason } => {
                write!(f, "Malformed row at '{run}' line {line}: {reason}")
            }
            Self::UnknownZone { label } => {
                write!(f, "Merge rule references unknown zone '{label}'")
            }
            Self::DuplicateZone { label } => {
                write!(f, "Merge rule would replace existing zone '{label}'")
            }
            Self::EmptyZone { label } => {
                write!(f, "Zone '{label}' has no values")
            }
            Self::SchemaMismatch { run, tile, reason } => {
                write!(
                    f,
                    "Record for '{run}' tile {tile} does not match report columns: {reason}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SubtileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for zone aggregation results
pub type Result<T> = std::result::Result<T, SubtileError>;

/// Attaches file system context to I/O failures
pub trait WithContext<T> {
    /// Record the path and operation on a failed file system call
    ///
    /// # Errors
    ///
    /// Propagates the original error, with path and operation filled in
    /// when it is a file system error
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<SubtileError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only I/O failures carry a location worth reporting
            if let SubtileError::FileSystem {
                path: error_path,
                operation: error_operation,
                ..
            } = &mut error
            {
                *error_path = path.to_path_buf();
                *error_operation = operation;
            }
            error
        })
    }
}

impl From<std::io::Error> for SubtileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SubtileError {
    SubtileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable input or output path
pub fn io_error(msg: &str) -> SubtileError {
    SubtileError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

/// Create a shape error
pub fn shape_error(reason: &impl ToString) -> SubtileError {
    SubtileError::Shape {
        reason: reason.to_string(),
    }
}
