//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use subtile::SubtileError;
    use subtile::io::error::{WithContext, invalid_parameter, io_error, shape_error};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SubtileError::FileSystem {
            path: "/tmp/run.txt".into(),
            operation: "read",
            source: io_err,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/run.txt"));
    }

    // Tests MalformedRow error formatting
    // Verified by omitting line number from message
    #[test]
    fn test_malformed_row_error() {
        let error = SubtileError::MalformedRow {
            run: "run_01.txt".to_string(),
            line: 42,
            reason: "expected 14 values, found 13".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("run_01.txt"));
        assert!(message.contains("line 42"));
        assert!(message.contains("found 13"));
        assert!(error.source().is_none());
    }

    // Tests zone errors name the zone
    // Verified by omitting label from message
    #[test]
    fn test_zone_errors() {
        let unknown = SubtileError::UnknownZone {
            label: "Middle".to_string(),
        };
        let empty = SubtileError::EmptyZone {
            label: "Corner".to_string(),
        };

        assert!(unknown.to_string().contains("'Middle'"));
        assert!(empty.to_string().contains("'Corner'"));

        let duplicate = SubtileError::DuplicateZone {
            label: "a+b".to_string(),
        };
        assert!(duplicate.to_string().contains("'a+b'"));
    }

    // Tests SchemaMismatch error contains all fields
    // Verified by omitting tile from message
    #[test]
    fn test_schema_mismatch_error() {
        let error = SubtileError::SchemaMismatch {
            run: "run_02.txt".to_string(),
            tile: 7,
            reason: "missing [Average_b]".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("run_02.txt"));
        assert!(message.contains("tile 7"));
        assert!(message.contains("Average_b"));
    }

    // Tests helper constructors
    // Verified by swapping helper variants
    #[test]
    fn test_helpers() {
        let error = invalid_parameter("surface_boundary", &0, &"must be at least 1");
        let message = error.to_string();
        assert!(message.contains("surface_boundary"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least 1"));

        assert!(matches!(
            shape_error(&"grid is 1x1"),
            SubtileError::Shape { ref reason } if reason == "grid is 1x1"
        ));
        assert!(matches!(
            io_error("bad target"),
            SubtileError::InvalidParameter {
                parameter: "path",
                ..
            }
        ));
    }

    // Tests path context is only applied to file system errors
    // Verified by overwriting non file system errors
    #[test]
    fn test_with_path() {
        let failed: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        match failed.with_path(Path::new("out.csv"), "create report") {
            Err(SubtileError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, PathBuf::from("out.csv"));
                assert_eq!(operation, "create report");
            }
            _ => unreachable!("Expected FileSystem error"),
        }

        let other: Result<(), SubtileError> = Err(shape_error(&"bad"));
        assert!(matches!(
            other.with_path(Path::new("out.csv"), "read"),
            Err(SubtileError::Shape { .. })
        ));
    }
}
