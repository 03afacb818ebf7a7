//! Tests for CSV report output under the first record's schema

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use subtile::SubtileError;
    use subtile::report::record::{ProcessingConfig, TileRecord};
    use subtile::report::writer::{ReportWriter, write_report_file};
    use subtile::zones::map::{ZoneLabel, ZoneMap};

    fn default_record(run: &str, tile_index: usize) -> TileRecord {
        let grid = Array2::from_elem((12, 14), 5);
        let Ok(record) = TileRecord::build(tile_index, &grid, &ProcessingConfig::default(), run)
        else {
            unreachable!("Expected record to build");
        };
        record
    }

    fn pair_record(second_label: &str) -> TileRecord {
        let rows = vec![vec![ZoneLabel::from("a"), ZoneLabel::from(second_label)]];
        let config = ProcessingConfig {
            zone_map: ZoneMap::from_rows(rows).unwrap_or_default(),
            ..ProcessingConfig::default()
        };
        let Ok(record) = TileRecord::build(1, &array![[1, 3]], &config, "pair") else {
            unreachable!("Expected record to build");
        };
        record
    }

    fn render(records: &[TileRecord]) -> String {
        let mut writer = ReportWriter::new(Vec::new());
        assert!(writer.write_all(records).is_ok());
        let bytes = writer.finish().unwrap_or_default();
        String::from_utf8(bytes).unwrap_or_default()
    }

    // Tests header comes from the first record followed by one row per record
    // Verified by writing the header before every row
    #[test]
    fn test_header_and_rows() {
        let output = render(&[default_record("run_a", 1), default_record("run_a", 2)]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines.first().copied(),
            Some(
                "Run,Surface,Tile,Tile_38,Average_NotValid,Stdv_NotValid,Average_TopLeft,\
                 Stdv_TopLeft,Average_TopRight,Stdv_TopRight,Average_Center,Stdv_Center,\
                 Average_BottomLeft,Stdv_BottomLeft,Average_BottomRight,Stdv_BottomRight"
            )
        );
        assert_eq!(
            lines.get(2).copied(),
            Some("run_a,Top,2,2,5.0,0.0,5.0,0.0,5.0,0.0,5.0,0.0,5.0,0.0,5.0,0.0")
        );
    }

    // Tests small custom maps render their own columns
    // Verified by hard-coding the default column set
    #[test]
    fn test_custom_zone_columns() {
        let output = render(&[pair_record("b")]);
        assert_eq!(
            output,
            "Run,Surface,Tile,Tile_38,Average_a,Stdv_a,Average_b,Stdv_b\n\
             pair,Top,1,1,1.0,0.0,3.0,0.0\n"
        );
    }

    // Tests records with different zones are rejected
    // Verified by writing mismatched rows under the first header
    #[test]
    fn test_schema_mismatch_rejected() {
        let mut writer = ReportWriter::new(Vec::new());
        assert!(writer.write_record(&pair_record("b")).is_ok());

        match writer.write_record(&pair_record("c")) {
            Err(SubtileError::SchemaMismatch { run, tile, reason }) => {
                assert_eq!(run, "pair");
                assert_eq!(tile, 1);
                assert!(reason.contains("Average_b"), "reason: {reason}");
                assert!(reason.contains("Average_c"), "reason: {reason}");
            }
            _ => unreachable!("Expected SchemaMismatch error"),
        }
        assert_eq!(writer.rows_written(), 1);
    }

    // Tests fields containing delimiters are quoted
    // Verified by writing fields verbatim
    #[test]
    fn test_quoting() {
        let output = render(&[default_record("run, \"b\"", 1)]);
        let row = output.lines().nth(1).unwrap_or_default();
        assert!(row.starts_with("\"run, \"\"b\"\"\",Top,1,1,"), "row: {row}");
    }

    // Tests no records produce no output
    // Verified by writing a default header
    #[test]
    fn test_empty_report() {
        let writer = ReportWriter::new(Vec::new());
        assert!(writer.columns().is_none());
        assert_eq!(writer.rows_written(), 0);
        assert_eq!(render(&[]), "");
    }

    // Tests writing a report file to disk
    // Verified by skipping the flush
    #[test]
    fn test_write_report_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Expected temp dir");
        };
        let path = dir.path().join("report.csv");
        let records = [default_record("x", 1), default_record("x", 20)];

        let rows = write_report_file(&path, &records);
        assert!(matches!(rows, Ok(2)));

        let content = std::fs::read_to_string(&path).unwrap_or_default();
        assert_eq!(content.lines().count(), 3);
        assert!(
            content
                .lines()
                .nth(2)
                .is_some_and(|line| line.starts_with("x,Bottom,1,20,"))
        );
    }

    // Tests unwritable destinations surface a file system error
    // Verified by ignoring creation failures
    #[test]
    fn test_write_report_file_missing_directory() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Expected temp dir");
        };
        let path = dir.path().join("missing").join("report.csv");
        let result = write_report_file(&path, &[]);
        assert!(matches!(result, Err(SubtileError::FileSystem { .. })));
    }
}
