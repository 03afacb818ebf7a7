//! Tests for sequential tile numbering within one source

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use subtile::SubtileError;
    use subtile::report::assembler::assemble;
    use subtile::report::record::ProcessingConfig;
    use subtile::zones::aggregate::Grid;

    fn uniform(value: i64) -> Grid {
        Array2::from_elem((12, 14), value)
    }

    // Tests tiles are numbered from 1 in encounter order
    // Verified by numbering from 0
    #[test]
    fn test_sequential_indices() {
        let grids = vec![uniform(1), uniform(2), uniform(3)];
        let Ok(records) = assemble("run_a", grids, &ProcessingConfig::default()) else {
            unreachable!("Expected records to build");
        };

        let indices: Vec<usize> = records.iter().map(|r| r.absolute_tile_index()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert!(records.iter().all(|r| r.run() == "run_a"));
    }

    // Tests numbering restarts for every source
    // Verified by keeping a counter across calls
    #[test]
    fn test_indices_restart_per_source() {
        let config = ProcessingConfig::default();
        let first = assemble("a", vec![uniform(1), uniform(1)], &config).unwrap_or_default();
        let second = assemble("b", vec![uniform(1)], &config).unwrap_or_default();

        assert_eq!(first.len(), 2);
        assert_eq!(second.first().map(|r| r.absolute_tile_index()), Some(1));
    }

    // Tests zero grids yield zero records
    // Verified by erroring on empty input
    #[test]
    fn test_empty_source() {
        let records = assemble("empty", Vec::new(), &ProcessingConfig::default());
        assert!(matches!(records, Ok(ref r) if r.is_empty()));
    }

    // Tests the first failing grid aborts the source
    // Verified by skipping failing grids
    #[test]
    fn test_error_aborts() {
        let grids = vec![uniform(1), Array2::zeros((2, 2))];
        let result = assemble("bad", grids, &ProcessingConfig::default());
        match result {
            Err(SubtileError::GridShape { run, tile, .. }) => {
                assert_eq!(run, "bad");
                assert_eq!(tile, 2);
            }
            _ => unreachable!("Expected GridShape error for the second tile"),
        }
    }
}
