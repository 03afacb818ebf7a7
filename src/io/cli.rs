//! Command-line interface for batch zone statistics over grid files

use crate::io::configuration::{DEFAULT_OUTPUT_FILE, DEFAULT_SURFACE_BOUNDARY, STANDARD_MERGES};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::reader::{GridFileReader, list_inputs, read_zone_map};
use crate::report::assembler::assemble;
use crate::report::record::{ProcessingConfig, TileRecord};
use crate::report::writer::write_report_file;
use crate::zones::aggregate::MergeRule;
use crate::zones::map::ZoneMap;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "subtile")]
#[command(
    author,
    version,
    about = "Compute per-zone statistics for every tile in a set of grid files"
)]
/// Command-line arguments for the zone statistics tool
pub struct Cli {
    /// Grid file or directory of grid files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// CSV report to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Custom zone map table (comma-separated labels, one row per line)
    #[arg(short, long, value_name = "FILE")]
    pub zone_map: Option<PathBuf>,

    /// Add a merged zone from two labels, e.g. `TopLeft,BottomLeft`
    #[arg(short, long = "merge", value_name = "A,B")]
    pub merges: Vec<MergeRule>,

    /// Prepend the four standard quadrant merges
    #[arg(short, long)]
    pub standard_merges: bool,

    /// First tile index counted on the bottom surface
    #[arg(short = 'b', long, default_value_t = DEFAULT_SURFACE_BOUNDARY)]
    pub surface_boundary: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Merge rules in application order
    pub fn merge_rules(&self) -> Vec<MergeRule> {
        let mut rules = Vec::with_capacity(self.merges.len() + STANDARD_MERGES.len());
        if self.standard_merges {
            rules.extend(
                STANDARD_MERGES
                    .iter()
                    .map(|&(first, second)| MergeRule::new(first, second)),
            );
        }
        rules.extend(self.merges.iter().cloned());
        rules
    }

    /// Gather zone layout and derivation settings from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the zone map file cannot be loaded or a setting
    /// is invalid
    pub fn processing_config(&self) -> Result<ProcessingConfig> {
        let zone_map = match &self.zone_map {
            Some(path) => read_zone_map(path)?,
            None => ZoneMap::default(),
        };
        let config = ProcessingConfig {
            zone_map,
            merge_rules: self.merge_rules(),
            surface_boundary: self.surface_boundary,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Orchestrates batch processing of grid files into one report
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process every input file and write the report
    ///
    /// Files are handled in path order and the run stops at the first
    /// error; the report is written only once all files succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, read, aggregation or write error
    pub fn process(&mut self) -> Result<usize> {
        let start_time = Instant::now();
        let config = self.cli.processing_config()?;
        let files = list_inputs(&self.cli.target, Some(self.cli.output.as_path()))?;

        if files.is_empty() {
            warn!(path = %self.cli.target.display(), "no input files found");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let reader = GridFileReader::for_zone_map(&config.zone_map);
        let mut records = Vec::new();
        for file in &files {
            records.extend(self.process_file(&reader, file, &config)?);
        }

        if records.is_empty() {
            warn!("no tiles found, writing empty report");
        }
        let rows = write_report_file(&self.cli.output, &records)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            files = files.len(),
            rows,
            output = %self.cli.output.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "report written"
        );
        Ok(rows)
    }

    fn process_file(
        &mut self,
        reader: &GridFileReader,
        input_path: &Path,
        config: &ProcessingConfig,
    ) -> Result<Vec<TileRecord>> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }
        info!(path = %input_path.display(), "processing file");

        let (run, grids) = reader.read_path(input_path)?;
        let records = assemble(&run, grids, config)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(records.len());
        }
        Ok(records)
    }
}
