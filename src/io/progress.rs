//! Batch progress display for multi-file runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks files and tiles processed during a batch run
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    files_completed: usize,
    tiles_processed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            files_completed: 0,
            tiles_processed: 0,
        }
    }

    /// Create the progress bar for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
        self.files_completed = 0;
        self.tiles_processed = 0;
    }

    /// Show the file currently being read
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark a file as completed with the number of tiles it produced
    pub fn complete_file(&mut self, tiles: usize) {
        self.files_completed += 1;
        self.tiles_processed += tiles;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Files completed since initialization
    pub const fn files_completed(&self) -> usize {
        self.files_completed
    }

    /// Tiles produced since initialization
    pub const fn tiles_processed(&self) -> usize {
        self.tiles_processed
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!("{} tiles", self.tiles_processed));
        }
    }
}
