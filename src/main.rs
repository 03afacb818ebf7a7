//! CLI entry point for the zone statistics report tool

use clap::Parser;
use subtile::io::cli::{Cli, FileProcessor};
use subtile::io::logging;

fn main() -> subtile::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
