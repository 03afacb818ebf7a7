//! Turns the grids of one source into sequentially numbered tile records

use tracing::debug;

use crate::io::error::Result;
use crate::report::record::{ProcessingConfig, TileRecord};
use crate::zones::aggregate::Grid;

/// Build one record per grid, numbering tiles from 1 in encounter order
///
/// # Errors
///
/// Stops at the first grid whose record cannot be built
pub fn assemble<I>(run_id: &str, grids: I, config: &ProcessingConfig) -> Result<Vec<TileRecord>>
where
    I: IntoIterator<Item = Grid>,
{
    grids
        .into_iter()
        .enumerate()
        .map(|(offset, grid)| {
            let tile_index = offset + 1;
            debug!(run = run_id, tile = tile_index, "building tile record");
            TileRecord::build(tile_index, &grid, config, run_id)
        })
        .collect()
}
