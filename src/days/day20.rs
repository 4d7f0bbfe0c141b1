use crate::algorithm::adjacency::NeighborGraph;
use crate::algorithm::assembly::assemble;
use crate::analysis::patterns::{Pattern, SearchOutcome, search_all_orientations};
use crate::io::error::{Result, inconsistent};
use crate::spatial::grid::AssembledGrid;
use crate::spatial::tiles::{TileId, parse_tiles};
use log::debug;

/// Neighbour graph of every tile in the input
///
/// # Errors
///
/// Returns an error if a tile is malformed or the tiles do not pair up
pub fn discover(input: &str) -> Result<NeighborGraph> {
    NeighborGraph::discover(parse_tiles(input)?)
}

/// Assemble the tiles into a verified square grid
///
/// # Errors
///
/// Returns an error if discovery or assembly fails, or the grid has touching
/// edges that disagree
pub fn assemble_grid(input: &str) -> Result<AssembledGrid> {
    let grid = assemble(&discover(input)?)?;
    if !grid.is_consistent() {
        return Err(inconsistent(&"assembled grid has mismatched edges"));
    }
    debug!("assembled a {0}x{0} grid", grid.side());
    Ok(grid)
}

/// Search the stitched image for a pattern in every orientation
///
/// # Errors
///
/// Returns an error if the grid cannot be assembled or the pattern is absent
pub fn search(input: &str, pattern: &Pattern) -> Result<SearchOutcome> {
    let image = assemble_grid(input)?.flatten()?;
    search_all_orientations(&image, pattern)
}

/// Product of the four corner tile ids
///
/// # Errors
///
/// Returns an error if the tiles do not form exactly four corners
pub fn part1(input: &str) -> Result<TileId> {
    let corners = discover(input)?.four_corners()?;
    debug!("corner tiles: {corners:?}");
    Ok(corners.iter().product())
}

/// Water roughness around the sea monsters
///
/// # Errors
///
/// Returns an error if assembly fails or no sea monster is found
pub fn part2(input: &str) -> Result<usize> {
    let pattern = Pattern::sea_monster()?;
    Ok(search(input, &pattern)?.roughness(&pattern))
}
