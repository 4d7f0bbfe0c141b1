//! Grid assembly walk
//!
//! Starting from an oriented corner, tiles are placed row-major. Each cell is
//! filled by the unplaced neighbour of an already placed tile whose
//! orientation makes the touching edges read identically.

use crate::algorithm::adjacency::NeighborGraph;
use crate::io::error::{Result, inconsistent, malformed};
use crate::spatial::border::Border;
use crate::spatial::grid::AssembledGrid;
use crate::spatial::tiles::{Orientation, Tile, TileId};
use log::{debug, trace};
use std::collections::HashSet;

/// Which edge of the reference tile the next tile attaches to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Attachment {
    /// The next tile sits to the right of the reference
    RightOf,
    /// The next tile sits below the reference
    Below,
}

impl Attachment {
    fn reference_edge(self, reference: &Tile) -> Border {
        match self {
            Self::RightOf => reference.right(),
            Self::Below => reference.bottom(),
        }
    }

    fn candidate_edge(self, candidate: &Tile) -> Border {
        match self {
            Self::RightOf => candidate.left(),
            Self::Below => candidate.top(),
        }
    }
}

/// Side length of a square arrangement of `count` tiles
///
/// # Errors
///
/// Returns an error if `count` is zero or not a perfect square
pub fn grid_side(count: usize) -> Result<usize> {
    if count == 0 {
        return Err(malformed("tiles", &"no tiles to assemble"));
    }
    let side = count.isqrt();
    if side * side == count {
        Ok(side)
    } else {
        Err(inconsistent(&format!(
            "{count} tiles cannot form a square grid"
        )))
    }
}

/// Orientation of a corner tile that puts its shared edges right and bottom
///
/// Orientations are tried in `Orientation::ALL` order and the first fit wins.
///
/// # Errors
///
/// Returns an error if the tile is unknown or no orientation exposes shared
/// edges on both the right and the bottom
pub fn orient_anchor(graph: &NeighborGraph, id: TileId) -> Result<Tile> {
    let tile = graph
        .tile(id)
        .ok_or_else(|| inconsistent(&format!("anchor tile {id} is not in the graph")))?;

    Orientation::ALL
        .iter()
        .map(|&orientation| (orientation, tile.oriented(orientation)))
        .find(|(_, oriented)| {
            graph.is_shared(id, &oriented.right()) && graph.is_shared(id, &oriented.bottom())
        })
        .map(|(orientation, oriented)| {
            debug!("anchor tile {id} placed as {orientation:?}");
            oriented
        })
        .ok_or_else(|| {
            inconsistent(&format!(
                "corner tile {id} has no orientation with shared right and bottom edges"
            ))
        })
}

/// Find the unplaced neighbour orientation that continues the grid
fn place_next(
    graph: &NeighborGraph,
    reference: &Tile,
    attachment: Attachment,
    above: Option<&Tile>,
    placed: &HashSet<TileId>,
) -> Result<Tile> {
    let required = attachment.reference_edge(reference);

    graph
        .neighbors(reference.id())
        .filter(|id| !placed.contains(id))
        .filter(|&id| graph.is_shared(id, &required))
        .filter_map(|id| graph.tile(id))
        .flat_map(Tile::transformations)
        .find(|candidate| {
            attachment.candidate_edge(candidate) == required
                && above.is_none_or(|tile| tile.bottom() == candidate.top())
        })
        .ok_or_else(|| {
            inconsistent(&format!(
                "no unplaced neighbour of tile {} fits {:?} it",
                reference.id(),
                attachment
            ))
        })
}

/// Place every tile of the graph into a square grid
///
/// The anchor is the corner with the smallest identifier. A graph of one
/// tile is its own grid.
///
/// # Errors
///
/// Returns an error if the tile count is not a perfect square, no corner
/// exists, or some grid cell has no fitting candidate
pub fn assemble(graph: &NeighborGraph) -> Result<AssembledGrid> {
    let side = grid_side(graph.len())?;

    if side == 1 {
        let lone = graph
            .tiles()
            .next()
            .cloned()
            .ok_or_else(|| malformed("tiles", &"no tiles to assemble"))?;
        return AssembledGrid::from_row_major(1, vec![lone]);
    }

    let anchor_id = graph
        .corners()
        .first()
        .copied()
        .ok_or_else(|| inconsistent(&"no corner tile to anchor the grid"))?;

    let mut placements: Vec<Tile> = Vec::with_capacity(graph.len());
    let mut placed = HashSet::with_capacity(graph.len());
    let anchor = orient_anchor(graph, anchor_id)?;
    placed.insert(anchor.id());
    placements.push(anchor);

    for index in 1..graph.len() {
        let (row, column) = (index / side, index % side);
        let (reference_index, attachment) = if column == 0 {
            ((row - 1) * side, Attachment::Below)
        } else {
            (index - 1, Attachment::RightOf)
        };
        let above = (row > 0 && column > 0)
            .then(|| placements.get(index - side))
            .flatten();
        let reference = placements
            .get(reference_index)
            .ok_or_else(|| inconsistent(&format!("grid cell {reference_index} is empty")))?;

        let next = place_next(graph, reference, attachment, above, &placed)?;
        trace!("placed tile {} at ({row}, {column})", next.id());
        placed.insert(next.id());
        placements.push(next);
    }

    AssembledGrid::from_row_major(side, placements)
}
