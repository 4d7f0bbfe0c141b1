//! Tests for placing tiles into a consistent square grid

#[cfg(test)]
mod tests {
    use crate::common;
    use aoc2020::PuzzleError;
    use aoc2020::algorithm::adjacency::NeighborGraph;
    use aoc2020::algorithm::assembly::{assemble, grid_side, orient_anchor};
    use aoc2020::spatial::grid::Coordinates;
    use aoc2020::spatial::tiles::{Orientation, Tile};
    use std::collections::HashSet;

    /// Tile whose interior is background, framed by the given edges
    ///
    /// Rows read left to right and columns top to bottom.
    fn framed(id: u64, top: &str, right: &str, bottom: &str, left: &str) -> Tile {
        let (top, right, bottom, left): (Vec<char>, Vec<char>, Vec<char>, Vec<char>) = (
            top.chars().collect(),
            right.chars().collect(),
            bottom.chars().collect(),
            left.chars().collect(),
        );
        let n = top.len();
        let rows: Vec<String> = (0..n)
            .map(|row| {
                if row == 0 {
                    top.iter().collect()
                } else if row == n - 1 {
                    bottom.iter().collect()
                } else {
                    let mut line = vec!['.'; n];
                    line[0] = left[row];
                    line[n - 1] = right[row];
                    line.into_iter().collect()
                }
            })
            .collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        Tile::from_rows(id, &rows).unwrap()
    }

    fn matches_some_orientation(expected: &Tile, actual: &Tile) -> bool {
        Orientation::ALL
            .iter()
            .any(|&orientation| expected.oriented(orientation).pixels() == actual.pixels())
    }

    // Tests perfect squares are accepted and anything else rejected
    // Verified by rounding the square root up
    #[test]
    fn test_grid_side() {
        assert_eq!(grid_side(1).unwrap(), 1);
        assert_eq!(grid_side(9).unwrap(), 3);
        assert_eq!(grid_side(144).unwrap(), 12);
        assert!(matches!(grid_side(8), Err(PuzzleError::InconsistentTiling { .. })));
        assert!(grid_side(0).is_err());
    }

    // Tests generated puzzles reassemble into consistent grids with every tile once
    // Verified by skipping the placed-tile exclusion
    #[test]
    fn test_assembles_generated_puzzles() {
        for (seed, side) in [(1, 2), (2, 3), (3, 4), (4, 5)] {
            let jigsaw = common::generate(seed, side, 10);
            let graph = NeighborGraph::discover(jigsaw.tiles.clone()).unwrap();
            let grid = assemble(&graph).unwrap();

            assert_eq!(grid.side(), side);
            assert!(grid.is_consistent(), "seed {seed}");
            let ids: HashSet<u64> = grid.placements().map(|(_, tile)| tile.id()).collect();
            assert_eq!(ids.len(), side * side);

            let mut corners = grid.corner_ids();
            let mut expected = jigsaw.corner_ids();
            corners.sort_unstable();
            expected.sort_unstable();
            assert_eq!(corners, expected);
        }
    }

    // Tests the smallest corner id anchors the grid with shared right and bottom edges
    // Verified by anchoring on the largest corner
    #[test]
    fn test_anchor() {
        let jigsaw = common::generate(21, 3, 10);
        let graph = NeighborGraph::discover(jigsaw.tiles).unwrap();
        let smallest = graph.corners()[0];
        let anchor = orient_anchor(&graph, smallest).unwrap();
        assert!(graph.is_shared(smallest, &anchor.right()));
        assert!(graph.is_shared(smallest, &anchor.bottom()));

        let grid = assemble(&graph).unwrap();
        assert_eq!(grid.get(Coordinates::new(0, 0)).map(Tile::id), Some(smallest));
        assert!(orient_anchor(&graph, 1).is_err());
    }

    // Tests the flattened grid is the source image in some orientation
    // Verified by stripping only the top and left borders
    #[test]
    fn test_flattened_matches_source() {
        let jigsaw = common::generate(8, 3, 10);
        let graph = NeighborGraph::discover(jigsaw.tiles.clone()).unwrap();
        let flat = assemble(&graph).unwrap().flatten().unwrap();
        let source = Tile::new(0, jigsaw.image.clone()).unwrap();

        assert_eq!(flat.side(), 24);
        assert!(matches_some_orientation(&source, &flat));
    }

    // Tests a single tile is its own grid
    // Verified by requiring a corner before the single-tile case
    #[test]
    fn test_single_tile() {
        let tile = Tile::from_rows(42, &["#..", ".#.", "..."]).unwrap();
        let graph = NeighborGraph::discover([tile.clone()]).unwrap();
        let grid = assemble(&graph).unwrap();
        assert_eq!(grid.side(), 1);
        assert_eq!(grid.get(Coordinates::new(0, 0)), Some(&tile));
    }

    // Tests a tile whose shared edges sit on opposite sides cannot close the grid
    // Verified by checking only the left neighbour when placing the last cell
    #[test]
    fn test_rejects_unplaceable_last_tile() {
        // Shared edges
        let (x, y, z, w) = (".#.....", ".##....", ".###...", ".####..");
        let tiles = [
            framed(1, ".#.#...", x, y, ".#.##.."),
            framed(2, "..#....", "..##...", z, x),
            framed(3, y, w, ".##.#..", ".#..#.."),
            // Tile 4 meets tile 3 on its left and tile 2 on its right
            framed(4, ".##..#.", z, ".###.#.", w),
        ];

        let graph = NeighborGraph::discover(tiles).unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.corners(), vec![1, 2, 3, 4]);
        assert!(orient_anchor(&graph, 1).is_ok());
        assert!(matches!(
            assemble(&graph),
            Err(PuzzleError::InconsistentTiling { .. })
        ));
    }

    // Tests a tile count that is not a perfect square fails before any walk
    // Verified by assembling with the truncated square root
    #[test]
    fn test_rejects_non_square_count() {
        let mut tiles = common::generate(13, 3, 10).tiles;
        let graph_full = NeighborGraph::discover(tiles.clone()).unwrap();
        assert!(assemble(&graph_full).is_ok());

        // Dropping a tile leaves 8 well-paired tiles that cannot form a square
        let removed = tiles.pop().unwrap();
        let partial = NeighborGraph::discover(tiles).unwrap();
        assert_eq!(partial.len(), 8);
        assert!(partial.tile(removed.id()).is_none());
        assert!(matches!(
            assemble(&partial),
            Err(PuzzleError::InconsistentTiling { .. })
        ));
    }
}
