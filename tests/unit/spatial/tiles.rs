//! Tests for tile parsing and the eight symmetries of the square

#[cfg(test)]
mod tests {
    use aoc2020::PuzzleError;
    use aoc2020::spatial::border::Border;
    use aoc2020::spatial::tiles::{Orientation, Tile, parse_tiles};
    use std::collections::HashSet;

    const ASYMMETRIC: [&str; 3] = ["##.", "...", "#.."];

    fn sample() -> Tile {
        Tile::from_rows(7, &ASYMMETRIC).unwrap()
    }

    fn rotate_90_reference(tile: &Tile) -> Vec<Vec<bool>> {
        let n = tile.side();
        (0..n)
            .map(|r| (0..n).map(|c| tile.pixels()[(n - 1 - c, r)]).collect())
            .collect()
    }

    fn rows(tile: &Tile) -> Vec<Vec<bool>> {
        tile.pixels().rows().into_iter().map(|row| row.to_vec()).collect()
    }

    // Tests clockwise rotation against the index formula new[r][c] = old[n-1-c][r]
    // Verified by rotating counter-clockwise
    #[test]
    fn test_rotate_90_clockwise() {
        let tile = sample();
        assert_eq!(rows(&tile.rotate_90()), rotate_90_reference(&tile));
        assert_eq!(tile.rotate_90().to_string(), "#.#\n..#\n...\n");
    }

    // Tests four rotations return the original and flips reverse rows
    // Verified by flipping columns instead of rows
    #[test]
    fn test_rotation_cycle_and_flip() {
        let tile = sample();
        let full_turn = (0..4).fold(tile.clone(), |t, _| t.rotate_90());
        assert_eq!(full_turn, tile);
        assert_eq!(tile.flip_vertical().to_string(), "#..\n...\n##.\n");
        assert_eq!(tile.flip_vertical().flip_vertical(), tile);
    }

    // Tests an asymmetric tile yields eight distinct transformations
    // Verified by omitting the flipped rotations
    #[test]
    fn test_transformations_are_distinct() {
        let distinct: HashSet<Tile> = sample().transformations().into_iter().collect();
        assert_eq!(distinct.len(), 8);
    }

    // Tests the transformation set is closed under rotation
    // Verified by dropping one orientation from Orientation::ALL
    #[test]
    fn test_transformations_closed_under_rotation() {
        let tile = sample();
        let original: HashSet<Tile> = tile.transformations().into_iter().collect();
        let rotated: HashSet<Tile> = tile.rotate_90().transformations().into_iter().collect();
        assert_eq!(original, rotated);
    }

    // Tests a fully symmetric tile collapses to one transformation
    // Verified by treating duplicates as errors
    #[test]
    fn test_symmetric_tile_duplicates() {
        let tile = Tile::from_rows(1, &["#.#", ".#.", "#.#"]).unwrap();
        let distinct: HashSet<Tile> = tile.transformations().into_iter().collect();
        assert_eq!(distinct.len(), 1);
    }

    // Tests orientation metadata matches the transformation applied
    // Verified by flipping before rotating
    #[test]
    fn test_oriented_matches_composition() {
        let tile = sample();
        for orientation in Orientation::ALL {
            let manual = (0..orientation.quarter_turns()).fold(tile.clone(), |t, _| t.rotate_90());
            let expected = if orientation.is_flipped() {
                manual.flip_vertical()
            } else {
                manual
            };
            assert_eq!(tile.oriented(orientation), expected, "{orientation:?}");
        }
    }

    // Tests edge reading directions
    // Verified by reading the right edge bottom to top
    #[test]
    fn test_edges() {
        let tile = sample();
        assert_eq!(tile.top(), Border::parse("##."));
        assert_eq!(tile.bottom(), Border::parse("#.."));
        assert_eq!(tile.left(), Border::parse("#.#"));
        assert_eq!(tile.right(), Border::parse("..."));
    }

    // Tests all borders hold every edge in both directions
    // Verified by returning only the physical edges
    #[test]
    fn test_all_borders() {
        let tile = sample();
        let borders = tile.all_borders();
        for edge in [tile.top(), tile.bottom(), tile.left(), tile.right()] {
            assert!(borders.contains(&edge.flipped()));
            assert!(borders.contains(&edge));
        }
    }

    // Tests the outer ring is stripped
    // Verified by keeping the first row
    #[test]
    fn test_remove_border() {
        let tile = Tile::from_rows(3, &["####", "#.##", "##.#", "####"]).unwrap();
        let inner = tile.remove_border().unwrap();
        assert_eq!(inner.to_string(), ".#\n#.\n");
        assert_eq!(inner.id(), 3);

        let tiny = Tile::from_rows(4, &["#"]).unwrap();
        assert!(tiny.remove_border().is_err());
    }

    // Tests tile block parsing including header errors
    // Verified by accepting headers without the trailing colon
    #[test]
    fn test_parse_blocks() {
        let input = "Tile 2311:\n#.\n.#\n\nTile 1951:\n..\n##\n";
        let tiles = parse_tiles(input).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].id(), 2311);
        assert_eq!(tiles[1].foreground_count(), 2);

        assert!(matches!(
            Tile::parse(&["Tile x:", "#."]),
            Err(PuzzleError::MalformedInput { .. })
        ));
        assert!(Tile::parse(&["Tile 5", "#"]).is_err());
    }

    // Tests non-square and unknown-character tiles are rejected
    // Verified by skipping the squareness check
    #[test]
    fn test_rejects_bad_shapes() {
        assert!(Tile::from_rows(1, &["##", "#"]).is_err());
        assert!(Tile::from_rows(1, &["###", "###"]).is_err());
        assert!(Tile::from_rows(1, &["#x", ".."]).is_err());
        assert!(Tile::from_rows(1, &[]).is_err());
    }
}
