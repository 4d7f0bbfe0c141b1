use crate::io::configuration::LOBBY_DAYS;
use crate::io::error::{Result, malformed};
use crate::io::input::non_empty_lines;
use std::collections::{HashMap, HashSet};

/// Axial coordinates of a hexagonal tile
pub type Hex = (i32, i32);

/// Axial offsets of the six directions
pub const DIRECTIONS: [(&str, Hex); 6] = [
    ("e", (1, 0)),
    ("w", (-1, 0)),
    ("ne", (1, -1)),
    ("nw", (0, -1)),
    ("se", (0, 1)),
    ("sw", (-1, 1)),
];

/// Tile reached by following a path from the reference tile
///
/// # Errors
///
/// Returns an error on anything but `e`, `se`, `sw`, `w`, `nw` and `ne`
pub fn locate(path: &str) -> Result<Hex> {
    let mut position = (0, 0);
    let mut rest = path.trim();
    while !rest.is_empty() {
        let (tail, (dq, dr)) = DIRECTIONS
            .iter()
            .find_map(|&(name, offset)| rest.strip_prefix(name).map(|tail| (tail, offset)))
            .ok_or_else(|| malformed("hex path", &format!("'{path}'")))?;
        position = (position.0 + dq, position.1 + dr);
        rest = tail;
    }
    Ok(position)
}

/// Black tiles after flipping the tile at the end of every path
///
/// # Errors
///
/// Returns an error if a path is malformed
pub fn black_tiles(input: &str) -> Result<HashSet<Hex>> {
    let mut black = HashSet::new();
    for line in non_empty_lines(input) {
        let tile = locate(line)?;
        if !black.remove(&tile) {
            black.insert(tile);
        }
    }
    Ok(black)
}

/// One day of the exhibit: black tiles with 0 or more than 2 black
/// neighbours turn white, white tiles with exactly 2 turn black
pub fn next_day(black: &HashSet<Hex>) -> HashSet<Hex> {
    let mut counts: HashMap<Hex, usize> = HashMap::new();
    for &(q, r) in black {
        for (_, (dq, dr)) in DIRECTIONS {
            *counts.entry((q + dq, r + dr)).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(tile, count)| *count == 2 || (*count == 1 && black.contains(tile)))
        .map(|(tile, _)| tile)
        .collect()
}

/// Black tiles after `days` days
pub fn after_days(black: HashSet<Hex>, days: usize) -> usize {
    (0..days).fold(black, |tiles, _| next_day(&tiles)).len()
}

/// Black tiles after the renovation
///
/// # Errors
///
/// Returns an error if a path is malformed
pub fn part1(input: &str) -> Result<usize> {
    Ok(black_tiles(input)?.len())
}

/// Black tiles after 100 days
///
/// # Errors
///
/// Returns an error if a path is malformed
pub fn part2(input: &str) -> Result<usize> {
    Ok(after_days(black_tiles(input)?, LOBBY_DAYS))
}
