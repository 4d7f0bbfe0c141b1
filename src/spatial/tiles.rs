//! Square image tiles and the symmetries of the square
//!
//! Tiles are immutable values: every transformation returns a new tile.
//! Pixels are stored as an `ndarray` boolean grid where `true` is a
//! foreground mark.

use ndarray::{Array2, s};
use std::fmt;

use crate::io::configuration::{BACKGROUND, FOREGROUND, TILE_HEADER_PREFIX};
use crate::io::error::{Result, malformed};
use crate::spatial::border::Border;

/// Identifier printed in a tile header
pub type TileId = u64;

/// One of the 8 symmetries of a square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Unchanged
    Identity,
    /// Rows reversed
    Flipped,
    /// Rotated 90° clockwise
    Rotated90,
    /// Rotated 180°
    Rotated180,
    /// Rotated 270° clockwise
    Rotated270,
    /// Rotated 90° clockwise, then rows reversed
    Rotated90Flipped,
    /// Rotated 180°, then rows reversed
    Rotated180Flipped,
    /// Rotated 270° clockwise, then rows reversed
    Rotated270Flipped,
}

impl Orientation {
    /// Every orientation, in the order transformations are tried
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::Flipped,
        Self::Rotated90,
        Self::Rotated180,
        Self::Rotated270,
        Self::Rotated90Flipped,
        Self::Rotated180Flipped,
        Self::Rotated270Flipped,
    ];

    /// Number of clockwise quarter turns applied before any flip
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Identity | Self::Flipped => 0,
            Self::Rotated90 | Self::Rotated90Flipped => 1,
            Self::Rotated180 | Self::Rotated180Flipped => 2,
            Self::Rotated270 | Self::Rotated270Flipped => 3,
        }
    }

    /// Whether rows are reversed after rotating
    pub const fn is_flipped(self) -> bool {
        matches!(
            self,
            Self::Flipped | Self::Rotated90Flipped | Self::Rotated180Flipped | Self::Rotated270Flipped
        )
    }
}

/// A square grid of foreground/background cells with an identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    id: TileId,
    pixels: Array2<bool>,
}

impl Tile {
    /// Create a tile from a pixel grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or not square
    pub fn new(id: TileId, pixels: Array2<bool>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows == 0 || rows != cols {
            return Err(malformed(
                "tile",
                &format!("tile {id} is {rows}x{cols}, expected a non-empty square"),
            ));
        }
        Ok(Self { id, pixels })
    }

    /// Create a tile from rows of `#`/`.` characters
    ///
    /// # Errors
    ///
    /// Returns an error if rows differ in width, contain other characters,
    /// or do not form a square
    pub fn from_rows(id: TileId, rows: &[&str]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(rows.len() * width);

        for row in rows {
            if row.chars().count() != width {
                return Err(malformed(
                    "tile",
                    &format!("tile {id} has rows of different widths"),
                ));
            }
            for c in row.chars() {
                match c {
                    FOREGROUND => cells.push(true),
                    BACKGROUND => cells.push(false),
                    other => {
                        return Err(malformed(
                            "tile",
                            &format!("tile {id} contains unexpected character '{other}'"),
                        ));
                    }
                }
            }
        }

        let pixels = Array2::from_shape_vec((rows.len(), width), cells)
            .map_err(|e| malformed("tile", &format!("tile {id}: {e}")))?;
        Self::new(id, pixels)
    }

    /// Parse a tile block: a `Tile <id>:` header followed by its rows
    ///
    /// # Errors
    ///
    /// Returns an error if the header is missing or malformed, or the rows
    /// do not form a square tile
    pub fn parse(lines: &[&str]) -> Result<Self> {
        let (header, rows) = lines
            .split_first()
            .ok_or_else(|| malformed("tile", &"empty tile block"))?;
        let id = header
            .trim()
            .strip_prefix(TILE_HEADER_PREFIX)
            .and_then(|rest| rest.strip_suffix(':'))
            .and_then(|number| number.trim().parse::<TileId>().ok())
            .ok_or_else(|| malformed("tile header", &format!("'{header}'")))?;
        Self::from_rows(id, rows)
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Pixel grid, `true` for foreground marks
    pub const fn pixels(&self) -> &Array2<bool> {
        &self.pixels
    }

    /// Side length in cells
    pub fn side(&self) -> usize {
        self.pixels.nrows()
    }

    /// Top edge, read left to right
    pub fn top(&self) -> Border {
        self.row_border(0)
    }

    /// Bottom edge, read left to right
    pub fn bottom(&self) -> Border {
        self.row_border(self.side().saturating_sub(1))
    }

    /// Left edge, read top to bottom
    pub fn left(&self) -> Border {
        self.column_border(0)
    }

    /// Right edge, read top to bottom
    pub fn right(&self) -> Border {
        self.column_border(self.side().saturating_sub(1))
    }

    fn row_border(&self, row: usize) -> Border {
        Border::from_cells((0..self.side()).filter_map(|col| self.pixels.get((row, col)).copied()))
    }

    fn column_border(&self, col: usize) -> Border {
        Border::from_cells((0..self.side()).filter_map(|row| self.pixels.get((row, col)).copied()))
    }

    /// All edges as they may be seen by a neighbour in any orientation
    ///
    /// Returns the reversed top, bottom, left and right edges followed by
    /// the edges themselves.
    pub fn all_borders(&self) -> [Border; 8] {
        let [top, bottom, left, right] = [self.top(), self.bottom(), self.left(), self.right()];
        [
            top.flipped(),
            bottom.flipped(),
            left.flipped(),
            right.flipped(),
            top,
            bottom,
            left,
            right,
        ]
    }

    /// The tile rotated 90° clockwise
    #[must_use]
    pub fn rotate_90(&self) -> Self {
        // new[r][c] = old[n - 1 - c][r]
        let pixels = self.pixels.t().slice(s![.., ..;-1]).to_owned();
        Self { id: self.id, pixels }
    }

    /// The tile with its rows reversed
    #[must_use]
    pub fn flip_vertical(&self) -> Self {
        let pixels = self.pixels.slice(s![..;-1, ..]).to_owned();
        Self { id: self.id, pixels }
    }

    /// The tile under one symmetry of the square
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        let rotated = (0..orientation.quarter_turns()).fold(self.clone(), |tile, _| tile.rotate_90());
        if orientation.is_flipped() {
            rotated.flip_vertical()
        } else {
            rotated
        }
    }

    /// The 8 tiles obtained by applying every orientation
    ///
    /// Symmetric tiles may yield duplicates.
    pub fn transformations(&self) -> [Self; 8] {
        Orientation::ALL.map(|orientation| self.oriented(orientation))
    }

    /// The tile with its outermost ring of cells removed
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is narrower than 2 cells
    pub fn remove_border(&self) -> Result<Self> {
        let n = self.side();
        if n < 2 {
            return Err(malformed(
                "tile",
                &format!("tile {} is too small to strip its border", self.id),
            ));
        }
        let pixels = self.pixels.slice(s![1..n - 1, 1..n - 1]).to_owned();
        Ok(Self { id: self.id, pixels })
    }

    /// Number of foreground marks
    pub fn foreground_count(&self) -> usize {
        self.pixels.iter().filter(|&&mark| mark).count()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.rows() {
            for &mark in row {
                let c = if mark { FOREGROUND } else { BACKGROUND };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse every tile block of a puzzle input
///
/// # Errors
///
/// Returns an error if any block is not a valid tile
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>> {
    crate::io::input::blocks(input)
        .iter()
        .map(|block| Tile::parse(block))
        .collect()
}
