//! Assembled tile grid and flattening into a single image
//!
//! The grid owns one oriented tile per coordinate, stored row-major in an
//! `ndarray` grid whose side is the square root of the tile count.

use ndarray::{Array2, ArrayView2, Axis, concatenate};

use crate::io::error::{Result, inconsistent};
use crate::spatial::tiles::{Tile, TileId};

/// Identifier given to the flattened image
pub const FLATTENED_ID: TileId = 0;

/// Position of a tile in the assembled grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    /// Row index, top to bottom
    pub row: usize,
    /// Column index, left to right
    pub column: usize,
}

impl Coordinates {
    /// Create coordinates from a row and a column
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Square arrangement of oriented tiles
#[derive(Clone, Debug)]
pub struct AssembledGrid {
    cells: Array2<Tile>,
}

impl AssembledGrid {
    /// Build a grid from tiles listed row-major
    ///
    /// # Errors
    ///
    /// Returns an error if the tile count is not `side * side`
    pub fn from_row_major(side: usize, tiles: Vec<Tile>) -> Result<Self> {
        let count = tiles.len();
        let cells = Array2::from_shape_vec((side, side), tiles).map_err(|e| {
            inconsistent(&format!("{count} tiles cannot fill a {side}x{side} grid: {e}"))
        })?;
        Ok(Self { cells })
    }

    /// Number of tiles along each side
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile placed at a coordinate
    pub fn get(&self, at: Coordinates) -> Option<&Tile> {
        self.cells.get((at.row, at.column))
    }

    /// Iterate over every placement in row-major order
    pub fn placements(&self) -> impl Iterator<Item = (Coordinates, &Tile)> {
        self.cells
            .indexed_iter()
            .map(|((row, column), tile)| (Coordinates::new(row, column), tile))
    }

    /// Identifiers at the four corners: top-left, top-right, bottom-left, bottom-right
    pub fn corner_ids(&self) -> Vec<TileId> {
        let last = self.side().saturating_sub(1);
        [(0, 0), (0, last), (last, 0), (last, last)]
            .iter()
            .filter_map(|&(row, column)| self.get(Coordinates::new(row, column)))
            .map(Tile::id)
            .collect()
    }

    /// Check that every pair of touching edges reads identically
    pub fn is_consistent(&self) -> bool {
        self.placements().all(|(at, tile)| {
            let right_fits = self
                .get(Coordinates::new(at.row, at.column + 1))
                .is_none_or(|next| next.left() == tile.right());
            let below_fits = self
                .get(Coordinates::new(at.row + 1, at.column))
                .is_none_or(|next| next.top() == tile.bottom());
            right_fits && below_fits
        })
    }

    /// Strip every tile's border and join the interiors into one image
    ///
    /// # Errors
    ///
    /// Returns an error if a tile is too small to strip or interiors of one
    /// grid row differ in size
    pub fn flatten(&self) -> Result<Tile> {
        let mut bands = Vec::with_capacity(self.side());

        for tile_row in self.cells.rows() {
            let interiors = tile_row
                .iter()
                .map(Tile::remove_border)
                .collect::<Result<Vec<_>>>()?;
            let views: Vec<ArrayView2<'_, bool>> =
                interiors.iter().map(|tile| tile.pixels().view()).collect();
            let band = concatenate(Axis(1), &views)
                .map_err(|e| inconsistent(&format!("cannot join tile row: {e}")))?;
            bands.push(band);
        }

        let band_views: Vec<ArrayView2<'_, bool>> = bands.iter().map(Array2::view).collect();
        let pixels = concatenate(Axis(0), &band_views)
            .map_err(|e| inconsistent(&format!("cannot stack tile rows: {e}")))?;
        Tile::new(FLATTENED_ID, pixels)
    }
}
