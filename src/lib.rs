//! Solvers for the 2020 Advent of Code puzzles
//!
//! Each day reads its input once and answers two questions. The largest piece
//! is the tile-stitching engine behind day 20: edge fingerprints, neighbour
//! discovery, grid assembly, and a pattern search over the stitched image.

#![deny(unsafe_code)]

/// Tile pairing, grid assembly and candidate elimination
pub mod algorithm;
/// Pattern search over assembled images
pub mod analysis;
/// The 25 daily solvers and their dispatch
pub mod days;
/// Input/output operations and error handling
pub mod io;
/// Modular arithmetic
pub mod math;
/// Tiles, borders and assembled grids
pub mod spatial;

pub use io::error::{PuzzleError, Result};
