//! Spatial data structures for the tile puzzle
//!
//! This module contains:
//! - Edge fingerprints
//! - Tiles and their symmetries
//! - The assembled grid and its flattening

/// Orientation-aware edge fingerprints
pub mod border;
/// Assembled tile grid and flattening
pub mod grid;
/// Square tiles, orientations and parsing
pub mod tiles;

pub use grid::AssembledGrid;
pub use tiles::Tile;
