//! Orientation-aware edge fingerprints
//!
//! A border records which positions along one tile edge carry a foreground
//! mark, read in a fixed direction. Two edges that touch in the assembled
//! image read identically in the shared direction; an edge that only matches
//! after reversal belongs to a neighbour presented in the opposite
//! orientation.

use bitvec::vec::BitVec;
use std::fmt;

use crate::io::configuration::{BACKGROUND, FOREGROUND};

/// Fingerprint of one tile edge: mark positions plus edge length
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Border {
    marks: BitVec,
}

impl Border {
    /// Build a border from edge cells in reading order
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            marks: cells.into_iter().collect(),
        }
    }

    /// Build a border from an edge string, where `#` is a mark
    pub fn parse(edge: &str) -> Self {
        Self::from_cells(edge.chars().map(|c| c == FOREGROUND))
    }

    /// The same edge read in the opposite direction
    #[must_use]
    pub fn flipped(&self) -> Self {
        let mut marks = self.marks.clone();
        marks.reverse();
        Self { marks }
    }

    /// Number of cells along the edge
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Check whether the edge has no cells at all
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Positions along the edge that carry a mark, ascending
    pub fn mark_positions(&self) -> Vec<usize> {
        self.marks.iter_ones().collect()
    }

    /// Test whether the other border is this one read in either direction
    pub fn matches_either_way(&self, other: &Self) -> bool {
        self == other || self.flipped() == *other
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks.iter().by_vals() {
            let c = if mark { FOREGROUND } else { BACKGROUND };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
