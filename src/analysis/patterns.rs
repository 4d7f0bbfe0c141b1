//! Fixed pixel-mask search over a flattened image
//!
//! A pattern is the set of required foreground offsets of a small mask. The
//! search slides the mask over every orientation of the image and keeps the
//! orientation with the most occurrences.

use ndarray::Array2;
use log::debug;

use crate::io::configuration::{FOREGROUND, SEA_MONSTER};
use crate::io::error::{Result, malformed, no_solution};
use crate::spatial::grid::Coordinates;
use crate::spatial::tiles::{Orientation, Tile};

/// Required foreground offsets of a rectangular mask
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    height: usize,
    width: usize,
    offsets: Vec<Coordinates>,
}

impl Pattern {
    /// Build a pattern from mask rows; `#` cells are required marks
    ///
    /// # Errors
    ///
    /// Returns an error if the mask has no required marks
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let offsets: Vec<Coordinates> = rows
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, c)| c == FOREGROUND)
                    .map(move |(column, _)| Coordinates::new(row, column))
            })
            .collect();

        if offsets.is_empty() {
            return Err(malformed("pattern", &"mask has no required marks"));
        }

        let width = rows
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or_default();
        Ok(Self {
            height: rows.len(),
            width,
            offsets,
        })
    }

    /// The sea monster
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in mask is empty
    pub fn sea_monster() -> Result<Self> {
        Self::parse(&SEA_MONSTER)
    }

    /// Rows spanned by the mask
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the mask
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of foreground cells one occurrence covers
    pub fn mark_count(&self) -> usize {
        self.offsets.len()
    }

    /// Required offsets relative to the top-left anchor
    pub fn offsets(&self) -> &[Coordinates] {
        &self.offsets
    }

    /// Check whether the mask matches with its top-left corner at `anchor`
    pub fn matches_at(&self, pixels: &Array2<bool>, anchor: Coordinates) -> bool {
        self.offsets.iter().all(|offset| {
            pixels
                .get((anchor.row + offset.row, anchor.column + offset.column))
                .copied()
                .unwrap_or(false)
        })
    }

    /// Top-left anchors of every occurrence, row-major; occurrences may overlap
    pub fn occurrences(&self, image: &Tile) -> Vec<Coordinates> {
        let (rows, columns) = image.pixels().dim();
        if rows < self.height || columns < self.width {
            return Vec::new();
        }

        let mut found = Vec::new();
        for row in 0..=rows - self.height {
            for column in 0..=columns - self.width {
                let anchor = Coordinates::new(row, column);
                if self.matches_at(image.pixels(), anchor) {
                    found.push(anchor);
                }
            }
        }
        found
    }

    /// Number of occurrences in the image as oriented
    pub fn count(&self, image: &Tile) -> usize {
        self.occurrences(image).len()
    }
}

/// Orientation of the image in which the pattern was found
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Orientation applied to the flattened image
    pub orientation: Orientation,
    /// The image in that orientation
    pub image: Tile,
    /// Top-left anchors of every occurrence
    pub occurrences: Vec<Coordinates>,
}

impl SearchOutcome {
    /// Number of occurrences found
    pub fn match_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Cells covered by at least one occurrence
    pub fn highlighted(&self, pattern: &Pattern) -> Array2<bool> {
        let mut covered = Array2::from_elem(self.image.pixels().dim(), false);
        for anchor in &self.occurrences {
            for offset in pattern.offsets() {
                if let Some(cell) =
                    covered.get_mut((anchor.row + offset.row, anchor.column + offset.column))
                {
                    *cell = true;
                }
            }
        }
        covered
    }

    /// Foreground marks left once every occurrence's marks are discounted
    ///
    /// Overlapping occurrences each discount their full mark count.
    pub fn roughness(&self, pattern: &Pattern) -> usize {
        self.image
            .foreground_count()
            .saturating_sub(self.match_count() * pattern.mark_count())
    }
}

/// Search every orientation and keep the one with the most occurrences
///
/// Ties keep the earliest orientation in `Orientation::ALL` order.
///
/// # Errors
///
/// Returns an error if no orientation contains the pattern
pub fn search_all_orientations(image: &Tile, pattern: &Pattern) -> Result<SearchOutcome> {
    let mut best: Option<SearchOutcome> = None;

    for orientation in Orientation::ALL {
        let oriented = image.oriented(orientation);
        let occurrences = pattern.occurrences(&oriented);
        debug!("{orientation:?}: {} pattern matches", occurrences.len());

        if best
            .as_ref()
            .is_none_or(|current| occurrences.len() > current.match_count())
        {
            best = Some(SearchOutcome {
                orientation,
                image: oriented,
                occurrences,
            });
        }
    }

    best.filter(|outcome| outcome.match_count() > 0)
        .ok_or_else(|| {
            no_solution(
                "pattern search",
                &"the pattern occurs in no orientation of the image",
            )
        })
}

/// Foreground marks of the image that belong to no pattern occurrence
///
/// # Errors
///
/// Returns an error if no orientation contains the pattern
pub fn water_roughness(image: &Tile, pattern: &Pattern) -> Result<usize> {
    search_all_orientations(image, pattern).map(|outcome| outcome.roughness(pattern))
}
