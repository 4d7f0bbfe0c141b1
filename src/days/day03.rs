use crate::io::configuration::{BACKGROUND, FOREGROUND, TOBOGGAN_SLOPE, TOBOGGAN_SLOPES};
use crate::io::error::{Result, malformed};
use crate::io::input::non_empty_lines;

/// Tree map that repeats endlessly to the right
#[derive(Clone, Debug)]
pub struct Forest {
    rows: Vec<Vec<bool>>,
}

impl Forest {
    /// Parse rows of `.` and `#`
    ///
    /// # Errors
    ///
    /// Returns an error on unknown characters or rows of different widths
    pub fn parse(input: &str) -> Result<Self> {
        let rows = non_empty_lines(input)
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        FOREGROUND => Ok(true),
                        BACKGROUND => Ok(false),
                        other => Err(malformed("forest", &format!("unexpected '{other}'"))),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(malformed("forest", &"rows must be non-empty and equally wide"));
        }
        Ok(Self { rows })
    }

    /// Trees met going `right` columns and `down` rows per step from the top left
    pub fn trees_on_slope(&self, right: usize, down: usize) -> usize {
        self.rows
            .iter()
            .step_by(down.max(1))
            .enumerate()
            .filter(|(step, row)| row.get(step * right % row.len()).copied().unwrap_or(false))
            .count()
    }
}

/// Trees on the standard slope
///
/// # Errors
///
/// Returns an error if the map is malformed
pub fn part1(input: &str) -> Result<usize> {
    let (right, down) = TOBOGGAN_SLOPE;
    Ok(Forest::parse(input)?.trees_on_slope(right, down))
}

/// Product of trees over every surveyed slope
///
/// # Errors
///
/// Returns an error if the map is malformed
pub fn part2(input: &str) -> Result<usize> {
    let forest = Forest::parse(input)?;
    Ok(TOBOGGAN_SLOPES
        .iter()
        .map(|&(right, down)| forest.trees_on_slope(right, down))
        .product())
}
