use crate::io::configuration::{ADJACENT_TOLERANCE, VISIBLE_TOLERANCE};
use crate::io::error::{Result, malformed};
use crate::io::input::non_empty_lines;
use ndarray::Array2;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One position of the seat layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    /// No seat
    Floor,
    /// Seat nobody sits in
    Empty,
    /// Seat somebody sits in
    Occupied,
}

/// Which seats a passenger pays attention to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbourhood {
    /// The eight touching positions
    Adjacent,
    /// The first seat seen in each of the eight directions
    Visible,
}

/// Parse `.`, `L` and `#` rows
///
/// # Errors
///
/// Returns an error on unknown characters or ragged rows
pub fn parse(input: &str) -> Result<Array2<Seat>> {
    let rows: Vec<&str> = non_empty_lines(input).collect();
    let width = rows.first().map_or(0, |row| row.chars().count());
    let cells = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| match c {
            '.' => Ok(Seat::Floor),
            'L' => Ok(Seat::Empty),
            '#' => Ok(Seat::Occupied),
            other => Err(malformed("seat layout", &format!("unexpected '{other}'"))),
        })
        .collect::<Result<Vec<_>>>()?;
    Array2::from_shape_vec((rows.len(), width), cells)
        .map_err(|e| malformed("seat layout", &e))
}

fn offset(
    layout: &Array2<Seat>,
    (row, column): (usize, usize),
    (down, right): (isize, isize),
) -> Option<(usize, usize)> {
    let next = (row.checked_add_signed(down)?, column.checked_add_signed(right)?);
    layout.get(next).map(|_| next)
}

fn occupied_around(
    layout: &Array2<Seat>,
    position: (usize, usize),
    neighbourhood: Neighbourhood,
) -> usize {
    DIRECTIONS
        .iter()
        .filter(|&&direction| {
            let mut current = position;
            loop {
                let Some(next) = offset(layout, current, direction) else {
                    return false;
                };
                match layout.get(next) {
                    Some(Seat::Occupied) => return true,
                    Some(Seat::Floor) if neighbourhood == Neighbourhood::Visible => current = next,
                    _ => return false,
                }
            }
        })
        .count()
}

/// One round of seating changes; `None` once nothing changes
pub fn step(layout: &Array2<Seat>, neighbourhood: Neighbourhood) -> Option<Array2<Seat>> {
    let tolerance = match neighbourhood {
        Neighbourhood::Adjacent => ADJACENT_TOLERANCE,
        Neighbourhood::Visible => VISIBLE_TOLERANCE,
    };
    let mut changed = false;
    let next = Array2::from_shape_fn(layout.dim(), |position| {
        let seat = layout.get(position).copied().unwrap_or(Seat::Floor);
        let updated = match seat {
            Seat::Empty if occupied_around(layout, position, neighbourhood) == 0 => Seat::Occupied,
            Seat::Occupied if occupied_around(layout, position, neighbourhood) >= tolerance => {
                Seat::Empty
            }
            unchanged => unchanged,
        };
        changed |= updated != seat;
        updated
    });
    changed.then_some(next)
}

/// Occupied seats once the layout stops changing
pub fn settle(mut layout: Array2<Seat>, neighbourhood: Neighbourhood) -> usize {
    while let Some(next) = step(&layout, neighbourhood) {
        layout = next;
    }
    layout.iter().filter(|&&seat| seat == Seat::Occupied).count()
}

/// Occupied seats at equilibrium under the adjacency rule
///
/// # Errors
///
/// Returns an error if the layout is malformed
pub fn part1(input: &str) -> Result<usize> {
    Ok(settle(parse(input)?, Neighbourhood::Adjacent))
}

/// Occupied seats at equilibrium under the line-of-sight rule
///
/// # Errors
///
/// Returns an error if the layout is malformed
pub fn part2(input: &str) -> Result<usize> {
    Ok(settle(parse(input)?, Neighbourhood::Visible))
}
