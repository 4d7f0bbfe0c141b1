use crate::io::error::{Result, malformed, no_solution};
use crate::io::input::non_empty_lines;
use itertools::Itertools;

/// Characters in a boarding pass code
pub const CODE_LENGTH: usize = 10;

/// Seat id of a boarding pass: `F`/`L` are 0 bits, `B`/`R` are 1 bits
///
/// # Errors
///
/// Returns an error if the code has the wrong length or other characters
pub fn seat_id(code: &str) -> Result<u32> {
    let code = code.trim();
    if code.chars().count() != CODE_LENGTH {
        return Err(malformed("boarding pass", &format!("'{code}' is not 10 characters")));
    }
    code.chars().try_fold(0, |id, c| match c {
        'F' | 'L' => Ok(id << 1),
        'B' | 'R' => Ok(id << 1 | 1),
        other => Err(malformed("boarding pass", &format!("unexpected '{other}'"))),
    })
}

/// Every seat id, sorted ascending
///
/// # Errors
///
/// Returns an error if any code is malformed
pub fn seat_ids(input: &str) -> Result<Vec<u32>> {
    let mut ids = non_empty_lines(input).map(seat_id).collect::<Result<Vec<_>>>()?;
    ids.sort_unstable();
    Ok(ids)
}

/// Highest seat id
///
/// # Errors
///
/// Returns an error if a code is malformed or there are none
pub fn part1(input: &str) -> Result<u32> {
    seat_ids(input)?
        .last()
        .copied()
        .ok_or_else(|| no_solution("boarding passes", &"no boarding passes"))
}

/// The missing seat between two occupied ones
///
/// # Errors
///
/// Returns an error if a code is malformed or the ids have no gap
pub fn part2(input: &str) -> Result<u32> {
    seat_ids(input)?
        .into_iter()
        .tuple_windows()
        .find(|&(seat, next)| next != seat + 1)
        .map(|(seat, _)| seat + 1)
        .ok_or_else(|| no_solution("boarding passes", &"no gap in the seat ids"))
}
