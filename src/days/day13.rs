use crate::io::error::{Result, malformed, no_solution};
use crate::io::input::{non_empty_lines, parse_value};
use crate::math::modular::earliest_alignment;

/// Bus ids paired with their position in the schedule; `x` slots are skipped
///
/// # Errors
///
/// Returns an error if an entry is neither `x` nor a positive number
pub fn parse_schedule(schedule: &str) -> Result<Vec<(u64, u64)>> {
    schedule
        .trim()
        .split(',')
        .enumerate()
        .filter(|&(_, entry)| entry.trim() != "x")
        .map(|(position, entry)| {
            let bus: u64 = parse_value(entry, "bus id")?;
            if bus == 0 {
                return Err(malformed("bus id", &"bus 0 never departs"));
            }
            Ok((position as u64, bus))
        })
        .collect()
}

fn split_notes(input: &str) -> Result<(u64, &str)> {
    let mut lines = non_empty_lines(input);
    match (lines.next(), lines.next()) {
        (Some(earliest), Some(schedule)) => Ok((parse_value(earliest, "timestamp")?, schedule)),
        _ => Err(malformed("bus notes", &"expected a timestamp and a schedule")),
    }
}

/// Earliest timestamp where each bus leaves its position minutes after it
///
/// # Errors
///
/// Returns an error if the schedule is malformed or cannot be aligned
pub fn contest_timestamp(schedule: &str) -> Result<u64> {
    let constraints = parse_schedule(schedule)?;
    earliest_alignment(&constraints)
        .ok_or_else(|| no_solution("bus alignment", &"bus periods never align"))
}

/// Id of the first bus to leave after the timestamp, times the wait
///
/// # Errors
///
/// Returns an error if the notes are malformed or list no bus
pub fn part1(input: &str) -> Result<u64> {
    let (earliest, schedule) = split_notes(input)?;
    parse_schedule(schedule)?
        .into_iter()
        .map(|(_, bus)| (bus, (bus - earliest % bus) % bus))
        .min_by_key(|&(_, wait)| wait)
        .map(|(bus, wait)| bus * wait)
        .ok_or_else(|| no_solution("bus departures", &"no bus in service"))
}

/// Earliest timestamp matching the schedule offsets
///
/// # Errors
///
/// Returns an error if the notes are malformed or cannot be aligned
pub fn part2(input: &str) -> Result<u64> {
    let (_, schedule) = split_notes(input)?;
    contest_timestamp(schedule)
}
