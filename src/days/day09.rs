use crate::io::configuration::XMAS_PREAMBLE;
use crate::io::error::{Result, no_solution};
use crate::io::input::parse_lines;
use itertools::Itertools;

/// First number that is not a sum of two different numbers among the `preamble` before it
pub fn first_invalid(numbers: &[u64], preamble: usize) -> Option<u64> {
    numbers.windows(preamble + 1).find_map(|window| {
        let (&candidate, previous) = window.split_last()?;
        let valid = previous
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a != b && a + b == candidate);
        (!valid).then_some(candidate)
    })
}

/// Sum of the smallest and largest number of a contiguous run of at least
/// two numbers adding up to `target`
pub fn weakness(numbers: &[u64], target: u64) -> Option<u64> {
    let mut start = 0;
    let mut sum = 0;

    for (end, &number) in numbers.iter().enumerate() {
        sum += number;
        while sum > target && start < end {
            sum -= numbers.get(start).copied().unwrap_or_default();
            start += 1;
        }
        if sum == target && end > start {
            let run = numbers.get(start..=end)?;
            return Some(run.iter().min()? + run.iter().max()?);
        }
    }
    None
}

/// Part 1 with a custom preamble length
///
/// # Errors
///
/// Returns an error if the input is not numeric or every number is valid
pub fn invalid_number(input: &str, preamble: usize) -> Result<u64> {
    first_invalid(&parse_lines(input, "XMAS number")?, preamble)
        .ok_or_else(|| no_solution("XMAS check", &"every number is a valid sum"))
}

/// Part 2 with a custom preamble length
///
/// # Errors
///
/// Returns an error if the input is not numeric or no run fits
pub fn encryption_weakness(input: &str, preamble: usize) -> Result<u64> {
    let numbers = parse_lines(input, "XMAS number")?;
    let target = first_invalid(&numbers, preamble)
        .ok_or_else(|| no_solution("XMAS check", &"every number is a valid sum"))?;
    weakness(&numbers, target)
        .ok_or_else(|| no_solution("XMAS weakness", &format!("no run sums to {target}")))
}

/// First invalid number with the standard preamble
///
/// # Errors
///
/// Returns an error if the input is not numeric or every number is valid
pub fn part1(input: &str) -> Result<u64> {
    invalid_number(input, XMAS_PREAMBLE)
}

/// Encryption weakness with the standard preamble
///
/// # Errors
///
/// Returns an error if the input is not numeric or no run fits
pub fn part2(input: &str) -> Result<u64> {
    encryption_weakness(input, XMAS_PREAMBLE)
}
