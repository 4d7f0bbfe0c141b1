use crate::io::configuration::EXPENSE_TARGET;
use crate::io::error::{Result, no_solution};
use crate::io::input::parse_lines;
use itertools::Itertools;

/// Product of the `size` entries, at distinct positions, that sum to the target
///
/// # Errors
///
/// Returns an error if no combination reaches the target
pub fn entry_product(entries: &[u64], size: usize) -> Result<u64> {
    entries
        .iter()
        .combinations(size)
        .find(|combination| combination.iter().copied().sum::<u64>() == EXPENSE_TARGET)
        .map(|combination| combination.into_iter().product())
        .ok_or_else(|| {
            no_solution(
                "expense report",
                &format!("no {size} entries sum to {EXPENSE_TARGET}"),
            )
        })
}

/// Product of the two entries summing to the target
///
/// # Errors
///
/// Returns an error if the input is not one integer per line or no pair fits
pub fn part1(input: &str) -> Result<u64> {
    entry_product(&parse_lines(input, "expense entry")?, 2)
}

/// Product of the three entries summing to the target
///
/// # Errors
///
/// Returns an error if the input is not one integer per line or no triple fits
pub fn part2(input: &str) -> Result<u64> {
    entry_product(&parse_lines(input, "expense entry")?, 3)
}
