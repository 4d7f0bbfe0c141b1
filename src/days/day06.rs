use crate::io::error::Result;
use crate::io::input::blocks;
use std::collections::HashSet;

fn answer_sets(input: &str) -> Vec<Vec<HashSet<char>>> {
    blocks(input)
        .iter()
        .map(|group| group.iter().map(|person| person.trim().chars().collect()).collect())
        .collect()
}

/// Sum over groups of the questions anyone answered
///
/// # Errors
///
/// Never fails; every input parses
pub fn part1(input: &str) -> Result<usize> {
    Ok(answer_sets(input)
        .iter()
        .map(|group| group.iter().flatten().collect::<HashSet<_>>().len())
        .sum())
}

/// Sum over groups of the questions everyone answered
///
/// # Errors
///
/// Never fails; every input parses
pub fn part2(input: &str) -> Result<usize> {
    Ok(answer_sets(input)
        .iter()
        .map(|group| {
            group
                .iter()
                .skip(1)
                .fold(group.first().cloned().unwrap_or_default(), |common, person| {
                    &common & person
                })
                .len()
        })
        .sum())
}
