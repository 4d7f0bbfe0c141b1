use crate::io::configuration::{RECITATION_LONG, RECITATION_SHORT};
use crate::io::error::{Result, malformed};
use crate::io::input::parse_separated;
use crate::io::progress::{ProgressReporter, TaskProgress};

/// Number spoken on `turn` (1-based) of the memory game
///
/// # Errors
///
/// Returns an error if there are no starting numbers
pub fn spoken_on(seeds: &[usize], turn: usize, progress: &TaskProgress) -> Result<usize> {
    let Some((&first_unspoken, spoken)) = seeds.split_last() else {
        return Err(malformed("starting numbers", &"no starting numbers"));
    };
    if turn <= seeds.len() {
        return turn
            .checked_sub(1)
            .and_then(|index| seeds.get(index))
            .copied()
            .ok_or_else(|| malformed("starting numbers", &"turn 0 does not exist"));
    }

    // last_turn[n] is the 1-based turn n was last spoken, 0 if never
    let size = turn.max(seeds.iter().copied().max().unwrap_or_default() + 1);
    let mut last_turn = vec![0_u32; size];
    for (index, &number) in spoken.iter().enumerate() {
        if let Some(slot) = last_turn.get_mut(number) {
            *slot = index as u32 + 1;
        }
    }

    let mut current = first_unspoken;
    for now in seeds.len()..turn {
        let Some(slot) = last_turn.get_mut(current) else {
            return Err(malformed("starting numbers", &"number outside the game table"));
        };
        let previous = *slot as usize;
        *slot = now as u32;
        current = if previous == 0 { 0 } else { now - previous };
        progress.advance(now);
    }
    Ok(current)
}

fn seeds(input: &str) -> Result<Vec<usize>> {
    parse_separated(input, ',', "starting number")
}

/// The 2020th number spoken
///
/// # Errors
///
/// Returns an error if the starting numbers are malformed
pub fn part1(input: &str) -> Result<usize> {
    spoken_on(&seeds(input)?, RECITATION_SHORT, &TaskProgress::hidden())
}

/// The 30,000,000th number spoken
///
/// # Errors
///
/// Returns an error if the starting numbers are malformed
pub fn part2(input: &str, reporter: &ProgressReporter) -> Result<usize> {
    let progress = reporter.start("recitation", RECITATION_LONG);
    let spoken = spoken_on(&seeds(input)?, RECITATION_LONG, &progress);
    progress.finish();
    spoken
}
