use crate::io::configuration::MAX_JOLT_STEP;
use crate::io::error::{Result, no_solution};
use crate::io::input::parse_lines;
use itertools::Itertools;

/// Outlet, sorted adapters and the device
///
/// # Errors
///
/// Returns an error if the input is not numeric
pub fn chain(input: &str) -> Result<Vec<u64>> {
    let mut joltages: Vec<u64> = parse_lines(input, "adapter")?;
    joltages.push(0);
    joltages.sort_unstable();
    let device = joltages.last().copied().unwrap_or_default() + MAX_JOLT_STEP;
    joltages.push(device);
    Ok(joltages)
}

/// 1-jolt differences times 3-jolt differences across the full chain
///
/// # Errors
///
/// Returns an error if the input is not numeric or some gap is too wide
pub fn part1(input: &str) -> Result<usize> {
    let steps = chain(input)?
        .into_iter()
        .tuple_windows()
        .map(|(low, high)| high - low)
        .collect::<Vec<_>>();
    if steps.iter().any(|&step| step > MAX_JOLT_STEP) {
        return Err(no_solution("adapter chain", &"a gap exceeds the jolt limit"));
    }
    let ones = steps.iter().filter(|&&step| step == 1).count();
    let threes = steps.iter().filter(|&&step| step == 3).count();
    Ok(ones * threes)
}

/// Distinct adapter arrangements that connect outlet to device
///
/// # Errors
///
/// Returns an error if the input is not numeric
pub fn part2(input: &str) -> Result<u64> {
    let joltages = chain(input)?;
    let mut ways: Vec<u64> = Vec::with_capacity(joltages.len());

    for (index, &joltage) in joltages.iter().enumerate() {
        let reachable: u64 = joltages
            .iter()
            .zip(&ways)
            .take(index)
            .filter(|&(&earlier, _)| joltage - earlier <= MAX_JOLT_STEP)
            .map(|(_, &count)| count)
            .sum();
        ways.push(if index == 0 { 1 } else { reachable });
    }

    Ok(ways.last().copied().unwrap_or_default())
}
