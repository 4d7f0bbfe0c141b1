use crate::io::configuration::{BOOT_CYCLES, FOREGROUND};
use crate::io::error::Result;
use crate::io::input::non_empty_lines;
use std::collections::{HashMap, HashSet};

/// Active cells of a `D`-dimensional pocket dimension
pub type Cubes<const D: usize> = HashSet<[i64; D]>;

/// Embed the `#` cells of a 2-D slice into `D` dimensions
pub fn parse<const D: usize>(input: &str) -> Cubes<D> {
    non_empty_lines(input)
        .enumerate()
        .flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| c == FOREGROUND)
                .map(move |(x, _)| {
                    std::array::from_fn::<i64, D, _>(|axis| match axis {
                        0 => x as i64,
                        1 => y as i64,
                        _ => 0,
                    })
                })
        })
        .collect()
}

/// Offsets to every neighbour of a cell, excluding the cell itself
pub fn neighbour_offsets<const D: usize>() -> Vec<[i64; D]> {
    let count = 3_usize.pow(D as u32);
    (0..count)
        .map(|code| {
            let mut remaining = code;
            std::array::from_fn::<i64, D, _>(|_| {
                let digit = (remaining % 3) as i64 - 1;
                remaining /= 3;
                digit
            })
        })
        .filter(|offset| offset.iter().any(|&delta| delta != 0))
        .collect()
}

/// One boot cycle: active cells stay with 2 or 3 active neighbours, inactive
/// cells wake with exactly 3
pub fn cycle<const D: usize>(active: &Cubes<D>, offsets: &[[i64; D]]) -> Cubes<D> {
    let mut counts: HashMap<[i64; D], usize> = HashMap::new();
    for cell in active {
        for offset in offsets {
            let neighbour = std::array::from_fn::<i64, D, _>(|axis| {
                cell.get(axis).copied().unwrap_or_default()
                    + offset.get(axis).copied().unwrap_or_default()
            });
            *counts.entry(neighbour).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(cell, count)| *count == 3 || (*count == 2 && active.contains(cell)))
        .map(|(cell, _)| cell)
        .collect()
}

/// Active cells after `cycles` boot cycles
pub fn simulate<const D: usize>(initial: Cubes<D>, cycles: usize) -> usize {
    let offsets = neighbour_offsets::<D>();
    (0..cycles)
        .fold(initial, |active, _| cycle(&active, &offsets))
        .len()
}

/// Active cubes after the boot process in three dimensions
///
/// # Errors
///
/// Never fails; characters other than `#` are inactive
pub fn part1(input: &str) -> Result<usize> {
    Ok(simulate(parse::<3>(input), BOOT_CYCLES))
}

/// Active cubes after the boot process in four dimensions
///
/// # Errors
///
/// Never fails; characters other than `#` are inactive
pub fn part2(input: &str) -> Result<usize> {
    Ok(simulate(parse::<4>(input), BOOT_CYCLES))
}
