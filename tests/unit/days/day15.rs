//! Tests for the memory game

#[cfg(test)]
mod tests {
    use aoc2020::days::day15::{part1, part2, spoken_on};
    use aoc2020::io::progress::{ProgressReporter, TaskProgress};

    // Tests the first turns of the sample game
    // Verified by recording a turn before reading it
    #[test]
    fn test_early_turns() {
        let hidden = TaskProgress::hidden();
        let spoken: Vec<usize> = (1..=10).map(|turn| spoken_on(&[0, 3, 6], turn, &hidden).unwrap()).collect();
        assert_eq!(spoken, vec![0, 3, 6, 0, 3, 3, 1, 0, 4, 0]);
    }

    // Tests the 2020th number for published seeds
    // Verified by starting the age count at zero
    #[test]
    fn test_part1() {
        assert_eq!(part1("0,3,6").unwrap(), 436);
        assert_eq!(part1("1,3,2").unwrap(), 1);
        assert_eq!(part1("2,1,3").unwrap(), 10);
        assert_eq!(part1("3,1,2\n").unwrap(), 1836);
    }

    // Tests the long game on the sample seed
    // Verified by shrinking the table below the turn count
    #[test]
    fn test_part2() {
        assert_eq!(part2("0,3,6", &ProgressReporter::hidden()).unwrap(), 175_594);
    }

    // Tests degenerate requests
    // Verified by answering turn zero with the first seed
    #[test]
    fn test_errors() {
        let hidden = TaskProgress::hidden();
        assert!(spoken_on(&[], 5, &hidden).is_err());
        assert!(spoken_on(&[1, 2], 0, &hidden).is_err());
        assert!(part1("").is_err());
    }
}
