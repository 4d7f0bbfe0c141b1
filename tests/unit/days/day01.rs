//! Tests for the expense report

#[cfg(test)]
mod tests {
    use aoc2020::PuzzleError;
    use aoc2020::days::day01::{entry_product, part1, part2};

    const SAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    // Tests the sample pair and triple
    // Verified by summing to a different target
    #[test]
    fn test_sample() {
        assert_eq!(part1(SAMPLE).unwrap(), 514_579);
        assert_eq!(part2(SAMPLE).unwrap(), 241_861_950);
    }

    // Tests an entry cannot pair with itself
    // Verified by drawing combinations with replacement
    #[test]
    fn test_distinct_positions() {
        assert!(entry_product(&[1010, 1, 2], 2).is_err());
        assert_eq!(entry_product(&[1010, 1010], 2).unwrap(), 1_020_100);
    }

    // Tests missing answers and malformed lines
    // Verified by returning zero when nothing sums to the target
    #[test]
    fn test_errors() {
        assert!(matches!(part1("1\n2\n3\n"), Err(PuzzleError::NoSolution { .. })));
        assert!(matches!(part1("1721\nabc\n"), Err(PuzzleError::MalformedInput { .. })));
    }
}
