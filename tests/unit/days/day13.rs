//! Tests for the shuttle schedule

#[cfg(test)]
mod tests {
    use aoc2020::days::day13::{contest_timestamp, parse_schedule, part1, part2};

    const SAMPLE: &str = "939\n7,13,x,x,59,x,31,19\n";

    // Tests schedule parsing keeps positions of skipped slots
    // Verified by renumbering after skipping
    #[test]
    fn test_parse_schedule() {
        assert_eq!(
            parse_schedule("7,13,x,x,59").unwrap(),
            vec![(0, 7), (1, 13), (4, 59)]
        );
        assert!(parse_schedule("7,0").is_err());
        assert!(parse_schedule("7,y").is_err());
    }

    // Tests both parts on the sample notes
    // Verified by waiting from zero instead of the timestamp
    #[test]
    fn test_sample() {
        assert_eq!(part1(SAMPLE).unwrap(), 295);
        assert_eq!(part2(SAMPLE).unwrap(), 1_068_781);
        assert!(part1("939\n").is_err());
    }

    // Tests the other published schedules
    // Verified by stepping by the first period only
    #[test]
    fn test_contest_timestamps() {
        assert_eq!(contest_timestamp("17,x,13,19").unwrap(), 3417);
        assert_eq!(contest_timestamp("67,7,59,61").unwrap(), 754_018);
        assert_eq!(contest_timestamp("67,x,7,59,61").unwrap(), 779_210);
        assert_eq!(contest_timestamp("67,7,x,59,61").unwrap(), 1_261_476);
        assert_eq!(contest_timestamp("1789,37,47,1889").unwrap(), 1_202_161_486);
    }
}
