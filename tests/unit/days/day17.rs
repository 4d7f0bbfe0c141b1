//! Tests for the Conway cube simulation

#[cfg(test)]
mod tests {
    use aoc2020::days::day17::{cycle, neighbour_offsets, parse, part1, part2, simulate};

    const SAMPLE: &str = ".#.\n..#\n###\n";

    // Tests neighbour counts per dimension
    // Verified by keeping the zero offset
    #[test]
    fn test_neighbour_offsets() {
        assert_eq!(neighbour_offsets::<2>().len(), 8);
        assert_eq!(neighbour_offsets::<3>().len(), 26);
        assert_eq!(neighbour_offsets::<4>().len(), 80);
    }

    // Tests the slice embeds at the origin of the extra axes
    // Verified by swapping x and y
    #[test]
    fn test_parse() {
        let cubes = parse::<3>(SAMPLE);
        assert_eq!(cubes.len(), 5);
        assert!(cubes.contains(&[1, 0, 0]));
        assert!(cubes.contains(&[2, 1, 0]));
        assert!(parse::<4>(SAMPLE).contains(&[0, 2, 0, 0]));
    }

    // Tests the first cycle and the full boot
    // Verified by waking cells with two neighbours
    #[test]
    fn test_sample() {
        let offsets = neighbour_offsets::<3>();
        assert_eq!(cycle(&parse::<3>(SAMPLE), &offsets).len(), 11);
        assert_eq!(simulate(parse::<3>(SAMPLE), 3), 38);
        assert_eq!(part1(SAMPLE).unwrap(), 112);
        assert_eq!(part2(SAMPLE).unwrap(), 848);
    }
}
