//! Tests for the seating simulation

#[cfg(test)]
mod tests {
    use aoc2020::days::day11::{Neighbourhood, Seat, parse, part1, part2, settle, step};

    const SAMPLE: &str = "\
L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL
";

    // Tests layout parsing
    // Verified by reading rows as columns
    #[test]
    fn test_parse() {
        let layout = parse(SAMPLE).unwrap();
        assert_eq!(layout.dim(), (10, 10));
        assert_eq!(layout[(0, 1)], Seat::Floor);
        assert_eq!(parse("#L").unwrap()[(0, 0)], Seat::Occupied);
        assert!(parse("L.\nL\n").is_err());
        assert!(parse("LX\n").is_err());
    }

    // Tests the first round fills every seat
    // Verified by updating seats in place
    #[test]
    fn test_first_round() {
        let layout = parse(SAMPLE).unwrap();
        let next = step(&layout, Neighbourhood::Adjacent).unwrap();
        let seats = layout.iter().filter(|&&seat| seat != Seat::Floor).count();
        assert_eq!(next.iter().filter(|&&seat| seat == Seat::Occupied).count(), seats);
    }

    // Tests both equilibria on the sample
    // Verified by using the adjacency tolerance for line of sight
    #[test]
    fn test_sample() {
        assert_eq!(part1(SAMPLE).unwrap(), 37);
        assert_eq!(part2(SAMPLE).unwrap(), 26);
    }

    // Tests a stable layout settles immediately
    // Verified by always reporting a change
    #[test]
    fn test_stable() {
        let layout = parse("#.#\n...\n#.#\n").unwrap();
        assert!(step(&layout, Neighbourhood::Adjacent).is_none());
        assert_eq!(settle(layout, Neighbourhood::Visible), 4);
    }
}
