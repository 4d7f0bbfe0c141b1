//! Tests for the docking program

#[cfg(test)]
mod tests {
    use aoc2020::days::day14::{Command, Mask, parse, part1, part2};

    const VALUE_MASKS: &str = "\
mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
mem[8] = 11
mem[7] = 101
mem[8] = 0
";

    const ADDRESS_MASKS: &str = "\
mask = 000000000000000000000000000000X1001X
mem[42] = 100
mask = 00000000000000000000000000000000X0XX
mem[26] = 1
";

    // Tests mask parsing into bit sets
    // Verified by reading the mask least significant bit first
    #[test]
    fn test_mask_parse() {
        let mask = Mask::parse("000000000000000000000000000000X1001X").unwrap();
        assert_eq!(mask.ones, 0b10010);
        assert_eq!(mask.floating, 0b100001);
        assert_eq!(mask.apply_to_value(0b111111), 0b10010 | 0b100001);
        assert!(Mask::parse("X1").is_err());
        assert!(Mask::parse(&"2".repeat(36)).is_err());
    }

    // Tests floating bits enumerate every address
    // Verified by skipping the empty subset
    #[test]
    fn test_addresses() {
        let mask = Mask::parse("000000000000000000000000000000X1001X").unwrap();
        let mut addresses = mask.addresses(42);
        addresses.sort_unstable();
        assert_eq!(addresses, vec![26, 27, 58, 59]);
    }

    // Tests both decoders on the samples
    // Verified by applying the mask only once
    #[test]
    fn test_sample() {
        assert_eq!(part1(VALUE_MASKS).unwrap(), 165);
        assert_eq!(part2(ADDRESS_MASKS).unwrap(), 208);
    }

    // Tests program parsing and writes before a mask
    // Verified by defaulting to an all-X mask
    #[test]
    fn test_program_errors() {
        assert_eq!(
            parse("mem[3] = 4\n").unwrap(),
            vec![Command::Write { address: 3, value: 4 }]
        );
        assert!(part1("mem[3] = 4\n").is_err());
        assert!(parse("mem[x] = 4\n").is_err());
    }
}
