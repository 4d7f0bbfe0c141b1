//! Tests for the door handshake

#[cfg(test)]
mod tests {
    use aoc2020::days::day25::{loop_size, part1, transform};

    // Tests loop sizes of the sample keys
    // Verified by counting from zero
    #[test]
    fn test_loop_size() {
        assert_eq!(loop_size(5_764_801), Some(8));
        assert_eq!(loop_size(17_807_724), Some(11));
        assert_eq!(transform(7, 8), 5_764_801);
    }

    // Tests both sides derive the same key
    // Verified by transforming the card key with the card loop
    #[test]
    fn test_encryption_key() {
        assert_eq!(part1("5764801\n17807724\n").unwrap(), 14_897_079);
        assert_eq!(transform(5_764_801, 11), 14_897_079);
    }

    // Tests malformed key lists
    // Verified by accepting a single key
    #[test]
    fn test_errors() {
        assert!(part1("5764801\n").is_err());
        assert!(part1("1\n2\n3\n").is_err());
        assert!(part1("a\nb\n").is_err());
    }
}
