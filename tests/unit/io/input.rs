//! Tests for input reading and splitting helpers

#[cfg(test)]
mod tests {
    use aoc2020::PuzzleError;
    use aoc2020::io::input::{
        blocks, non_empty_lines, parse_lines, parse_separated, parse_value, read_input,
    };
    use std::io::Write;

    // Tests blank lines separate blocks and never produce empty ones
    // Verified by pushing the group on every blank line
    #[test]
    fn test_blocks() {
        let input = "\n\na\nb\n\n\n\nc\n  \nd\n\n";
        assert_eq!(blocks(input), vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
        assert!(blocks("").is_empty());
    }

    // Tests blank and whitespace-only lines are skipped
    // Verified by dropping the trim
    #[test]
    fn test_non_empty_lines() {
        let lines: Vec<&str> = non_empty_lines("x  \n\n \ny\r\n").collect();
        assert_eq!(lines, vec!["x", "y"]);
    }

    // Tests token parsing and its error context
    // Verified by parsing without trimming
    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u32>(" 42 ", "number").unwrap(), 42);
        let error = parse_value::<u32>("4x", "number").unwrap_err();
        assert!(matches!(error, PuzzleError::MalformedInput { context: "number", .. }));
        assert!(error.to_string().contains("'4x'"));
    }

    // Tests separated and line-based parsing
    // Verified by keeping empty tokens
    #[test]
    fn test_parse_collections() {
        assert_eq!(parse_separated::<u8>("3,8,,9\n", ',', "seed").unwrap(), vec![3, 8, 9]);
        assert_eq!(parse_lines::<i64>("1\n-2\n\n3\n", "line").unwrap(), vec![1, -2, 3]);
        assert!(parse_lines::<i64>("1\nx\n", "line").is_err());
    }

    // Tests reading a file and reporting a missing one
    // Verified by swallowing the I/O error
    #[test]
    fn test_read_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Tile 1:\n#.\n.#\n").unwrap();
        assert_eq!(read_input(file.path()).unwrap(), "Tile 1:\n#.\n.#\n");

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_input(&dir.path().join("missing")),
            Err(PuzzleError::InputRead { .. })
        ));
    }
}
