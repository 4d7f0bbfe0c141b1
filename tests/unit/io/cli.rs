//! Tests for command-line parsing and the solve runner

#[cfg(test)]
mod tests {
    use aoc2020::PuzzleError;
    use aoc2020::days::{Answers, Day};
    use aoc2020::io::cli::{Cli, Runner, parse_day};
    use clap::Parser;
    use simplelog::LevelFilter;
    use std::io::Write;
    use std::path::PathBuf;

    const EXPENSES: &str = "1721\n979\n366\n299\n675\n1456\n";

    // Tests CLI parsing with only the required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["aoc2020", "20", "input.txt"]);

        assert_eq!(cli.day, Day::new(20).unwrap());
        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert!(cli.export.is_none());
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    // Tests CLI parsing with every flag
    // Verified by dropping the count action on verbose
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "aoc2020",
            "20",
            "input.txt",
            "-vv",
            "--export",
            "out/monsters.png",
        ]);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.export, Some(PathBuf::from("out/monsters.png")));
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        assert!(cli.should_show_progress());
    }

    // Tests quiet silences logging and progress
    // Verified by inverting quiet flag logic
    #[test]
    fn test_quiet() {
        let cli = Cli::parse_from(["aoc2020", "1", "input.txt", "--quiet", "-v"]);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Off);
    }

    // Tests day arguments outside the calendar are rejected by the parser
    // Verified by accepting any u8
    #[test]
    fn test_rejects_bad_day() {
        assert!(Cli::try_parse_from(["aoc2020", "26", "input.txt"]).is_err());
        assert!(Cli::try_parse_from(["aoc2020", "zero", "input.txt"]).is_err());
        assert!(Cli::try_parse_from(["aoc2020", "5"]).is_err());

        assert_eq!(parse_day("7").unwrap().number(), 7);
        let message = parse_day("0").unwrap_err();
        assert!(message.contains("1 to 25"));
    }

    // Tests the runner reads the file and solves the selected day
    // Verified by solving a hard-coded day
    #[test]
    fn test_runner_answers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXPENSES.as_bytes()).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let cli = Cli::parse_from(["aoc2020", "1", path.as_str(), "--quiet"]);
        let answers = Runner::new(cli).answers().unwrap();
        assert_eq!(answers, Answers::new(514_579, 241_861_950));
    }

    // Tests a missing input file surfaces as a read error
    // Verified by returning empty input on failure
    #[test]
    fn test_runner_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let path = path.to_string_lossy().into_owned();

        let cli = Cli::parse_from(["aoc2020", "1", path.as_str(), "--quiet"]);
        assert!(matches!(
            Runner::new(cli).run(),
            Err(PuzzleError::InputRead { .. })
        ));
    }
}
