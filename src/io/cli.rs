//! Command-line interface for running one day's solver on an input file

use crate::days::{Answers, Day, SolveContext, solve};
use crate::io::configuration::{FIRST_DAY, LAST_DAY};
use crate::io::error::Result;
use crate::io::input::read_input;
use crate::io::logging::level_filter;
use crate::io::progress::ProgressReporter;
use clap::{ArgAction, Parser};
use log::info;
use simplelog::LevelFilter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "aoc2020")]
#[command(author, version, about = "Solve an Advent of Code 2020 puzzle")]
/// Command-line arguments for the puzzle runner
pub struct Cli {
    /// Puzzle day to solve (1-25)
    #[arg(value_name = "DAY", value_parser = parse_day)]
    pub day: Day,

    /// Puzzle input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Suppress logging and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Save the stitched day-20 image as a PNG
    #[arg(short, long, value_name = "PNG")]
    pub export: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the flags
    pub const fn log_level(&self) -> LevelFilter {
        level_filter(self.quiet, self.verbose)
    }
}

/// Parse the day argument
///
/// # Errors
///
/// Returns a message naming the accepted range if the value is not a day
pub fn parse_day(value: &str) -> std::result::Result<Day, String> {
    value
        .parse()
        .map_err(|e| format!("{e}; expected a number from {FIRST_DAY} to {LAST_DAY}"))
}

/// Reads the input, runs the chosen solver and prints its answers
pub struct Runner {
    cli: Cli,
    progress: ProgressReporter,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        let progress = ProgressReporter::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Solve the selected day without printing
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the solver fails
    pub fn answers(&self) -> Result<Answers> {
        let input = read_input(&self.cli.input)?;
        let context = SolveContext {
            progress: self.progress,
            export: self.cli.export.as_deref(),
        };

        let start = Instant::now();
        let answers = solve(self.cli.day, &input, &context)?;
        info!("day {} solved in {:.2?}", self.cli.day, start.elapsed());
        Ok(answers)
    }

    /// Solve the selected day and print `Part 1:` / `Part 2:` lines
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the solver fails
    pub fn run(&self) -> Result<()> {
        let answers = self.answers()?;
        print_answers(&answers);
        Ok(())
    }
}

#[allow(clippy::print_stdout)]
fn print_answers(answers: &Answers) {
    println!("Part 1: {}", answers.part1);
    if let Some(part2) = &answers.part2 {
        println!("Part 2: {part2}");
    }
}
