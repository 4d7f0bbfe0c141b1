//! CLI entry point for the Advent of Code 2020 solvers

use aoc2020::io::cli::{Cli, Runner};
use aoc2020::io::logging;
use clap::Parser;

fn main() -> aoc2020::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level())?;
    Runner::new(cli).run()
}
