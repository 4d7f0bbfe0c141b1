//! The daily solvers and the dispatch between them
//!
//! Every day parses its own input and exposes `part1` and, except the last
//! day, `part2`. [`solve`] runs both parts of one day.

use crate::analysis::patterns::Pattern;
use crate::io::configuration::{FIRST_DAY, LAST_DAY};
use crate::io::error::{PuzzleError, Result};
use crate::io::image::export_png;
use crate::io::progress::ProgressReporter;
use log::{info, warn};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Report repair
pub mod day01;
/// Password philosophy
pub mod day02;
/// Toboggan trajectory
pub mod day03;
/// Passport processing
pub mod day04;
/// Binary boarding
pub mod day05;
/// Custom customs
pub mod day06;
/// Handy haversacks
pub mod day07;
/// Handheld halting
pub mod day08;
/// Encoding error
pub mod day09;
/// Adapter array
pub mod day10;
/// Seating system
pub mod day11;
/// Rain risk
pub mod day12;
/// Shuttle search
pub mod day13;
/// Docking data
pub mod day14;
/// Rambunctious recitation
pub mod day15;
/// Ticket translation
pub mod day16;
/// Conway cubes
pub mod day17;
/// Operation order
pub mod day18;
/// Monster messages
pub mod day19;
/// Jurassic jigsaw
pub mod day20;
/// Allergen assessment
pub mod day21;
/// Crab combat
pub mod day22;
/// Crab cups
pub mod day23;
/// Lobby layout
pub mod day24;
/// Combo breaker
pub mod day25;

/// A puzzle day between `FIRST_DAY` and `LAST_DAY`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    /// Validate a day number
    ///
    /// # Errors
    ///
    /// Returns an error if the number is outside the puzzle calendar
    pub fn new(number: u8) -> Result<Self> {
        if (FIRST_DAY..=LAST_DAY).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PuzzleError::InvalidDay {
                value: number.to_string(),
            })
        }
    }

    /// Day number
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl FromStr for Day {
    type Err = PuzzleError;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = || PuzzleError::InvalidDay {
            value: value.to_string(),
        };
        let number = value.trim().parse::<u8>().map_err(|_parse_error| invalid())?;
        Self::new(number).map_err(|_range_error| invalid())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rendered answers of one day
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answers {
    /// Answer to the first part
    pub part1: String,
    /// Answer to the second part, absent on the last day
    pub part2: Option<String>,
}

impl Answers {
    /// Answers for a day with two parts
    pub fn new(part1: impl fmt::Display, part2: impl fmt::Display) -> Self {
        Self {
            part1: part1.to_string(),
            part2: Some(part2.to_string()),
        }
    }

    /// Answer for a day with one part
    pub fn single(part1: impl fmt::Display) -> Self {
        Self {
            part1: part1.to_string(),
            part2: None,
        }
    }
}

/// Runtime services a solver may use
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveContext<'a> {
    /// Progress bars for the long simulations
    pub progress: ProgressReporter,
    /// Where to save the stitched day-20 image, if anywhere
    pub export: Option<&'a Path>,
}

/// Solve both parts of one day
///
/// # Errors
///
/// Returns an error if the input is malformed for that day or has no answer
pub fn solve(day: Day, input: &str, context: &SolveContext<'_>) -> Result<Answers> {
    info!("solving day {day}");
    if context.export.is_some() && day.number() != 20 {
        warn!("image export only applies to day 20; ignoring it for day {day}");
    }

    let answers = match day.number() {
        1 => Answers::new(day01::part1(input)?, day01::part2(input)?),
        2 => Answers::new(day02::part1(input)?, day02::part2(input)?),
        3 => Answers::new(day03::part1(input)?, day03::part2(input)?),
        4 => Answers::new(day04::part1(input)?, day04::part2(input)?),
        5 => Answers::new(day05::part1(input)?, day05::part2(input)?),
        6 => Answers::new(day06::part1(input)?, day06::part2(input)?),
        7 => Answers::new(day07::part1(input)?, day07::part2(input)?),
        8 => Answers::new(day08::part1(input)?, day08::part2(input)?),
        9 => Answers::new(day09::part1(input)?, day09::part2(input)?),
        10 => Answers::new(day10::part1(input)?, day10::part2(input)?),
        11 => Answers::new(day11::part1(input)?, day11::part2(input)?),
        12 => Answers::new(day12::part1(input)?, day12::part2(input)?),
        13 => Answers::new(day13::part1(input)?, day13::part2(input)?),
        14 => Answers::new(day14::part1(input)?, day14::part2(input)?),
        15 => Answers::new(
            day15::part1(input)?,
            day15::part2(input, &context.progress)?,
        ),
        16 => Answers::new(day16::part1(input)?, day16::part2(input)?),
        17 => Answers::new(day17::part1(input)?, day17::part2(input)?),
        18 => Answers::new(day18::part1(input)?, day18::part2(input)?),
        19 => Answers::new(day19::part1(input)?, day19::part2(input)?),
        20 => solve_jigsaw(input, context.export)?,
        21 => Answers::new(day21::part1(input)?, day21::part2(input)?),
        22 => Answers::new(day22::part1(input)?, day22::part2(input)?),
        23 => Answers::new(
            day23::part1(input)?,
            day23::part2(input, &context.progress)?,
        ),
        24 => Answers::new(day24::part1(input)?, day24::part2(input)?),
        25 => Answers::single(day25::part1(input)?),
        _ => {
            return Err(PuzzleError::InvalidDay {
                value: day.to_string(),
            });
        }
    };

    Ok(answers)
}

fn solve_jigsaw(input: &str, export: Option<&Path>) -> Result<Answers> {
    let corner_product = day20::part1(input)?;
    let pattern = Pattern::sea_monster()?;
    let outcome = day20::search(input, &pattern)?;

    if let Some(path) = export {
        export_png(&outcome, &pattern, path)?;
    }

    Ok(Answers::new(corner_product, outcome.roughness(&pattern)))
}
