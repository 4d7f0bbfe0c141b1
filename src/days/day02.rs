use crate::io::error::{Result, malformed};
use crate::io::input::{non_empty_lines, parse_value};
use regex::Regex;

/// One line of the password database
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// First number of the policy
    pub low: usize,
    /// Second number of the policy
    pub high: usize,
    /// Letter the policy is about
    pub letter: char,
    /// Password the policy applies to
    pub password: String,
}

impl Entry {
    /// Letter count lies between the two numbers, inclusive
    pub fn is_valid_by_count(&self) -> bool {
        let count = self.password.chars().filter(|&c| c == self.letter).count();
        (self.low..=self.high).contains(&count)
    }

    /// Exactly one of the two 1-based positions holds the letter
    pub fn is_valid_by_position(&self) -> bool {
        let holds = |position: usize| {
            position
                .checked_sub(1)
                .and_then(|index| self.password.chars().nth(index))
                == Some(self.letter)
        };
        holds(self.low) != holds(self.high)
    }
}

/// Parse `lo-hi c: password` lines
///
/// # Errors
///
/// Returns an error if a line does not follow the policy format
pub fn parse(input: &str) -> Result<Vec<Entry>> {
    let line_format = Regex::new(r"^(\d+)-(\d+) (\S): (\S*)$")?;
    non_empty_lines(input)
        .map(|line| {
            let captures = line_format
                .captures(line.trim())
                .ok_or_else(|| malformed("password entry", &format!("'{line}'")))?;
            let field = |index| captures.get(index).map_or("", |m| m.as_str());
            Ok(Entry {
                low: parse_value(field(1), "policy bound")?,
                high: parse_value(field(2), "policy bound")?,
                letter: parse_value(field(3), "policy letter")?,
                password: field(4).to_string(),
            })
        })
        .collect()
}

/// Passwords whose letter count fits the policy
///
/// # Errors
///
/// Returns an error if the input is malformed
pub fn part1(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .iter()
        .filter(|entry| entry.is_valid_by_count())
        .count())
}

/// Passwords with the letter at exactly one policy position
///
/// # Errors
///
/// Returns an error if the input is malformed
pub fn part2(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .iter()
        .filter(|entry| entry.is_valid_by_position())
        .count())
}
