//! Reading puzzle input and splitting it into lines, blocks and tokens

use crate::io::error::{PuzzleError, Result, malformed};
use std::path::Path;
use std::str::FromStr;

/// Read the whole input file as text
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid UTF-8
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PuzzleError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Iterate over the lines that carry content, with trailing whitespace removed
pub fn non_empty_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
}

/// Split input into groups of lines separated by blank lines
///
/// Leading, trailing and repeated blank lines never produce empty groups.
pub fn blocks(input: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for line in input.lines().map(str::trim_end) {
        if line.is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

/// Parse one token, naming what was being parsed on failure
///
/// # Errors
///
/// Returns an error if the trimmed token does not parse as `T`
pub fn parse_value<T: FromStr>(token: &str, context: &'static str) -> Result<T> {
    let token = token.trim();
    token
        .parse()
        .map_err(|_parse_error| malformed(context, &format!("cannot parse '{token}'")))
}

/// Parse every non-empty token between separators
///
/// # Errors
///
/// Returns an error if any token fails to parse
pub fn parse_separated<T: FromStr>(
    input: &str,
    separator: char,
    context: &'static str,
) -> Result<Vec<T>> {
    input
        .split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_value(token, context))
        .collect()
}

/// Parse one value per non-empty line
///
/// # Errors
///
/// Returns an error if any line fails to parse
pub fn parse_lines<T: FromStr>(input: &str, context: &'static str) -> Result<Vec<T>> {
    non_empty_lines(input)
        .map(|line| parse_value(line, context))
        .collect()
}
