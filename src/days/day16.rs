use crate::algorithm::elimination::resolve_unique;
use crate::io::error::{Result, malformed, no_solution};
use crate::io::input::{blocks, parse_separated, parse_value};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// Prefix of the fields multiplied together in part 2
pub const DEPARTURE_PREFIX: &str = "departure";

/// A ticket field and its two accepted ranges
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Field name
    pub name: String,
    /// Accepted value ranges
    pub ranges: [RangeInclusive<u64>; 2],
}

impl Rule {
    /// Check if a value lies in either range
    pub fn accepts(&self, value: u64) -> bool {
        self.ranges.iter().any(|range| range.contains(&value))
    }
}

/// Rules, your ticket and the nearby tickets
#[derive(Clone, Debug)]
pub struct Notes {
    /// Field rules
    pub rules: Vec<Rule>,
    /// Values of your own ticket
    pub yours: Vec<u64>,
    /// Values of every nearby ticket
    pub nearby: Vec<Vec<u64>>,
}

impl Notes {
    /// Parse the three blank-line separated sections
    ///
    /// # Errors
    ///
    /// Returns an error if a section is missing or a line is malformed
    pub fn parse(input: &str) -> Result<Self> {
        let sections = blocks(input);
        let [rule_lines, your_lines, nearby_lines] = sections.as_slice() else {
            return Err(malformed("ticket notes", &"expected three sections"));
        };

        let rule_format = Regex::new(r"^([^:]+): (\d+)-(\d+) or (\d+)-(\d+)$")?;
        let rules = rule_lines
            .iter()
            .map(|line| {
                let captures = rule_format
                    .captures(line.trim())
                    .ok_or_else(|| malformed("ticket rule", &format!("'{line}'")))?;
                let field = |index| captures.get(index).map_or("", |m| m.as_str());
                let bound = |index| parse_value::<u64>(field(index), "rule bound");
                Ok(Rule {
                    name: field(1).to_string(),
                    ranges: [bound(2)?..=bound(3)?, bound(4)?..=bound(5)?],
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let tickets = |lines: &[&str], header: &str| -> Result<Vec<Vec<u64>>> {
            let (first, values) = lines
                .split_first()
                .ok_or_else(|| malformed("ticket notes", &"empty ticket section"))?;
            if first.trim() != header {
                return Err(malformed("ticket notes", &format!("expected '{header}'")));
            }
            values
                .iter()
                .map(|line| parse_separated(line, ',', "ticket value"))
                .collect()
        };

        let yours = tickets(your_lines.as_slice(), "your ticket:")?
            .into_iter()
            .next()
            .ok_or_else(|| malformed("ticket notes", &"your ticket is missing"))?;
        let nearby = tickets(nearby_lines.as_slice(), "nearby tickets:")?;
        Ok(Self {
            rules,
            yours,
            nearby,
        })
    }

    fn fits_some_rule(&self, value: u64) -> bool {
        self.rules.iter().any(|rule| rule.accepts(value))
    }

    /// Sum of nearby values that no rule accepts
    pub fn error_rate(&self) -> u64 {
        self.nearby
            .iter()
            .flatten()
            .filter(|&&value| !self.fits_some_rule(value))
            .sum()
    }

    /// Position of each field, deduced from the valid nearby tickets
    ///
    /// # Errors
    ///
    /// Returns an error if the positions cannot be pinned down uniquely
    pub fn field_positions(&self) -> Result<BTreeMap<String, usize>> {
        let valid: Vec<&Vec<u64>> = self
            .nearby
            .iter()
            .filter(|ticket| ticket.iter().all(|&value| self.fits_some_rule(value)))
            .collect();

        let candidates = self
            .rules
            .iter()
            .map(|rule| {
                let positions = (0..self.yours.len())
                    .filter(|&position| {
                        valid.iter().all(|ticket| {
                            ticket.get(position).is_some_and(|&value| rule.accepts(value))
                        })
                    })
                    .collect::<BTreeSet<_>>();
                (rule.name.clone(), positions)
            })
            .collect();

        resolve_unique(candidates).ok_or_else(|| {
            no_solution("field resolution", &"field positions are ambiguous")
        })
    }
}

/// Ticket scanning error rate
///
/// # Errors
///
/// Returns an error if the notes are malformed
pub fn part1(input: &str) -> Result<u64> {
    Ok(Notes::parse(input)?.error_rate())
}

/// Product of your ticket's departure fields
///
/// # Errors
///
/// Returns an error if the notes are malformed or fields cannot be resolved
pub fn part2(input: &str) -> Result<u64> {
    let notes = Notes::parse(input)?;
    let positions = notes.field_positions()?;
    Ok(positions
        .iter()
        .filter(|(name, _)| name.starts_with(DEPARTURE_PREFIX))
        .filter_map(|(_, &position)| notes.yours.get(position))
        .product())
}
