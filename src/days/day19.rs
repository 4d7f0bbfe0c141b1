use crate::io::error::{Result, malformed};
use crate::io::input::{blocks, parse_value};
use std::collections::HashMap;

/// Rule replacements that introduce loops in part 2
pub const LOOPING_RULES: [&str; 2] = ["8: 42 | 42 8", "11: 42 31 | 42 11 31"];

/// Identifier of a grammar rule
pub type RuleId = usize;

/// One grammar rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Matches exactly one character
    Literal(char),
    /// Matches any one sequence of sub-rules
    Alternatives(Vec<Vec<RuleId>>),
}

/// Rules by identifier
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    rules: HashMap<RuleId, Rule>,
}

impl Grammar {
    /// Parse `id: "c"` and `id: a b | c d` lines
    ///
    /// # Errors
    ///
    /// Returns an error on lines of any other shape
    pub fn parse<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut grammar = Self::default();
        for line in lines {
            grammar.insert(line)?;
        }
        Ok(grammar)
    }

    /// Add or replace one rule
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a rule
    pub fn insert(&mut self, line: &str) -> Result<()> {
        let (id, body) = line
            .split_once(':')
            .ok_or_else(|| malformed("message rule", &format!("'{line}'")))?;
        let id = parse_value(id, "rule id")?;
        let body = body.trim();

        let rule = if let Some(literal) = body.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
            let mut chars = literal.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Rule::Literal(c),
                _ => return Err(malformed("message rule", &format!("literal '{literal}'"))),
            }
        } else {
            Rule::Alternatives(
                body.split('|')
                    .map(|sequence| {
                        sequence
                            .split_whitespace()
                            .map(|token| parse_value(token, "rule reference"))
                            .collect::<Result<Vec<_>>>()
                    })
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        self.rules.insert(id, rule);
        Ok(())
    }

    /// Check whether the whole message matches rule 0
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced rule does not exist
    pub fn matches(&self, message: &str) -> Result<bool> {
        let chars: Vec<char> = message.trim().chars().collect();
        self.matches_sequence(&chars, &[0])
    }

    // Every rule consumes at least one character, so pending rules beyond
    // the remaining length can never match and loops terminate.
    fn matches_sequence(&self, message: &[char], pending: &[RuleId]) -> Result<bool> {
        let Some((&first, rest)) = pending.split_first() else {
            return Ok(message.is_empty());
        };
        if pending.len() > message.len() {
            return Ok(false);
        }

        match self.rules.get(&first) {
            None => Err(malformed("message rules", &format!("rule {first} is not defined"))),
            Some(Rule::Literal(expected)) => match message.split_first() {
                Some((c, remaining)) if c == expected => self.matches_sequence(remaining, rest),
                _ => Ok(false),
            },
            Some(Rule::Alternatives(options)) => {
                for option in options {
                    let expanded: Vec<RuleId> = option.iter().chain(rest).copied().collect();
                    if self.matches_sequence(message, &expanded)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

fn count_matching(input: &str, looping: bool) -> Result<usize> {
    let sections = blocks(input);
    let [rule_lines, messages] = sections.as_slice() else {
        return Err(malformed("message notes", &"expected rules and messages"));
    };

    let mut grammar = Grammar::parse(rule_lines.iter().copied())?;
    if looping {
        for replacement in LOOPING_RULES {
            grammar.insert(replacement)?;
        }
    }

    messages.iter().try_fold(0, |count, message| {
        Ok(count + usize::from(grammar.matches(message)?))
    })
}

/// Messages matching rule 0
///
/// # Errors
///
/// Returns an error if the notes are malformed or reference missing rules
pub fn part1(input: &str) -> Result<usize> {
    count_matching(input, false)
}

/// Messages matching rule 0 once rules 8 and 11 loop
///
/// # Errors
///
/// Returns an error if the notes are malformed or reference missing rules
pub fn part2(input: &str) -> Result<usize> {
    count_matching(input, true)
}
