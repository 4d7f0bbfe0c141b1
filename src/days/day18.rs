use crate::io::error::{Result, malformed};
use crate::io::input::non_empty_lines;
use std::iter::Peekable;
use std::str::Chars;

/// Binding strength of the two operators; higher binds tighter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Precedence {
    /// Strength of `+`
    pub addition: u8,
    /// Strength of `*`
    pub multiplication: u8,
}

impl Precedence {
    /// Both operators bind equally, evaluated left to right
    pub const FLAT: Self = Self {
        addition: 1,
        multiplication: 1,
    };

    /// Addition binds tighter than multiplication
    pub const ADDITION_FIRST: Self = Self {
        addition: 2,
        multiplication: 1,
    };
}

struct Evaluator<'a> {
    chars: Peekable<Chars<'a>>,
    precedence: Precedence,
}

impl Evaluator<'_> {
    fn peek(&mut self) -> Option<char> {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
        self.chars.peek().copied()
    }

    fn operand(&mut self) -> Result<u64> {
        match self.peek() {
            Some('(') => {
                self.chars.next();
                let value = self.expression(0)?;
                if self.peek() != Some(')') {
                    return Err(malformed("expression", &"unclosed parenthesis"));
                }
                self.chars.next();
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() => {
                let mut value = 0_u64;
                while let Some(digit) = self.chars.next_if(char::is_ascii_digit) {
                    value = value * 10 + u64::from(digit.to_digit(10).unwrap_or_default());
                }
                Ok(value)
            }
            other => Err(malformed("expression", &format!("unexpected {other:?}"))),
        }
    }

    fn expression(&mut self, minimum: u8) -> Result<u64> {
        let mut value = self.operand()?;
        loop {
            let (strength, apply): (u8, fn(u64, u64) -> u64) = match self.peek() {
                Some('+') => (self.precedence.addition, |a, b| a + b),
                Some('*') => (self.precedence.multiplication, |a, b| a * b),
                _ => return Ok(value),
            };
            if strength < minimum {
                return Ok(value);
            }
            self.chars.next();
            let right = self.expression(strength + 1)?;
            value = apply(value, right);
        }
    }
}

/// Evaluate one expression line
///
/// # Errors
///
/// Returns an error on unknown characters, unbalanced parentheses or
/// trailing input
pub fn evaluate(line: &str, precedence: Precedence) -> Result<u64> {
    let mut evaluator = Evaluator {
        chars: line.chars().peekable(),
        precedence,
    };
    let value = evaluator.expression(0)?;
    match evaluator.peek() {
        None => Ok(value),
        Some(extra) => Err(malformed("expression", &format!("unexpected '{extra}'"))),
    }
}

fn sum_of_lines(input: &str, precedence: Precedence) -> Result<u64> {
    non_empty_lines(input)
        .map(|line| evaluate(line, precedence))
        .sum()
}

/// Sum of every line with flat precedence
///
/// # Errors
///
/// Returns an error if any expression is malformed
pub fn part1(input: &str) -> Result<u64> {
    sum_of_lines(input, Precedence::FLAT)
}

/// Sum of every line with addition binding tighter
///
/// # Errors
///
/// Returns an error if any expression is malformed
pub fn part2(input: &str) -> Result<u64> {
    sum_of_lines(input, Precedence::ADDITION_FIRST)
}
