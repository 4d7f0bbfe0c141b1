use crate::io::configuration::MASK_WIDTH;
use crate::io::error::{Result, malformed};
use crate::io::input::{non_empty_lines, parse_value};
use regex::Regex;
use std::collections::HashMap;

/// A 36-bit mask split into its fixed and floating bits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mask {
    /// Bits forced to 1
    pub ones: u64,
    /// Bits forced to 0
    pub zeros: u64,
    /// Bits marked `X`
    pub floating: u64,
}

impl Mask {
    /// Parse a mask string, most significant bit first
    ///
    /// # Errors
    ///
    /// Returns an error if the mask is not 36 characters of `0`, `1` and `X`
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.chars().count() != MASK_WIDTH {
            return Err(malformed("bitmask", &format!("'{text}' is not {MASK_WIDTH} bits")));
        }
        text.chars().try_fold(Self::default(), |mask, c| {
            let shifted = Self {
                ones: mask.ones << 1,
                zeros: mask.zeros << 1,
                floating: mask.floating << 1,
            };
            match c {
                '1' => Ok(Self { ones: shifted.ones | 1, ..shifted }),
                '0' => Ok(Self { zeros: shifted.zeros | 1, ..shifted }),
                'X' => Ok(Self { floating: shifted.floating | 1, ..shifted }),
                other => Err(malformed("bitmask", &format!("unexpected '{other}'"))),
            }
        })
    }

    /// Value with the fixed bits overwritten
    pub const fn apply_to_value(self, value: u64) -> u64 {
        (value | self.ones) & !self.zeros
    }

    /// Every address produced by setting the 1 bits and floating the `X` bits
    pub fn addresses(self, address: u64) -> Vec<u64> {
        let base = (address | self.ones) & !self.floating;
        let mut addresses = Vec::with_capacity(1 << self.floating.count_ones());
        let mut subset = self.floating;
        loop {
            addresses.push(base | subset);
            if subset == 0 {
                break;
            }
            subset = (subset - 1) & self.floating;
        }
        addresses
    }
}

/// One line of the initialization program
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the current mask
    SetMask(Mask),
    /// Write a value to an address
    Write {
        /// Target address
        address: u64,
        /// Value written
        value: u64,
    },
}

/// Parse `mask = ...` and `mem[a] = v` lines
///
/// # Errors
///
/// Returns an error on any other line shape
pub fn parse(input: &str) -> Result<Vec<Command>> {
    let write = Regex::new(r"^mem\[(\d+)\]\s*=\s*(\d+)$")?;
    non_empty_lines(input)
        .map(|line| {
            let line = line.trim();
            if let Some(mask) = line.strip_prefix("mask = ") {
                return Ok(Command::SetMask(Mask::parse(mask)?));
            }
            let captures = write
                .captures(line)
                .ok_or_else(|| malformed("docking program", &format!("'{line}'")))?;
            let field = |index| captures.get(index).map_or("", |m| m.as_str());
            Ok(Command::Write {
                address: parse_value(field(1), "memory address")?,
                value: parse_value(field(2), "memory value")?,
            })
        })
        .collect()
}

fn execute<F>(commands: &[Command], mut store: F) -> Result<u64>
where
    F: FnMut(&mut HashMap<u64, u64>, Mask, u64, u64),
{
    let mut memory = HashMap::new();
    let mut mask = None;
    for &command in commands {
        match command {
            Command::SetMask(next) => mask = Some(next),
            Command::Write { address, value } => {
                let current = mask.ok_or_else(|| {
                    malformed("docking program", &"memory written before any mask")
                })?;
                store(&mut memory, current, address, value);
            }
        }
    }
    Ok(memory.values().sum())
}

/// Memory sum with masks applied to values
///
/// # Errors
///
/// Returns an error if the program is malformed
pub fn part1(input: &str) -> Result<u64> {
    execute(&parse(input)?, |memory, mask, address, value| {
        memory.insert(address, mask.apply_to_value(value));
    })
}

/// Memory sum with masks decoding addresses
///
/// # Errors
///
/// Returns an error if the program is malformed
pub fn part2(input: &str) -> Result<u64> {
    execute(&parse(input)?, |memory, mask, address, value| {
        for decoded in mask.addresses(address) {
            memory.insert(decoded, value);
        }
    })
}
