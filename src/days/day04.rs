use crate::io::error::{Result, malformed};
use crate::io::input::blocks;
use regex::Regex;
use std::collections::HashMap;

/// Fields every passport must carry; `cid` is optional
pub const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

const EYE_COLOURS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

/// One passport record
#[derive(Clone, Debug, Default)]
pub struct Passport<'a> {
    fields: HashMap<&'a str, &'a str>,
}

/// Compiled value formats for the strict check
pub struct Validator {
    hair_colour: Regex,
    passport_id: Regex,
}

impl Validator {
    /// Compile the value formats
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile
    pub fn new() -> Result<Self> {
        Ok(Self {
            hair_colour: Regex::new(r"^#[0-9a-f]{6}$")?,
            passport_id: Regex::new(r"^[0-9]{9}$")?,
        })
    }

    /// Check one field value against its rule; unknown fields pass
    pub fn is_valid_field(&self, key: &str, value: &str) -> bool {
        let year_in = |low: u32, high: u32| {
            value.len() == 4 && value.parse().is_ok_and(|year: u32| (low..=high).contains(&year))
        };
        match key {
            "byr" => year_in(1920, 2002),
            "iyr" => year_in(2010, 2020),
            "eyr" => year_in(2020, 2030),
            "hgt" => is_valid_height(value),
            "hcl" => self.hair_colour.is_match(value),
            "ecl" => EYE_COLOURS.contains(&value),
            "pid" => self.passport_id.is_match(value),
            _ => true,
        }
    }
}

fn is_valid_height(value: &str) -> bool {
    let within = |number: &str, low: u32, high: u32| {
        number.parse().is_ok_and(|height: u32| (low..=high).contains(&height))
    };
    if let Some(number) = value.strip_suffix("cm") {
        within(number, 150, 193)
    } else if let Some(number) = value.strip_suffix("in") {
        within(number, 59, 76)
    } else {
        false
    }
}

impl<'a> Passport<'a> {
    /// Parse whitespace separated `key:value` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if a pair has no colon
    pub fn parse(lines: &[&'a str]) -> Result<Self> {
        let fields = lines
            .iter()
            .copied()
            .flat_map(str::split_whitespace)
            .map(|pair| {
                pair.split_once(':')
                    .ok_or_else(|| malformed("passport field", &format!("'{pair}'")))
            })
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { fields })
    }

    /// Every required field is present
    pub fn has_required_fields(&self) -> bool {
        REQUIRED_FIELDS
            .iter()
            .all(|field| self.fields.contains_key(field))
    }

    /// Every required field is present and every value is valid
    pub fn is_valid(&self, validator: &Validator) -> bool {
        self.has_required_fields()
            && self
                .fields
                .iter()
                .all(|(key, value)| validator.is_valid_field(key, value))
    }
}

/// Parse every blank-line separated passport
///
/// # Errors
///
/// Returns an error if a field is malformed
pub fn parse(input: &str) -> Result<Vec<Passport<'_>>> {
    blocks(input).iter().map(|lines| Passport::parse(lines)).collect()
}

/// Passports with every required field
///
/// # Errors
///
/// Returns an error if a field is malformed
pub fn part1(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .iter()
        .filter(|passport| passport.has_required_fields())
        .count())
}

/// Passports with every required field holding a valid value
///
/// # Errors
///
/// Returns an error if a field is malformed
pub fn part2(input: &str) -> Result<usize> {
    let validator = Validator::new()?;
    Ok(parse(input)?
        .iter()
        .filter(|passport| passport.is_valid(&validator))
        .count())
}
