use crate::io::configuration::TARGET_BAG;
use crate::io::error::{Result, malformed};
use crate::io::input::{non_empty_lines, parse_value};
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Bag colour to the bags it directly holds, with counts
pub type Rules = HashMap<String, Vec<(u64, String)>>;

/// Parse `<colour> bags contain <n> <colour> bag(s), ...` rules
///
/// # Errors
///
/// Returns an error if a rule has no `contain` clause
pub fn parse(input: &str) -> Result<Rules> {
    let content = Regex::new(r"(\d+) (\w+ \w+) bags?")?;
    non_empty_lines(input)
        .map(|line| {
            let (outer, inner) = line
                .split_once(" bags contain ")
                .ok_or_else(|| malformed("bag rule", &format!("'{line}'")))?;
            let held = content
                .captures_iter(inner)
                .map(|captures| {
                    let count = captures.get(1).map_or("", |m| m.as_str());
                    let colour = captures.get(2).map_or("", |m| m.as_str());
                    Ok((parse_value(count, "bag count")?, colour.to_string()))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((outer.trim().to_string(), held))
        })
        .collect()
}

/// Colours that eventually hold `target`
pub fn containers_of(rules: &Rules, target: &str) -> HashSet<String> {
    let mut holders: HashMap<&str, Vec<&str>> = HashMap::new();
    for (outer, held) in rules {
        for (_, inner) in held {
            holders.entry(inner.as_str()).or_default().push(outer.as_str());
        }
    }

    let mut found = HashSet::new();
    let mut pending = vec![target];
    while let Some(colour) = pending.pop() {
        for &outer in holders.get(colour).into_iter().flatten() {
            if found.insert(outer.to_string()) {
                pending.push(outer);
            }
        }
    }
    found
}

/// Bags inside one `colour` bag, counted recursively
///
/// # Errors
///
/// Returns an error if the rules contain a cycle through `colour`
pub fn bags_inside(rules: &Rules, colour: &str) -> Result<u64> {
    fn count<'a>(
        rules: &'a Rules,
        colour: &'a str,
        memo: &mut HashMap<&'a str, u64>,
        open: &mut HashSet<&'a str>,
    ) -> Result<u64> {
        if let Some(&known) = memo.get(colour) {
            return Ok(known);
        }
        if !open.insert(colour) {
            return Err(malformed("bag rules", &format!("'{colour}' contains itself")));
        }

        let mut total = 0;
        for (number, inner) in rules.get(colour).into_iter().flatten() {
            total += number * (1 + count(rules, inner, memo, open)?);
        }

        open.remove(colour);
        memo.insert(colour, total);
        Ok(total)
    }

    count(rules, colour, &mut HashMap::new(), &mut HashSet::new())
}

/// Colours that can hold the target bag
///
/// # Errors
///
/// Returns an error if a rule is malformed
pub fn part1(input: &str) -> Result<usize> {
    Ok(containers_of(&parse(input)?, TARGET_BAG).len())
}

/// Bags required inside the target bag
///
/// # Errors
///
/// Returns an error if a rule is malformed or cyclic
pub fn part2(input: &str) -> Result<u64> {
    bags_inside(&parse(input)?, TARGET_BAG)
}
