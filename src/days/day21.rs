use crate::algorithm::elimination::resolve_unique;
use crate::io::error::{Result, malformed, no_solution};
use crate::io::input::non_empty_lines;
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

/// Ingredient list of one food with its declared allergens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food<'a> {
    /// Ingredients in the food
    pub ingredients: BTreeSet<&'a str>,
    /// Allergens the food is known to contain
    pub allergens: BTreeSet<&'a str>,
}

/// Parse `ingredients... (contains a, b)` lines
///
/// # Errors
///
/// Returns an error if a line has an unterminated allergen list
pub fn parse(input: &str) -> Result<Vec<Food<'_>>> {
    non_empty_lines(input)
        .map(|line| {
            let (ingredients, allergens) = match line.split_once(" (contains ") {
                Some((ingredients, tail)) => {
                    let list = tail
                        .strip_suffix(')')
                        .ok_or_else(|| malformed("food", &format!("'{line}'")))?;
                    (ingredients, list.split(", ").map(str::trim).collect())
                }
                None => (line, BTreeSet::new()),
            };
            Ok(Food {
                ingredients: ingredients.split_whitespace().collect(),
                allergens,
            })
        })
        .collect()
}

/// For each allergen, the ingredients present in every food declaring it
pub fn allergen_candidates<'a>(foods: &[Food<'a>]) -> BTreeMap<&'a str, BTreeSet<&'a str>> {
    let mut candidates: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for food in foods {
        for &allergen in &food.allergens {
            candidates
                .entry(allergen)
                .and_modify(|possible| possible.retain(|ingredient| food.ingredients.contains(ingredient)))
                .or_insert_with(|| food.ingredients.clone());
        }
    }
    candidates
}

/// Appearances of ingredients that cannot contain any allergen
///
/// # Errors
///
/// Returns an error if the list is malformed
pub fn part1(input: &str) -> Result<usize> {
    let foods = parse(input)?;
    let suspicious: BTreeSet<&str> = allergen_candidates(&foods)
        .into_values()
        .flatten()
        .collect();
    Ok(foods
        .iter()
        .flat_map(|food| &food.ingredients)
        .filter(|ingredient| !suspicious.contains(*ingredient))
        .count())
}

/// Dangerous ingredients sorted by their allergen, comma separated
///
/// # Errors
///
/// Returns an error if the list is malformed or allergens cannot be resolved
pub fn part2(input: &str) -> Result<String> {
    let foods = parse(input)?;
    let resolved = resolve_unique(allergen_candidates(&foods))
        .ok_or_else(|| no_solution("allergen resolution", &"allergens are ambiguous"))?;
    Ok(resolved.values().join(","))
}
