use crate::io::error::{Result, malformed};
use crate::io::input::{blocks, parse_value};
use std::collections::{HashSet, VecDeque};

/// A player's cards, top first
pub type Deck = VecDeque<u32>;

/// Which player won a game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    /// First player
    One,
    /// Second player
    Two,
}

/// Parse the two `Player N:` blocks
///
/// # Errors
///
/// Returns an error unless there are exactly two decks of numbers
pub fn parse(input: &str) -> Result<(Deck, Deck)> {
    let decks = blocks(input)
        .iter()
        .map(|lines| {
            lines
                .iter()
                .skip(1)
                .map(|card| parse_value(card, "card"))
                .collect::<Result<Deck>>()
        })
        .collect::<Result<Vec<_>>>()?;
    match <[Deck; 2]>::try_from(decks) {
        Ok([first, second]) => Ok((first, second)),
        Err(decks) => Err(malformed(
            "card decks",
            &format!("expected 2 decks, found {}", decks.len()),
        )),
    }
}

/// Sum of each card times its position counted from the bottom
pub fn score(deck: &Deck) -> u64 {
    deck.iter()
        .rev()
        .zip(1..)
        .map(|(&card, position)| u64::from(card) * position)
        .sum()
}

fn collect(winner: &mut Deck, high: u32, low: u32) {
    winner.push_back(high);
    winner.push_back(low);
}

/// Play plain combat; returns the winner and their deck
pub fn combat(mut one: Deck, mut two: Deck) -> (Player, Deck) {
    while let (Some(&a), Some(&b)) = (one.front(), two.front()) {
        one.pop_front();
        two.pop_front();
        if a > b {
            collect(&mut one, a, b);
        } else {
            collect(&mut two, b, a);
        }
    }
    if two.is_empty() {
        (Player::One, one)
    } else {
        (Player::Two, two)
    }
}

/// Play recursive combat; a repeated position ends the game for player one
pub fn recursive_combat(mut one: Deck, mut two: Deck) -> (Player, Deck) {
    let mut seen = HashSet::new();

    while let (Some(&a), Some(&b)) = (one.front(), two.front()) {
        if !seen.insert((one.clone(), two.clone())) {
            return (Player::One, one);
        }
        one.pop_front();
        two.pop_front();

        let recurse = one.len() >= a as usize && two.len() >= b as usize;
        let winner = if recurse {
            let sub_one = one.iter().take(a as usize).copied().collect();
            let sub_two = two.iter().take(b as usize).copied().collect();
            recursive_combat(sub_one, sub_two).0
        } else if a > b {
            Player::One
        } else {
            Player::Two
        };

        match winner {
            Player::One => collect(&mut one, a, b),
            Player::Two => collect(&mut two, b, a),
        }
    }

    if two.is_empty() {
        (Player::One, one)
    } else {
        (Player::Two, two)
    }
}

/// Winning score of plain combat
///
/// # Errors
///
/// Returns an error if the decks are malformed
pub fn part1(input: &str) -> Result<u64> {
    let (one, two) = parse(input)?;
    Ok(score(&combat(one, two).1))
}

/// Winning score of recursive combat
///
/// # Errors
///
/// Returns an error if the decks are malformed
pub fn part2(input: &str) -> Result<u64> {
    let (one, two) = parse(input)?;
    Ok(score(&recursive_combat(one, two).1))
}
