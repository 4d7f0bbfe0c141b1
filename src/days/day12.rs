use crate::io::configuration::WAYPOINT_START;
use crate::io::error::{Result, malformed};
use crate::io::input::{non_empty_lines, parse_value};

/// One navigation instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Move north
    North(i64),
    /// Move south
    South(i64),
    /// Move east
    East(i64),
    /// Move west
    West(i64),
    /// Quarter turns counter-clockwise
    Left(u32),
    /// Quarter turns clockwise
    Right(u32),
    /// Move along the heading or towards the waypoint
    Forward(i64),
}

/// Parse `<action><value>` lines
///
/// # Errors
///
/// Returns an error on unknown actions or turns that are not multiples of 90
pub fn parse(input: &str) -> Result<Vec<Action>> {
    non_empty_lines(input)
        .map(|line| {
            let mut chars = line.trim().chars();
            let action = chars
                .next()
                .ok_or_else(|| malformed("navigation", &"empty instruction"))?;
            let value: i64 = parse_value(chars.as_str(), "navigation value")?;
            let quarter_turns = || {
                if value % 90 == 0 {
                    Ok((value / 90).rem_euclid(4) as u32)
                } else {
                    Err(malformed("navigation", &format!("turn of {value} degrees")))
                }
            };
            match action {
                'N' => Ok(Action::North(value)),
                'S' => Ok(Action::South(value)),
                'E' => Ok(Action::East(value)),
                'W' => Ok(Action::West(value)),
                'L' => Ok(Action::Left(quarter_turns()?)),
                'R' => Ok(Action::Right(quarter_turns()?)),
                'F' => Ok(Action::Forward(value)),
                other => Err(malformed("navigation", &format!("unknown action '{other}'"))),
            }
        })
        .collect()
}

/// Rotate an (east, north) vector clockwise by quarter turns
const fn rotate_clockwise((east, north): (i64, i64), quarter_turns: u32) -> (i64, i64) {
    match quarter_turns % 4 {
        1 => (north, -east),
        2 => (-east, -north),
        3 => (-north, east),
        _ => (east, north),
    }
}

const fn translate((east, north): (i64, i64), action: Action) -> (i64, i64) {
    match action {
        Action::North(value) => (east, north + value),
        Action::South(value) => (east, north - value),
        Action::East(value) => (east + value, north),
        Action::West(value) => (east - value, north),
        _ => (east, north),
    }
}

/// Navigate, returning the final (east, north) position
///
/// With `waypoint` set, compass moves shift the waypoint instead of the ship.
pub fn navigate(actions: &[Action], start_vector: (i64, i64), waypoint: bool) -> (i64, i64) {
    let mut ship = (0, 0);
    let mut vector = start_vector;

    for &action in actions {
        match action {
            Action::Left(turns) => vector = rotate_clockwise(vector, 4 - turns % 4),
            Action::Right(turns) => vector = rotate_clockwise(vector, turns),
            Action::Forward(times) => {
                ship = (ship.0 + vector.0 * times, ship.1 + vector.1 * times);
            }
            compass if waypoint => vector = translate(vector, compass),
            compass => ship = translate(ship, compass),
        }
    }
    ship
}

const fn manhattan((east, north): (i64, i64)) -> u64 {
    east.unsigned_abs() + north.unsigned_abs()
}

/// Distance travelled steering the ship directly
///
/// # Errors
///
/// Returns an error if the instructions are malformed
pub fn part1(input: &str) -> Result<u64> {
    Ok(manhattan(navigate(&parse(input)?, (1, 0), false)))
}

/// Distance travelled steering by the waypoint
///
/// # Errors
///
/// Returns an error if the instructions are malformed
pub fn part2(input: &str) -> Result<u64> {
    Ok(manhattan(navigate(&parse(input)?, WAYPOINT_START, true)))
}
