use crate::io::configuration::{HANDSHAKE_MODULUS, HANDSHAKE_SUBJECT};
use crate::io::error::{Result, malformed, no_solution};
use crate::io::input::parse_lines;
use crate::math::modular::{discrete_log, mod_pow};

/// Loop size that turns the subject number into a public key
pub fn loop_size(public_key: u64) -> Option<u64> {
    discrete_log(HANDSHAKE_SUBJECT, public_key, HANDSHAKE_MODULUS)
}

/// Transform a subject number `loop_size` times
pub const fn transform(subject: u64, loop_size: u64) -> u64 {
    mod_pow(subject, loop_size, HANDSHAKE_MODULUS)
}

/// Encryption key shared by the card and the door
///
/// # Errors
///
/// Returns an error unless the input holds two keys with a findable loop size
pub fn part1(input: &str) -> Result<u64> {
    let keys: Vec<u64> = parse_lines(input, "public key")?;
    let [card, door] = keys.as_slice() else {
        return Err(malformed("public keys", &"expected the card and door keys"));
    };
    let card_loop = loop_size(*card)
        .ok_or_else(|| no_solution("handshake", &format!("no loop size yields {card}")))?;
    Ok(transform(*door, card_loop))
}
