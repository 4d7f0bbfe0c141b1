//! Modular arithmetic for the bus schedule and the door handshake

use num_traits::{PrimInt, Unsigned};

/// Greatest common divisor by Euclid's algorithm
pub fn gcd<T: PrimInt + Unsigned>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; zero when either argument is zero
pub fn lcm<T: PrimInt + Unsigned>(a: T, b: T) -> T {
    if a.is_zero() || b.is_zero() {
        return T::zero();
    }
    a / gcd(a, b) * b
}

/// Multiply two residues without overflowing
const fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// `base` raised to `exponent`, reduced modulo `modulus`
///
/// A modulus of zero or one yields zero.
pub const fn mod_pow(base: u64, exponent: u64, modulus: u64) -> u64 {
    if modulus <= 1 {
        return 0;
    }
    let mut result = 1;
    let mut base = base % modulus;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exponent >>= 1;
    }
    result
}

/// Smallest positive exponent `e` with `subject^e ≡ target (mod modulus)`
///
/// Steps through successive powers, so the cost is linear in the answer.
/// Returns `None` once the powers cycle without reaching `target`.
pub fn discrete_log(subject: u64, target: u64, modulus: u64) -> Option<u64> {
    if modulus <= 1 {
        return None;
    }
    let target = target % modulus;
    let mut value = 1;
    for exponent in 1..=modulus {
        value = mul_mod(value, subject, modulus);
        if value == target {
            return Some(exponent);
        }
        if value == 1 {
            return None;
        }
    }
    None
}

/// Earliest `t` with `(t + offset) % period == 0` for every `(offset, period)`
///
/// Sieves one constraint at a time, stepping by the least common multiple of
/// the periods already satisfied. Returns `None` if a period is zero or the
/// constraints are incompatible.
pub fn earliest_alignment(constraints: &[(u64, u64)]) -> Option<u64> {
    let mut time = 0_u64;
    let mut step = 1_u64;

    for &(offset, period) in constraints {
        if period == 0 {
            return None;
        }
        let mut tries = 0;
        while (time + offset) % period != 0 {
            if tries == period {
                return None;
            }
            time = time.checked_add(step)?;
            tries += 1;
        }
        step = lcm(step, period);
    }

    Some(time)
}
