//! Tests for modular arithmetic helpers

#[cfg(test)]
mod tests {
    use aoc2020::math::modular::{discrete_log, earliest_alignment, gcd, lcm, mod_pow};

    // Tests gcd and lcm across integer widths
    // Verified by returning the product for lcm
    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(12_u32, 18), 6);
        assert_eq!(gcd(17_u64, 5), 1);
        assert_eq!(gcd(0_u64, 9), 9);
        assert_eq!(lcm(4_u64, 6), 12);
        assert_eq!(lcm(0_u8, 5), 0);
    }

    // Tests fast exponentiation, including moduli near the u64 limit
    // Verified by multiplying in u64 without widening
    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(mod_pow(5, 0, 7), 1);
        assert_eq!(mod_pow(9, 9, 1), 0);
        assert_eq!(mod_pow(u64::MAX - 1, 2, u64::MAX), 1);
        assert_eq!(mod_pow(17_807_724, 8, 20_201_227), 14_897_079);
    }

    // Tests discrete logarithms of the handshake keys
    // Verified by starting the exponent at zero
    #[test]
    fn test_discrete_log() {
        assert_eq!(discrete_log(7, 5_764_801, 20_201_227), Some(8));
        assert_eq!(discrete_log(7, 17_807_724, 20_201_227), Some(11));
        assert_eq!(discrete_log(3, 1, 7), Some(6));
        assert_eq!(discrete_log(2, 3, 7), None);
        assert_eq!(discrete_log(2, 0, 1), None);
    }

    // Tests the earliest departure for offset bus periods
    // Verified by stepping by the latest period alone
    #[test]
    fn test_earliest_alignment() {
        let buses = [(0, 7), (1, 13), (4, 59), (6, 31), (7, 19)];
        assert_eq!(earliest_alignment(&buses), Some(1_068_781));
        assert_eq!(earliest_alignment(&[(0, 17), (2, 13), (3, 19)]), Some(3417));
        assert_eq!(earliest_alignment(&[]), Some(0));
    }

    // Tests impossible constraint sets
    // Verified by looping until overflow
    #[test]
    fn test_earliest_alignment_impossible() {
        assert_eq!(earliest_alignment(&[(0, 4), (1, 2)]), None);
        assert_eq!(earliest_alignment(&[(0, 0)]), None);
    }
}
