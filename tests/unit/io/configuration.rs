//! Tests for puzzle constants

#[cfg(test)]
mod tests {
    use aoc2020::io::configuration::{
        BACKGROUND, CUP_COUNT_LONG, CUP_MOVES_LONG, FIRST_DAY, FOREGROUND, HANDSHAKE_MODULUS,
        HANDSHAKE_SUBJECT, LAST_DAY, PROGRESS_STRIDE, RECITATION_LONG, SEA_MONSTER,
        TOBOGGAN_SLOPE, TOBOGGAN_SLOPES,
    };

    // Tests the calendar bounds
    // Verified by changing the last day
    #[test]
    fn test_day_range() {
        assert_eq!(FIRST_DAY, 1);
        assert_eq!(LAST_DAY, 25);
    }

    // Tests the monster rows share one width and carry 15 marks
    // Verified by trimming trailing spaces from a row
    #[test]
    fn test_sea_monster_mask() {
        assert!(SEA_MONSTER.iter().all(|row| row.len() == 20));
        let marks: usize = SEA_MONSTER
            .iter()
            .map(|row| row.chars().filter(|&c| c == FOREGROUND).count())
            .sum();
        assert_eq!(marks, 15);
        assert_ne!(FOREGROUND, BACKGROUND);
    }

    // Tests the part 1 slope is among the part 2 slopes
    // Verified by changing the part 1 slope
    #[test]
    fn test_toboggan_slopes() {
        assert!(TOBOGGAN_SLOPES.contains(&TOBOGGAN_SLOPE));
    }

    // Tests long simulations redraw their bars several times
    // Verified by raising the stride past the task length
    #[test]
    fn test_progress_stride_divides_long_tasks() {
        assert_eq!(RECITATION_LONG % PROGRESS_STRIDE, 0);
        assert_eq!(CUP_MOVES_LONG % PROGRESS_STRIDE, 0);
        assert!(CUP_COUNT_LONG < CUP_MOVES_LONG);
    }

    // Tests the handshake parameters
    // Verified by changing the subject number
    #[test]
    fn test_handshake() {
        assert_eq!(HANDSHAKE_SUBJECT, 7);
        assert_eq!(HANDSHAKE_MODULUS, 20_201_227);
    }
}
