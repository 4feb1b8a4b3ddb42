//! Big-endian counter arithmetic for CTR mode
//!
//! The counter is an arbitrary-width byte buffer treated as one big-endian
//! unsigned integer. Overflow past the most-significant byte wraps to
//! all-zero; that is the defined behavior, not an error.

/// Add 1 in place, carrying from the least-significant (last) byte.
///
/// A zero-length buffer is a no-op. All-`0xff` wraps to all-zero.
pub fn increment(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        if *byte < 0xff {
            *byte += 1;
            return;
        }
        *byte = 0x00;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_adds_one() {
        let cases = [
            ("", ""),
            ("00", "01"),
            ("7f", "80"),
            ("fe", "ff"),
            ("ff", "00"),
            ("000000", "000001"),
            ("0000ff", "000100"),
            ("00ffff", "010000"),
            ("ffffff", "000000"),
            ("abcdefffffffffffffffffff", "abcdf0000000000000000000"),
            ("ffffffffffffffffffffffff", "000000000000000000000000"),
        ];

        for (before, after) in cases {
            let mut counter = hex::decode(before).unwrap();
            increment(&mut counter);
            assert_eq!(
                counter,
                hex::decode(after).unwrap(),
                "increment({before}) must equal {after}"
            );
        }
    }

    #[test]
    fn test_increment_carries_through_middle_bytes() {
        let mut counter = [0x01, 0xff, 0xff];
        increment(&mut counter);
        assert_eq!(counter, [0x02, 0x00, 0x00]);
    }

    #[test]
    fn test_increment_full_cycle_single_byte() {
        let mut counter = [0x00];
        for expected in 1..=255u8 {
            increment(&mut counter);
            assert_eq!(counter, [expected]);
        }
        increment(&mut counter);
        assert_eq!(counter, [0x00], "256th increment wraps to zero");
    }
}
