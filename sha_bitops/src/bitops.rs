// Bitwise building blocks of SHA-256 (FIPS 180-4, section 4.1.2).
//
// Counts given to rotr/shr are reduced mod 32, for both functions.
// The checked_* variants reject anything outside [0, 32) instead.

use crate::errors::BitopsError;
use crate::word::Word;

const WORD_BITS: u32 = Word::BITS;

/// Right rotate: bits pushed off the low end re-enter at the high end.
/// `n` is reduced mod 32.
///
/// ```
/// use sha_bitops::rotr;
/// assert_eq!(rotr(0x1234_5678, 4), 0x8123_4567);
/// assert_eq!(rotr(0x1234_5678, 32), 0x1234_5678);
/// ```
#[inline]
pub fn rotr(x: Word, n: u32) -> Word {
    let n = n % WORD_BITS;
    if n == 0 {
        return x;
    }
    (x >> n) | (x << (WORD_BITS - n))
}

/// Logical right shift, zero fill. `n` is reduced mod 32.
///
/// ```
/// use sha_bitops::shr;
/// assert_eq!(shr(0x8000_0000, 4), 0x0800_0000);
/// ```
#[inline]
pub fn shr(x: Word, n: u32) -> Word {
    x >> (n % WORD_BITS)
}

fn check_count(n: i64) -> Result<u32, BitopsError> {
    if (0..WORD_BITS as i64).contains(&n) {
        Ok(n as u32)
    } else {
        Err(BitopsError::OutOfRange { amount: n })
    }
}

/// `rotr` for counts coming from outside the crate. Rejects `n` outside [0, 32).
pub fn checked_rotr(x: Word, n: i64) -> Result<Word, BitopsError> {
    check_count(n).map(|n| rotr(x, n))
}

/// `shr` for counts coming from outside the crate. Rejects `n` outside [0, 32).
pub fn checked_shr(x: Word, n: i64) -> Result<Word, BitopsError> {
    check_count(n).map(|n| shr(x, n))
}

/// Three-input XOR.
#[inline]
pub fn parity(x: Word, y: Word, z: Word) -> Word {
    x ^ y ^ z
}

/// SHA-256 choice function: if x then y else z, bit by bit.
#[inline]
pub fn ch(x: Word, y: Word, z: Word) -> Word {
    (x & y) ^ (!x & z)
}

/// SHA-256 majority function.
#[inline]
pub fn maj(x: Word, y: Word, z: Word) -> Word {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Upper case sigma 0: `rotr 2 ^ rotr 13 ^ rotr 22`.
#[inline]
pub fn big_sigma0(x: Word) -> Word {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Upper case sigma 1: `rotr 6 ^ rotr 11 ^ rotr 25`.
#[inline]
pub fn big_sigma1(x: Word) -> Word {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// Lower case sigma 0: `rotr 7 ^ rotr 18 ^ shr 3`.
#[inline]
pub fn small_sigma0(x: Word) -> Word {
    rotr(x, 7) ^ rotr(x, 18) ^ shr(x, 3)
}

/// Lower case sigma 1: `rotr 17 ^ rotr 19 ^ shr 10`.
#[inline]
pub fn small_sigma1(x: Word) -> Word {
    rotr(x, 17) ^ rotr(x, 19) ^ shr(x, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotr_known_values() {
        assert_eq!(rotr(0x1234_5678, 4), 0x8123_4567);
        assert_eq!(rotr(1, 1), 0x8000_0000);
        assert_eq!(rotr(0x8000_0000, 31), 1);
        assert_eq!(rotr(0xdead_beef, 0), 0xdead_beef);
    }

    #[test]
    fn test_rotr_matches_std() {
        for n in 0..32 {
            assert_eq!(rotr(0x0123_4567, n), 0x0123_4567u32.rotate_right(n));
        }
    }

    #[test]
    fn test_shr_known_values() {
        assert_eq!(shr(0x8000_0000, 4), 0x0800_0000);
        assert_eq!(shr(0xffff_ffff, 31), 1);
        assert_eq!(shr(0xffff_ffff, 0), 0xffff_ffff);
    }

    // counts of 32 and above wrap around instead of zeroing the word
    #[test]
    fn test_counts_reduced_mod_32() {
        let x = 0x1234_5678;
        assert_eq!(rotr(x, 32), x);
        assert_eq!(rotr(x, 36), rotr(x, 4));
        assert_eq!(shr(x, 32), x);
        assert_eq!(shr(x, 36), shr(x, 4));
        assert_eq!(shr(x, u32::MAX), shr(x, 31));
    }

    #[test]
    fn test_checked_variants() {
        assert_eq!(checked_rotr(0x1234_5678, 4), Ok(0x8123_4567));
        assert_eq!(checked_shr(0x8000_0000, 4), Ok(0x0800_0000));
        assert_eq!(checked_rotr(7, 0), Ok(7));
        assert_eq!(checked_shr(7, 31), Ok(0));
        assert_eq!(
            checked_rotr(1, 32),
            Err(BitopsError::OutOfRange { amount: 32 })
        );
        assert_eq!(
            checked_shr(1, -1),
            Err(BitopsError::OutOfRange { amount: -1 })
        );
        assert_eq!(
            checked_shr(1, i64::MIN),
            Err(BitopsError::OutOfRange { amount: i64::MIN })
        );
    }

    #[test]
    fn test_parity() {
        assert_eq!(parity(0xaaaa_aaaa, 0x5555_5555, 0xffff_ffff), 0);
        assert_eq!(parity(0x1234_5678, 0x1234_5678, 0xcafe_babe), 0xcafe_babe);
        assert_eq!(parity(0, 0, 1), 1);
    }

    #[test]
    fn test_ch() {
        assert_eq!(ch(0xff00_ff00, 0x0f0f_0f0f, 0xf0f0_f0f0), 0x0ff0_0ff0);
        assert_eq!(ch(0xffff_ffff, 0x1234_5678, 0x9abc_def0), 0x1234_5678);
        assert_eq!(ch(0, 0x1234_5678, 0x9abc_def0), 0x9abc_def0);
    }

    #[test]
    fn test_maj() {
        assert_eq!(maj(0xffff_ffff, 0xffff_ffff, 0), 0xffff_ffff);
        assert_eq!(maj(0xff00_ff00, 0x0f0f_0f0f, 0xf0f0_f0f0), 0xff00_ff00);
        assert_eq!(maj(0x6a09_e667, 0xbb67_ae85, 0x3c6e_f372), 0x3a6f_e667);
    }

    #[test]
    fn test_sigmas() {
        assert_eq!(big_sigma0(0x6a09_e667), 0xce20_b47e);
        assert_eq!(big_sigma1(0x510e_527f), 0x3587_272b);
        assert_eq!(small_sigma0(1), 0x0200_4000);
        assert_eq!(small_sigma1(1), 0x0000_a000);
        assert_eq!(small_sigma0(0x6162_6380), 0x940e_90ef);
        assert_eq!(small_sigma1(0x18), 0x000f_0000);
    }
}
