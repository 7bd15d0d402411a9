use num_bigint::{BigInt, BigUint, Sign};

use crate::errors::BitopsError;

/// A 32-bit unsigned word. Arithmetic on words wraps mod 2^32.
pub type Word = u32;

/// Anything that can be reduced to a word by taking it mod 2^32.
pub trait ToWord {
    fn to_word(&self) -> Word;
}

// `as` on primitive integers keeps the low 32 bits of the two's complement
// representation, which is exactly floor(x mod 2^32).
macro_rules! impl_to_word {
    ($($t:ty),*) => {
        $(
            impl ToWord for $t {
                #[inline]
                fn to_word(&self) -> Word {
                    *self as Word
                }
            }
        )*
    };
}

impl_to_word!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl ToWord for BigUint {
    fn to_word(&self) -> Word {
        // little-endian digits, lowest digit is x mod 2^32
        self.to_u32_digits().first().copied().unwrap_or(0)
    }
}

impl ToWord for BigInt {
    fn to_word(&self) -> Word {
        let (sign, digits) = self.to_u32_digits();
        let low = digits.first().copied().unwrap_or(0);
        match sign {
            Sign::Minus => low.wrapping_neg(),
            _ => low,
        }
    }
}

impl<T: ToWord + ?Sized> ToWord for &T {
    fn to_word(&self) -> Word {
        (**self).to_word()
    }
}

/// Normalize any integer to [0, 2^32 - 1] by computing `x mod 2^32`.
/// Negative inputs wrap, so `to_uint32(-1) == 0xffffffff`.
pub fn to_uint32<T: ToWord>(x: T) -> Word {
    x.to_word()
}

/// Parse a decimal or `0x`-prefixed hex integer of any size and sign,
/// then normalize it with `to_uint32`. Underscores are allowed as separators.
pub fn parse_word(text: &str) -> Result<Word, BitopsError> {
    let invalid = || BitopsError::InvalidWord(text.to_string());

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex_digits) => (16, hex_digits),
        None => (10, unsigned),
    };
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(invalid)?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(to_uint32(BigInt::from_biguint(sign, magnitude)))
}

/// Render a word as `0x` followed by 8 lowercase hex digits.
pub fn format_word(w: Word) -> String {
    format!("0x{:08x}", w)
}
