use std::fmt;

use log::trace;

use crate::bitops::{big_sigma0, big_sigma1, ch, maj};
use crate::word::Word;

/// The eight working variables of the SHA-256 compression loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    pub a: Word,
    pub b: Word,
    pub c: Word,
    pub d: Word,
    pub e: Word,
    pub f: Word,
    pub g: Word,
    pub h: Word,
}

impl RoundState {
    pub fn from_hash(hash: &[Word; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = *hash;
        RoundState { a, b, c, d, e, f, g, h }
    }

    pub fn to_array(self) -> [Word; 8] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h]
    }

    /// `h + Σ1(e) + ch(e, f, g) + k + w`
    pub fn temp1(&self, k: Word, w: Word) -> Word {
        self.h
            .wrapping_add(big_sigma1(self.e))
            .wrapping_add(ch(self.e, self.f, self.g))
            .wrapping_add(k)
            .wrapping_add(w)
    }

    /// `Σ0(a) + maj(a, b, c)`
    pub fn temp2(&self) -> Word {
        big_sigma0(self.a).wrapping_add(maj(self.a, self.b, self.c))
    }

    /// One compression round with round constant `k` and schedule word `w`.
    pub fn step(self, k: Word, w: Word) -> Self {
        let temp1 = self.temp1(k, w);
        let temp2 = self.temp2();
        let next = RoundState {
            a: temp1.wrapping_add(temp2),
            b: self.a,
            c: self.b,
            d: self.c,
            e: self.d.wrapping_add(temp1),
            f: self.e,
            g: self.f,
            h: self.g,
        };
        trace!("round: a=0x{:08x} e=0x{:08x}", next.a, next.e);
        next
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a=0x{:08x} b=0x{:08x} c=0x{:08x} d=0x{:08x} e=0x{:08x} f=0x{:08x} g=0x{:08x} h=0x{:08x}",
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h
        )
    }
}
