// SHA-256 (FIPS 180-4) assembled from the word primitives.

use std::fmt;

use log::debug;

use crate::bitops::{small_sigma0, small_sigma1};
use crate::round::RoundState;
use crate::word::Word;

pub const BLOCK_SIZE: usize = 64;
pub const DIGEST_SIZE: usize = 32;

// First 32 bits of the fractional parts of the cube roots of the first 64 primes
pub const ROUND_CONSTANTS: [Word; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

// First 32 bits of the fractional parts of the square roots of the first 8 primes
pub const INITIAL_HASH: [Word; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Split a block into 16 big-endian words and extend them to 64.
pub fn message_schedule(block: &[u8; BLOCK_SIZE]) -> [Word; 64] {
    let mut w = [0 as Word; 64];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = Word::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in 16..64 {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }
    w
}

/// Run the 64 rounds over one block and add the result into `state`.
pub fn compress(state: &mut [Word; 8], block: &[u8; BLOCK_SIZE]) {
    let w = message_schedule(block);

    let mut working = RoundState::from_hash(state);
    debug!("block start: {}", working);
    for (k, w) in ROUND_CONSTANTS.iter().zip(w.iter()) {
        working = working.step(*k, *w);
    }

    for (h, v) in state.iter_mut().zip(working.to_array()) {
        *h = h.wrapping_add(v);
    }
    debug!("block done: {:08x?}", state);
}

/// Message padding: a single 1 bit, zeros up to 56 mod 64 bytes,
/// then the message length in bits as a 64-bit big-endian integer.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(message.len() + BLOCK_SIZE + 8);
    padded.extend_from_slice(message);
    append_padding(&mut padded, message.len() as u64);
    padded
}

// `total_len` is the whole message length in bytes, which is more than
// `buf.len()` when earlier blocks were already compressed.
fn append_padding(buf: &mut Vec<u8>, total_len: u64) {
    let bit_len = total_len.wrapping_mul(8);
    buf.push(0x80);
    while buf.len() % BLOCK_SIZE != 56 {
        buf.push(0x00);
    }
    buf.extend_from_slice(&bit_len.to_be_bytes());
}

#[derive(Debug, Clone)]
pub struct Sha256 {
    state: [Word; 8],
    buffer: Vec<u8>,
    length: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    pub fn new() -> Self {
        Sha256 {
            state: INITIAL_HASH,
            buffer: Vec::with_capacity(BLOCK_SIZE),
            length: 0,
        }
    }

    pub fn state(&self) -> &[Word; 8] {
        &self.state
    }

    pub fn update(&mut self, data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);
        self.buffer.extend_from_slice(data);

        let full = self.buffer.len() - self.buffer.len() % BLOCK_SIZE;
        for chunk in self.buffer[..full].chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            compress(&mut self.state, &block);
        }
        self.buffer.drain(..full);
    }

    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        append_padding(&mut self.buffer, self.length);
        debug!(
            "finalize: {} byte message, {} trailing block(s)",
            self.length,
            self.buffer.len() / BLOCK_SIZE
        );

        for chunk in self.buffer.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            compress(&mut self.state, &block);
        }

        let mut out = [0u8; DIGEST_SIZE];
        for (dst, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    // Convenience method to hash data in one go
    pub fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl fmt::Display for Sha256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256 {{ state: [")?;
        for (i, &val) in self.state.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{:08x}", val)?;
        }
        write!(f, "], buffer_len: {}, length: {} }}", self.buffer.len(), self.length)
    }
}

/// Lowercase hex SHA-256 of `data`.
pub fn hex_digest(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
