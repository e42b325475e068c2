//! Absorb, pad and squeeze on top of Keccak-f\[1600\].
//!
//! These are the primitives of the sponge construction; they know the rate
//! they are given and nothing about the digest length.
use core::ops::Deref;

use super::permutation::{KeccakState, WIDTH};

/// Sponge phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Input is being XORed into the state, one block at a time.
    Absorbing,
    /// Padding was applied and output is being read.
    Squeezing,
}

impl Phase {
    pub(crate) fn to_byte(self) -> u8 {
        match self {
            Self::Absorbing => 0,
            Self::Squeezing => 1,
        }
    }

    pub(crate) fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Absorbing),
            1 => Some(Self::Squeezing),
            _ => None,
        }
    }
}

/// XOR a full block into the state and permute.
pub fn absorb_block(state: &mut KeccakState, block: &[u8]) {
    assert!(!block.is_empty() && block.len() < WIDTH);
    state.xor_bytes(block);
    state.permute();
}

/// One rate-sized block produced by [`Padding`].
#[derive(Clone)]
pub struct Block {
    bytes: [u8; WIDTH],
    len: usize,
}

impl Deref for Block {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Multi-rate padding of a message tail.
///
/// Yields the full blocks of `bytes`, then a final block holding the remaining
/// bytes followed by the domain separator, zeros, and `0x80` ORed into the last byte.
/// When fewer than `rate` bytes are left the padding fits a single block; a domain
/// separator landing on the last byte of the block shares it with the `0x80` bit.
/// A tail of exactly `rate` bytes is emitted whole and the padding spills into a block of its own.
pub struct Padding<'a> {
    bytes: &'a [u8],
    rate: usize,
    dsbyte: u8,
    done: bool,
}

impl<'a> Padding<'a> {
    pub fn new(bytes: &'a [u8], rate: usize, dsbyte: u8) -> Self {
        assert!(rate > 0 && rate < WIDTH);
        Self {
            bytes,
            rate,
            dsbyte,
            done: false,
        }
    }
}

impl<'a> Iterator for Padding<'a> {
    type Item = Block;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut block = Block {
            bytes: [0; WIDTH],
            len: self.rate,
        };

        if self.bytes.len() >= self.rate {
            let (head, rest) = self.bytes.split_at(self.rate);
            block.bytes[..self.rate].copy_from_slice(head);
            self.bytes = rest;
        } else {
            let tail = self.bytes.len();
            block.bytes[..tail].copy_from_slice(self.bytes);
            block.bytes[tail] ^= self.dsbyte;
            block.bytes[self.rate - 1] |= 0x80;
            self.bytes = &[];
            self.done = true;
        }

        Some(block)
    }
}

/// The final block(s) to absorb for the unabsorbed tail `buffered`.
pub fn pad(buffered: &[u8], rate: usize, dsbyte: u8) -> Padding<'_> {
    Padding::new(buffered, rate, dsbyte)
}

/// Read `out.len()` bytes from a state whose absorb phase is over,
/// permuting again every `rate` bytes.
pub fn squeeze(state: &mut KeccakState, rate: usize, out: &mut [u8]) {
    assert!(rate > 0 && rate < WIDTH);
    let mut chunks = out.chunks_mut(rate).peekable();
    while let Some(chunk) = chunks.next() {
        state.extract_bytes(chunk);
        if chunks.peek().is_some() {
            state.permute();
        }
    }
}

/// Pad, absorb the final block(s) and squeeze `out.len()` bytes.
pub fn finalize(state: &mut KeccakState, buffered: &[u8], rate: usize, dsbyte: u8, out: &mut [u8]) {
    for block in pad(buffered, rate, dsbyte) {
        absorb_block(state, &block);
    }
    squeeze(state, rate, out);
}
