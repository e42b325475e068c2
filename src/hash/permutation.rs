//! The Keccak-f\[1600\] permutation.
//!
//! The state is 25 lanes of 64 bits, arranged in a 5x5 grid.
//! Lane `(x, y)` lives at index `x + 5 * y`, and lanes are loaded from and
//! stored to bytes in little-endian order.
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::backend;

/// Number of lanes in the state.
pub const LANES: usize = 25;
/// Width of the permutation in bytes.
pub const WIDTH: usize = LANES * 8;
/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Iota constants, one per round.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho offsets, indexed like the state.
pub const ROTATION_OFFSETS: [u32; LANES] = compute_rotation_offsets();

// Walk (x, y) -> (y, 2x + 3y) from (1, 0); the t-th lane visited rotates by (t+1)(t+2)/2.
const fn compute_rotation_offsets() -> [u32; LANES] {
    let mut out = [0; LANES];
    let mut x = 1;
    let mut y = 0;
    let mut t = 0;

    while t < 24 {
        out[x + 5 * y] = (((t + 1) * (t + 2) / 2) % 64) as u32;
        let new_y = (2 * x + 3 * y) % 5;
        x = y;
        y = new_y;
        t += 1;
    }

    out
}

#[inline(always)]
const fn index(x: usize, y: usize) -> usize {
    x + 5 * y
}

pub(crate) fn theta(a: &mut [u64; LANES]) {
    let mut parities = [0u64; 5];
    for x in 0..5 {
        for y in 0..5 {
            parities[x] ^= a[index(x, y)];
        }
    }

    for x in 0..5 {
        let d = parities[(x + 4) % 5] ^ parities[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[index(x, y)] ^= d;
        }
    }
}

pub(crate) fn rho(a: &mut [u64; LANES]) {
    for (lane, offset) in a.iter_mut().zip(ROTATION_OFFSETS) {
        *lane = lane.rotate_left(offset);
    }
}

pub(crate) fn pi(a: &mut [u64; LANES]) {
    let mut moved = [0u64; LANES];
    for x in 0..5 {
        for y in 0..5 {
            moved[index(y, (2 * x + 3 * y) % 5)] = a[index(x, y)];
        }
    }
    *a = moved;
}

pub(crate) fn chi(a: &mut [u64; LANES]) {
    for y in 0..5 {
        let mut row = [0u64; 5];
        row.copy_from_slice(&a[index(0, y)..index(0, y) + 5]);
        for x in 0..5 {
            a[index(x, y)] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

pub(crate) fn iota(a: &mut [u64; LANES], round: usize) {
    a[0] ^= ROUND_CONSTANTS[round];
}

/// Portable Keccak-f\[1600\]: theta, rho, pi, chi and iota over 24 rounds.
pub fn keccak_f1600_generic(a: &mut [u64; LANES]) {
    for round in 0..ROUNDS {
        theta(a);
        rho(a);
        pi(a);
        chi(a);
        iota(a, round);
    }
}

/// The 1600-bit state of a Keccak sponge.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeccakState {
    lanes: [u64; LANES],
}

impl KeccakState {
    pub fn from_lanes(lanes: [u64; LANES]) -> Self {
        Self { lanes }
    }

    pub fn lanes(&self) -> &[u64; LANES] {
        &self.lanes
    }

    /// Apply Keccak-f\[1600\] using the backend selected for this process.
    pub fn permute(&mut self) {
        backend::permute(&mut self.lanes);
    }

    /// XOR `bytes` into the leading bytes of the state.
    pub fn xor_bytes(&mut self, bytes: &[u8]) {
        assert!(bytes.len() <= WIDTH);
        for (lane, chunk) in self.lanes.iter_mut().zip(bytes.chunks(8)) {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(word);
        }
    }

    /// Copy the leading bytes of the state into `out`.
    pub fn extract_bytes(&self, out: &mut [u8]) {
        assert!(out.len() <= WIDTH);
        for (chunk, lane) in out.chunks_mut(8).zip(self.lanes.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes()[..chunk.len()]);
        }
    }

    pub fn to_bytes(&self) -> [u8; WIDTH] {
        let mut out = [0u8; WIDTH];
        self.extract_bytes(&mut out);
        out
    }

    pub fn from_bytes(bytes: &[u8; WIDTH]) -> Self {
        let mut state = Self::default();
        state.xor_bytes(bytes);
        state
    }
}

impl core::fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakState").finish_non_exhaustive()
    }
}
