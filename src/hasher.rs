use core::marker::PhantomData;

use digest::Output;
use zeroize::Zeroize;

use crate::hash::permutation::{KeccakState, WIDTH};
use crate::hash::sponge::{self, Phase};
use crate::hash::{Keccak256Params, Keccak512Params, Variant};

/// Keccak-256 with the original (pre-SHA-3) padding.
pub type Keccak256 = LegacyKeccak<Keccak256Params>;
/// Keccak-512 with the original (pre-SHA-3) padding.
pub type Keccak512 = LegacyKeccak<Keccak512Params>;

/// An incremental Keccak hasher.
///
/// Input is buffered until a full block of [`Variant::RATE`] bytes is available,
/// then absorbed. Reading the digest with [`LegacyKeccak::sum`] works on a copy
/// of the state: the hasher keeps absorbing as if `sum` was never called.
#[derive(Clone)]
pub struct LegacyKeccak<V: Variant> {
    pub(crate) state: KeccakState,
    /// Bytes not yet absorbed; only the first `buffered` are meaningful.
    pub(crate) buffer: [u8; WIDTH],
    pub(crate) buffered: usize,
    /// Total number of bytes written since construction.
    pub(crate) absorbed: u64,
    /// Always [`Phase::Absorbing`]: finalization runs on a copy.
    /// Kept so snapshots record the phase and reject anything else.
    pub(crate) phase: Phase,
    _variant: PhantomData<V>,
}

impl<V: Variant> LegacyKeccak<V> {
    /// Initializes a hasher with an all-zero state.
    pub fn new() -> Self {
        Self {
            state: KeccakState::default(),
            buffer: [0u8; WIDTH],
            buffered: 0,
            absorbed: 0,
            phase: Phase::Absorbing,
            _variant: PhantomData,
        }
    }

    /// Absorbs `input`.
    ///
    /// Chunking does not matter: `write(a); write(b)` is the same as `write(a ++ b)`.
    pub fn write(&mut self, input: &[u8]) {
        self.absorb(input)
    }

    pub(crate) fn absorb(&mut self, mut input: &[u8]) {
        self.absorbed = self.absorbed.wrapping_add(input.len() as u64);

        if self.buffered > 0 {
            let chunk_len = usize::min(input.len(), V::RATE - self.buffered);
            let (chunk, rest) = input.split_at(chunk_len);
            self.buffer[self.buffered..self.buffered + chunk_len].copy_from_slice(chunk);
            self.buffered += chunk_len;
            input = rest;

            if self.buffered < V::RATE {
                return;
            }
            sponge::absorb_block(&mut self.state, &self.buffer[..V::RATE]);
            self.buffer[..V::RATE].zeroize();
            self.buffered = 0;
        }

        let mut blocks = input.chunks_exact(V::RATE);
        for block in &mut blocks {
            sponge::absorb_block(&mut self.state, block);
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Writes the digest of everything written so far into `out`.
    ///
    /// # Panics
    ///
    /// If `out` is not [`Variant::OUTPUT_LEN`] bytes long.
    pub fn sum_into(&self, out: &mut [u8]) {
        assert_eq!(out.len(), V::OUTPUT_LEN, "digest length");
        debug_assert_eq!(self.phase, Phase::Absorbing);
        // The copy is wiped when dropped.
        let mut state = self.state.clone();
        sponge::finalize(
            &mut state,
            &self.buffer[..self.buffered],
            V::RATE,
            V::DSBYTE,
            out,
        );
    }

    /// The digest of everything written so far.
    pub fn sum(&self) -> Output<Self> {
        let mut out = Output::<Self>::default();
        self.sum_into(&mut out);
        out
    }

    /// Appends the digest to `buf` and returns it.
    pub fn append_sum(&self, mut buf: Vec<u8>) -> Vec<u8> {
        let start = buf.len();
        buf.resize(start + V::OUTPUT_LEN, 0);
        self.sum_into(&mut buf[start..]);
        buf
    }

    /// Returns the hasher to its freshly constructed state.
    pub fn reset(&mut self) {
        self.reinit()
    }

    pub(crate) fn reinit(&mut self) {
        self.zeroize();
        self.phase = Phase::Absorbing;
    }

    /// Digest length in bytes.
    pub fn size(&self) -> usize {
        V::OUTPUT_LEN
    }

    /// Rate in bytes.
    pub fn block_size(&self) -> usize {
        V::RATE
    }

    /// Number of bytes written since construction or the last reset.
    pub fn bytes_absorbed(&self) -> u64 {
        self.absorbed
    }
}

impl<V: Variant> Default for LegacyKeccak<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Zeroize for LegacyKeccak<V> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.buffered.zeroize();
        self.absorbed.zeroize();
    }
}

impl<V: Variant> Drop for LegacyKeccak<V> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<V: Variant> core::fmt::Debug for LegacyKeccak<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct(V::NAME)
            .field("absorbed", &self.absorbed)
            .finish_non_exhaustive()
    }
}

/// Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.write(data);
    let mut out = [0u8; 32];
    hasher.sum_into(&mut out);
    out
}

/// Keccak-512 digest of `data`.
pub fn keccak512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Keccak512::new();
    hasher.write(data);
    let mut out = [0u8; 64];
    hasher.sum_into(&mut out);
    out
}
