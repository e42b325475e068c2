//! This module holds the sponge machinery behind the hashers:
//!
//! - [`permutation`] implements Keccak-f\[1600\] over a [`KeccakState`] of 25 lanes;
//! - [`backend`] picks, once per process, which implementation of the permutation runs;
//! - [`sponge`] absorbs blocks, applies the legacy multi-rate padding and squeezes output.
//!
//! A [`Variant`] fixes the rate, digest length and domain separator of a hasher.

/// Permutation backend selection.
pub mod backend;
/// Keccak-f\[1600\].
pub mod permutation;
/// Sponge primitives.
pub mod sponge;

use digest::generic_array::ArrayLength;
use digest::typenum::{U136, U32, U64, U72};

pub use backend::Backend;
pub use permutation::KeccakState;

/// Domain separator of the original Keccak submission.
pub const DSBYTE_KECCAK: u8 = 0x01;

/// Configuration of a Keccak hash function.
///
/// **HAZARD**: the rate sets the security level of the construction.
/// Use [`Keccak256Params`] or [`Keccak512Params`] unless you know what you are doing.
pub trait Variant: Clone + Default + 'static {
    /// Bytes absorbed or squeezed per permutation call.
    const RATE: usize;
    /// Bytes of the state never exposed, `200 - RATE`.
    const CAPACITY: usize = permutation::WIDTH - Self::RATE;
    /// Digest length in bytes.
    const OUTPUT_LEN: usize;
    /// Byte appended to the message before padding.
    const DSBYTE: u8;
    /// Human readable name.
    const NAME: &'static str;

    /// [`Self::OUTPUT_LEN`] as a type-level integer.
    type OutputSize: ArrayLength<u8> + 'static;
    /// [`Self::RATE`] as a type-level integer.
    type BlockSize: ArrayLength<u8> + 'static;
}

/// Keccak-256: rate 136, 32-byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Params;

/// Keccak-512: rate 72, 64-byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak512Params;

impl Variant for Keccak256Params {
    const RATE: usize = 136;
    const OUTPUT_LEN: usize = 32;
    const DSBYTE: u8 = DSBYTE_KECCAK;
    const NAME: &'static str = "Keccak-256";

    type OutputSize = U32;
    type BlockSize = U136;
}

impl Variant for Keccak512Params {
    const RATE: usize = 72;
    const OUTPUT_LEN: usize = 64;
    const DSBYTE: u8 = DSBYTE_KECCAK;
    const NAME: &'static str = "Keccak-512";

    type OutputSize = U64;
    type BlockSize = U72;
}

const _: () = assert!(Keccak256Params::RATE + Keccak256Params::CAPACITY == permutation::WIDTH);
const _: () = assert!(Keccak512Params::RATE + Keccak512Params::CAPACITY == permutation::WIDTH);
const _: () = assert!(Keccak256Params::OUTPUT_LEN <= Keccak256Params::RATE);
const _: () = assert!(Keccak512Params::OUTPUT_LEN <= Keccak512Params::RATE);
