//!
//! Keccak-256 and Keccak-512 as originally submitted to the SHA-3 competition.
//!
//! These hashes use the original multi-rate padding with domain separator `0x01`,
//! and their digests differ from the standardized SHA3-256 and SHA3-512 (domain separator `0x06`).
//! Use them only where compatibility with an existing system requires it, such as
//! address derivation or state commitments.
//!
//! # Overview
//!
//! The crate is built in layers:
//!
//! - the Keccak-f\[1600\] permutation ([`hash::permutation`]), with a portable
//!   implementation and an accelerated one chosen once per process ([`hash::backend`]);
//! - the sponge primitives: absorb a block, pad, squeeze ([`hash::sponge`]);
//! - the incremental hasher [`LegacyKeccak`], parameterized by a [`hash::Variant`]
//!   ([`Keccak256`], [`Keccak512`]);
//! - snapshots of a hasher's state, to suspend and resume a computation ([`snapshot`]).
//!
//! ```
//! use legacy_keccak::Keccak256;
//!
//! let mut hasher = Keccak256::new();
//! hasher.write(b"a");
//! hasher.write(b"bc");
//! // Reading the digest does not consume the hasher.
//! let digest = hasher.sum();
//! assert_eq!(digest, hasher.sum());
//! assert_eq!(digest[..], legacy_keccak::keccak256(b"abc"));
//! ```
//!
//! A hasher can be serialized in the middle of a computation and restored later,
//! possibly in another process running the same version of this crate:
//!
//! ```
//! use legacy_keccak::Keccak512;
//!
//! let mut hasher = Keccak512::new();
//! hasher.write(b"hello");
//! let snapshot = hasher.marshal();
//!
//! let mut restored = Keccak512::from_snapshot(&snapshot).unwrap();
//! hasher.write(b" world");
//! restored.write(b" world");
//! assert_eq!(hasher.sum(), restored.sum());
//! ```
//!
//! The hashers implement the [`digest`] traits, so [`digest::Digest`] works as well.
//!
//! # Configuration
//!
//! - Cargo feature `asm` enables the assembly backend of the [`keccak`](https://crates.io/crates/keccak) crate.
//! - The environment variable `LEGACY_KECCAK_BACKEND` (`generic` or `accelerated`)
//!   forces a permutation backend; see [`hash::backend`].
//!
//! No operation is constant-time: this is a public hash function.

/// Built-in error types.
mod errors;
/// Sponge construction and the Keccak-f\[1600\] permutation.
pub mod hash;
/// The incremental hasher.
mod hasher;
/// Serialized hasher state.
pub mod snapshot;
/// `digest` and `std::io` integration.
mod traits;

pub use errors::{BackendError, CorruptState, SnapshotError, SnapshotResult};
pub use hash::{Keccak256Params, Keccak512Params, Variant};
pub use hasher::{keccak256, keccak512, Keccak256, Keccak512, LegacyKeccak};

/// Re-export of the [`digest`] crate.
pub use digest;
