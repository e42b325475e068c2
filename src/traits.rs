//! Bridges to the [`digest`] traits and to [`std::io::Write`].
//!
//! With these, [`LegacyKeccak`] can be used wherever a [`digest::Digest`] is expected:
//!
//! ```
//! use legacy_keccak::Keccak256;
//! use digest::Digest;
//!
//! let digest = Keccak256::digest(b"abc");
//! assert_eq!(digest[..4], [0x4e, 0x03, 0x65, 0x7a]);
//! ```
use digest::core_api::BlockSizeUser;
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update};

use crate::hash::Variant;
use crate::hasher::LegacyKeccak;

impl<V: Variant> HashMarker for LegacyKeccak<V> {}

impl<V: Variant> OutputSizeUser for LegacyKeccak<V> {
    type OutputSize = V::OutputSize;
}

impl<V: Variant> BlockSizeUser for LegacyKeccak<V> {
    type BlockSize = V::BlockSize;
}

impl<V: Variant> Update for LegacyKeccak<V> {
    fn update(&mut self, data: &[u8]) {
        self.absorb(data)
    }
}

impl<V: Variant> FixedOutput for LegacyKeccak<V> {
    fn finalize_into(self, out: &mut Output<Self>) {
        self.sum_into(out)
    }
}

impl<V: Variant> Reset for LegacyKeccak<V> {
    fn reset(&mut self) {
        self.reinit()
    }
}

impl<V: Variant> FixedOutputReset for LegacyKeccak<V> {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        self.sum_into(out);
        self.reinit()
    }
}

impl<V: Variant> std::io::Write for LegacyKeccak<V> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.absorb(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use digest::core_api::BlockSizeUser;
    use digest::Digest;

    use crate::{Keccak256, Keccak512};

    #[test]
    fn test_digest_api() {
        let mut hasher = <Keccak512 as Digest>::new();
        Digest::update(&mut hasher, b"ab");
        Digest::update(&mut hasher, b"c");
        assert_eq!(hasher.sum(), Digest::finalize(hasher.clone()));
        assert_eq!(<Keccak512 as Digest>::output_size(), 64);
        assert_eq!(<Keccak256 as BlockSizeUser>::block_size(), 136);
    }

    #[test]
    fn test_finalize_reset() {
        let mut hasher = Keccak256::new();
        Digest::update(&mut hasher, b"garbage");
        let first = hasher.finalize_reset();
        assert_eq!(first, Keccak256::digest(b"garbage"));
        assert_eq!(hasher.bytes_absorbed(), 0);
        assert_eq!(hasher.finalize_reset(), Keccak256::digest(b""));
    }

    #[test]
    fn test_io_write() {
        let mut hasher = Keccak256::new();
        let data = vec![0x5a; 1000];
        std::io::copy(&mut &data[..], &mut hasher).unwrap();
        hasher.flush().unwrap();
        assert_eq!(hasher.sum(), Keccak256::digest(&data));
    }
}
