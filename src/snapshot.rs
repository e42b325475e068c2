//! Serialization of a hasher's mid-computation state.
//!
//! The encoding is private to this crate and only guaranteed to round-trip within the same version:
//!
//! ```text
//! magic "kcc\x01" | rate | output length | domain separator | phase
//! | state (200 bytes, lanes little-endian) | buffered length
//! | buffer (rate bytes, zero past buffered length) | absorbed (u64 little-endian)
//! ```
use crate::errors::{CorruptState, SnapshotResult};
use crate::hash::permutation::{KeccakState, WIDTH};
use crate::hash::sponge::Phase;
use crate::hash::Variant;
use crate::hasher::LegacyKeccak;

const MAGIC: &[u8; 4] = b"kcc\x01";
const HEADER_LEN: usize = MAGIC.len() + 4;

/// Size of the snapshot of a hasher of variant `V`.
pub const fn snapshot_len<V: Variant>() -> usize {
    HEADER_LEN + WIDTH + 1 + V::RATE + 8
}

/// Encode the full state of `hasher`.
pub fn marshal<V: Variant>(hasher: &LegacyKeccak<V>) -> Vec<u8> {
    let mut out = Vec::with_capacity(snapshot_len::<V>());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&[
        V::RATE as u8,
        V::OUTPUT_LEN as u8,
        V::DSBYTE,
        hasher.phase.to_byte(),
    ]);
    out.extend_from_slice(&hasher.state.to_bytes());
    out.push(hasher.buffered as u8);
    out.extend_from_slice(&hasher.buffer[..hasher.buffered]);
    out.resize(out.len() + V::RATE - hasher.buffered, 0);
    out.extend_from_slice(&hasher.absorbed.to_le_bytes());
    debug_assert_eq!(out.len(), snapshot_len::<V>());
    out
}

/// Restore `hasher` from a snapshot produced by [`marshal`].
///
/// On error `hasher` is left untouched.
pub fn unmarshal<V: Variant>(hasher: &mut LegacyKeccak<V>, bytes: &[u8]) -> SnapshotResult<()> {
    let result = decode::<V>(bytes);
    if let Err(e) = &result {
        log::debug!("rejected {} snapshot: {}", V::NAME, e);
    }
    let (state, buffer, buffered, absorbed) = result?;

    hasher.state = state;
    hasher.buffer[..V::RATE].copy_from_slice(buffer);
    hasher.buffer[V::RATE..].fill(0);
    hasher.buffered = buffered;
    hasher.absorbed = absorbed;
    hasher.phase = Phase::Absorbing;
    Ok(())
}

fn decode<V: Variant>(bytes: &[u8]) -> Result<(KeccakState, &[u8], usize, u64), CorruptState> {
    let expected = snapshot_len::<V>();
    if bytes.len() != expected {
        return Err(CorruptState::Length {
            expected,
            actual: bytes.len(),
        });
    }

    let (magic, rest) = bytes.split_at(MAGIC.len());
    if magic != MAGIC {
        return Err(CorruptState::Magic);
    }

    let (config, rest) = rest.split_at(4);
    let (rate, output_len, dsbyte, phase) = (config[0], config[1], config[2], config[3]);
    if usize::from(rate) != V::RATE
        || usize::from(output_len) != V::OUTPUT_LEN
        || dsbyte != V::DSBYTE
    {
        return Err(CorruptState::Config {
            rate,
            output_len,
            dsbyte,
        });
    }
    // Finalization runs on a copy, so a live hasher is always absorbing.
    if Phase::from_byte(phase) != Some(Phase::Absorbing) {
        return Err(CorruptState::Phase(phase));
    }

    let (state_bytes, rest) = rest.split_at(WIDTH);
    let mut lanes = [0u8; WIDTH];
    lanes.copy_from_slice(state_bytes);
    let state = KeccakState::from_bytes(&lanes);

    let buffered = usize::from(rest[0]);
    let (buffer, absorbed) = rest[1..].split_at(V::RATE);
    if buffered >= V::RATE || buffer[buffered..].iter().any(|&b| b != 0) {
        return Err(CorruptState::BufferLength {
            len: buffered,
            rate: V::RATE,
        });
    }

    let mut word = [0u8; 8];
    word.copy_from_slice(absorbed);
    let absorbed = u64::from_le_bytes(word);
    if absorbed % V::RATE as u64 != buffered as u64 {
        return Err(CorruptState::Accounting);
    }

    Ok((state, buffer, buffered, absorbed))
}

impl<V: Variant> LegacyKeccak<V> {
    /// Serializes the hasher; see [`marshal`].
    pub fn marshal(&self) -> Vec<u8> {
        marshal(self)
    }

    /// Restores the hasher from a snapshot; see [`unmarshal`].
    pub fn unmarshal(&mut self, bytes: &[u8]) -> SnapshotResult<()> {
        unmarshal(self, bytes)
    }

    /// A new hasher restored from a snapshot.
    pub fn from_snapshot(bytes: &[u8]) -> SnapshotResult<Self> {
        let mut hasher = Self::new();
        hasher.unmarshal(bytes)?;
        Ok(hasher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SnapshotError;
    use crate::{Keccak256, Keccak512};

    #[test]
    fn test_layout() {
        let mut hasher = Keccak256::new();
        hasher.write(b"hello");
        let snapshot = hasher.marshal();
        assert_eq!(snapshot.len(), 8 + 200 + 1 + 136 + 8);
        assert_eq!(&snapshot[..4], b"kcc\x01");
        assert_eq!(&snapshot[4..8], &[136, 32, 0x01, 0]);
        // Nothing absorbed yet: the state is zero, the input sits in the buffer.
        assert!(snapshot[8..208].iter().all(|&b| b == 0));
        assert_eq!(snapshot[208], 5);
        assert_eq!(&snapshot[209..214], b"hello");
        assert_eq!(&snapshot[snapshot.len() - 8..], &5u64.to_le_bytes());
        assert_eq!(snapshot_len::<crate::hash::Keccak512Params>(), 8 + 200 + 1 + 72 + 8);
    }

    #[test]
    fn test_variant_mismatch() {
        let snapshot = Keccak256::new().marshal();
        let mut other = Keccak512::new();
        assert!(matches!(
            other.unmarshal(&snapshot),
            Err(SnapshotError::CorruptState(CorruptState::Length { .. }))
        ));
    }

    #[test]
    fn test_config_tag_mismatch() {
        let mut snapshot = Keccak256::new().marshal();
        snapshot[6] = 0x06;
        assert_eq!(
            Keccak256::from_snapshot(&snapshot).unwrap_err(),
            SnapshotError::CorruptState(CorruptState::Config {
                rate: 136,
                output_len: 32,
                dsbyte: 0x06
            })
        );
    }

    #[test]
    fn test_bad_magic_and_phase() {
        let mut snapshot = Keccak256::new().marshal();
        snapshot[0] = b'x';
        assert_eq!(
            Keccak256::from_snapshot(&snapshot).unwrap_err(),
            SnapshotError::from(CorruptState::Magic)
        );

        let mut snapshot = Keccak256::new().marshal();
        snapshot[7] = Phase::Squeezing.to_byte();
        assert_eq!(
            Keccak256::from_snapshot(&snapshot).unwrap_err(),
            SnapshotError::from(CorruptState::Phase(1))
        );
    }

    #[test]
    fn test_inconsistent_buffer() {
        let mut hasher = Keccak512::new();
        hasher.write(b"abc");

        let mut snapshot = hasher.marshal();
        snapshot[208] = 72;
        assert!(matches!(
            Keccak512::from_snapshot(&snapshot),
            Err(SnapshotError::CorruptState(CorruptState::BufferLength { len: 72, rate: 72 }))
        ));

        let mut snapshot = hasher.marshal();
        snapshot[208] = 2;
        assert!(matches!(
            Keccak512::from_snapshot(&snapshot),
            Err(SnapshotError::CorruptState(CorruptState::BufferLength { .. }))
        ));

        let mut snapshot = hasher.marshal();
        let n = snapshot.len();
        snapshot[n - 8] = 4;
        assert_eq!(
            Keccak512::from_snapshot(&snapshot).unwrap_err(),
            SnapshotError::from(CorruptState::Accounting)
        );
    }

    #[test]
    fn test_failed_unmarshal_leaves_hasher_untouched() {
        let mut hasher = Keccak256::new();
        hasher.write(b"keep me");
        let before = hasher.sum();
        let snapshot = hasher.marshal();

        assert!(hasher.unmarshal(&snapshot[..snapshot.len() - 1]).is_err());
        assert_eq!(hasher.sum(), before);
        assert_eq!(hasher.bytes_absorbed(), 7);
    }
}
