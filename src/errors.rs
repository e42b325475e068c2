/// The [`legacy_keccak`](crate) package has two kinds of errors.
///
/// - [`SnapshotError`], returned when restoring a hasher from a serialized snapshot.
///   Restoring is the only fallible operation on a hasher: absorbing, finalizing and
///   resetting never fail. A snapshot is rejected when its length is wrong, when it was
///   produced by a different variant (rate, output length or domain separator differ),
///   or when its bookkeeping is inconsistent. The precise reason is carried in [`CorruptState`].
///
/// - [`BackendError`], returned when configuring which implementation of the
///   Keccak-f\[1600\] permutation the process uses.
///
/// A [`core::result::Result`] wrapper called [`SnapshotResult`] (having error fixed to [`SnapshotError`]) is also provided.
use std::{error::Error, fmt::Display};

/// Reason a serialized snapshot was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorruptState {
    /// The snapshot does not have the size expected for the target variant.
    Length { expected: usize, actual: usize },
    /// The snapshot does not start with the expected format tag.
    Magic,
    /// The snapshot was taken from a hasher with a different configuration.
    Config {
        rate: u8,
        output_len: u8,
        dsbyte: u8,
    },
    /// The snapshot records a phase other than absorbing.
    Phase(u8),
    /// The pending buffer is not shorter than one block, or has stray bytes past its end.
    BufferLength { len: usize, rate: usize },
    /// The absorbed byte count disagrees with the pending buffer length.
    Accounting,
}

/// An error happened when restoring a hasher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The serialized state is malformed or belongs to another configuration.
    CorruptState(CorruptState),
}

/// The result type when restoring a hasher from a snapshot.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// An error happened when selecting the permutation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend was already selected; it cannot change for the lifetime of the process.
    AlreadyInitialized,
    /// The backend name is not recognized.
    Unknown(String),
}

impl Display for CorruptState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length { expected, actual } => {
                write!(f, "expected {} bytes, got {}", expected, actual)
            }
            Self::Magic => write!(f, "unrecognized format tag"),
            Self::Config {
                rate,
                output_len,
                dsbyte,
            } => write!(
                f,
                "configuration mismatch (rate {}, output length {}, domain separator {:#04x})",
                rate, output_len, dsbyte
            ),
            Self::Phase(phase) => write!(f, "unexpected sponge phase {}", phase),
            Self::BufferLength { len, rate } => {
                write!(f, "invalid pending buffer of {} bytes for rate {}", len, rate)
            }
            Self::Accounting => write!(f, "absorbed length disagrees with pending buffer"),
        }
    }
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CorruptState(reason) => write!(f, "Corrupt state: {}", reason),
        }
    }
}

impl Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "Backend already selected"),
            Self::Unknown(name) => write!(f, "Unknown backend {:?}", name),
        }
    }
}

impl Error for SnapshotError {}
impl Error for BackendError {}

impl From<CorruptState> for SnapshotError {
    fn from(value: CorruptState) -> Self {
        SnapshotError::CorruptState(value)
    }
}
