//! Forcing a backend before the first permutation.
//!
//! Runs in its own process: the backend is chosen once per process.

use legacy_keccak::hash::backend::{active, set_override};
use legacy_keccak::hash::Backend;
use legacy_keccak::{keccak256, BackendError};

#[test]
fn test_override_before_first_use() {
    set_override(Backend::Generic).unwrap();
    assert_eq!(active(), Backend::Generic);

    assert_eq!(
        keccak256(b"abc")[..],
        hex::decode("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
            .unwrap()[..]
    );
    assert_eq!(
        set_override(Backend::Accelerated),
        Err(BackendError::AlreadyInitialized)
    );
    assert_eq!(active(), Backend::Generic);
}
