//! Selection of the Keccak-f\[1600\] implementation.
//!
//! Two interchangeable implementations exist:
//!
//! - [`Backend::Generic`], the portable round function of this crate
//!   ([`keccak_f1600_generic`](super::permutation::keccak_f1600_generic)),
//! - [`Backend::Accelerated`], [`keccak::f1600`], unrolled and, with the `asm` feature,
//!   using the ARMv8 SHA-3 instructions where the CPU has them.
//!
//! Both are bit-exact; the choice only affects speed.
//! The backend is picked once, on the first permutation call, and cached for the lifetime
//! of the process. Before that it may be forced with [`set_override`] or by setting the
//! `LEGACY_KECCAK_BACKEND` environment variable to `generic` or `accelerated`.
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

use super::permutation::{keccak_f1600_generic, LANES};
use crate::errors::BackendError;

/// Environment variable consulted on first use.
pub const BACKEND_ENV: &str = "LEGACY_KECCAK_BACKEND";

/// A Keccak-f\[1600\] implementation.
pub type PermuteFn = fn(&mut [u64; LANES]);

/// Available permutation backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Generic,
    Accelerated,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Accelerated => "accelerated",
        }
    }

    pub fn permute_fn(self) -> PermuteFn {
        match self {
            Self::Generic => keccak_f1600_generic,
            Self::Accelerated => keccak::f1600,
        }
    }

    /// Default backend.
    ///
    /// Always [`Backend::Accelerated`]; no CPU probing happens here.
    /// [`keccak::f1600`] is never slower than the generic round function, and with
    /// the `asm` feature the `keccak` crate checks for the SHA-3 extension itself
    /// (through `cpufeatures`), falling back to its portable code.
    pub fn detect() -> Self {
        Self::Accelerated
    }
}

impl FromStr for Backend {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" | "portable" => Ok(Self::Generic),
            "accelerated" | "fast" => Ok(Self::Accelerated),
            _ => Err(BackendError::Unknown(s.to_string())),
        }
    }
}

struct Selected {
    backend: Backend,
    permute: PermuteFn,
}

static SELECTED: OnceLock<Selected> = OnceLock::new();
static OVERRIDE: RwLock<Option<Backend>> = RwLock::new(None);

/// Force a backend. Only allowed before the first permutation.
pub fn set_override(backend: Backend) -> Result<(), BackendError> {
    if SELECTED.get().is_some() {
        return Err(BackendError::AlreadyInitialized);
    }
    let mut guard = OVERRIDE.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(backend);
    Ok(())
}

fn env_override() -> Option<Backend> {
    let value = std::env::var(BACKEND_ENV).ok()?;
    match value.parse() {
        Ok(backend) => Some(backend),
        Err(e) => {
            log::warn!("ignoring {}: {}", BACKEND_ENV, e);
            None
        }
    }
}

fn select() -> Selected {
    let forced = OVERRIDE
        .read()
        .map(|guard| *guard)
        .unwrap_or_else(|poisoned| *poisoned.into_inner());
    let backend = forced.or_else(env_override).unwrap_or_else(Backend::detect);
    log::debug!("keccak-f[1600] backend: {}", backend.name());
    Selected {
        backend,
        permute: backend.permute_fn(),
    }
}

fn selected() -> &'static Selected {
    SELECTED.get_or_init(select)
}

/// The backend in use by this process.
pub fn active() -> Backend {
    selected().backend
}

#[inline]
pub(crate) fn permute(lanes: &mut [u64; LANES]) {
    (selected().permute)(lanes)
}
