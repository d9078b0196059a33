//! Shared types used across the MD4 library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::{BLOCK_SIZE, HASH_SIZE, NAME};
use crate::kernels::portable::Md4Context;

// =============================================================================
// METHOD METADATA
// =============================================================================

/// Fixed metadata a host needs to drive a hash method it selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashMethodInfo {
    /// Lowercase algorithm name, e.g. `"md4"`.
    pub name: &'static str,
    /// Input block size in bytes.
    pub block_size: usize,
    /// Size of one context in bytes.
    pub context_size: usize,
    /// Digest size in bytes.
    pub digest_size: usize,
}

/// Metadata of the MD4 method.
pub static MD4_METHOD: HashMethodInfo = HashMethodInfo {
    name: NAME,
    block_size: BLOCK_SIZE,
    context_size: core::mem::size_of::<Md4Context>(),
    digest_size: HASH_SIZE,
};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Output buffer handed to `extract` has the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSizeError {
    expected: usize,
    actual: usize,
}

impl OutputSizeError {
    /// Create a new `OutputSizeError` for a buffer of `actual` bytes.
    pub const fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }

    /// Digest size the method writes.
    pub const fn expected(&self) -> usize {
        self.expected
    }

    /// Length of the buffer that was supplied.
    pub const fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for OutputSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "digest output buffer must be exactly {} bytes, got {}",
            self.expected, self.actual
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for OutputSizeError {}
