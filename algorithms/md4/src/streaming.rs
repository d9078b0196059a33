//! Streaming Hasher
//!
//! Incremental MD4 over arbitrarily chunked input with fixed 88-byte state.
//! The context is wiped on finalization and again when the hasher is dropped.

use crate::kernels::constants::HASH_SIZE;
use crate::kernels::portable::Md4Context;
use crate::method::HashMethod;
use crate::types::{HashMethodInfo, OutputSizeError, MD4_METHOD};

#[cfg(feature = "digest-trait")]
use digest::typenum::U16;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming MD4 hasher.
#[derive(Clone, Debug, Default)]
pub struct Md4Hasher {
    ctx: Md4Context,
}

impl Md4Hasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create new streaming hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ctx: Md4Context::new(),
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    ///
    /// Complete blocks are compressed directly from `data`; only the
    /// remainder (< 64 bytes) is kept for the next call.
    pub fn update(&mut self, data: &[u8]) {
        self.ctx.update(data);
    }

    /// Finalize and return hash.
    #[must_use]
    pub fn finalize(mut self) -> [u8; HASH_SIZE] {
        self.ctx.finalize()
    }

    /// Reset hasher for reuse.
    pub const fn reset(&mut self) {
        self.ctx.init();
    }

    /// Inner context, for inspection.
    #[doc(hidden)]
    pub const fn context(&self) -> &Md4Context {
        &self.ctx
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl HashMethod for Md4Hasher {
    fn info(&self) -> &'static HashMethodInfo {
        &MD4_METHOD
    }

    fn init(&mut self) {
        self.reset();
    }

    fn absorb(&mut self, chunk: &[u8]) {
        self.update(chunk);
    }

    fn extract(&mut self, out: &mut [u8]) -> Result<(), OutputSizeError> {
        let actual = out.len();
        let out: &mut [u8; HASH_SIZE] = out
            .try_into()
            .map_err(|_| OutputSizeError::new(HASH_SIZE, actual))?;
        self.ctx.finalize_into(out);
        Ok(())
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Md4Hasher {
    type OutputSize = U16;
}

#[cfg(feature = "digest-trait")]
impl Update for Md4Hasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Md4Hasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Md4Hasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Md4Hasher {}
