//! Streaming context: chaining state, byte counter and pending block.

use core::fmt;

use zeroize::Zeroize;

use super::compress;
use crate::kernels::constants::{BLOCK_MASK, BLOCK_SIZE, INIT_STATE};

// =============================================================================
// CONTEXT
// =============================================================================

/// Incremental MD4 state.
///
/// `#[repr(C)]` pins the layout (16 + 8 + 64 = 88 bytes) so C hosts can
/// allocate contexts from `context_size` alone.
///
/// Invariant between calls: the first `byte_count() % 64` bytes of the
/// buffer are the unprocessed tail of the message.
#[derive(Clone)]
#[repr(C)]
pub struct Md4Context {
    /// Chaining values `(a, b, c, d)`.
    pub(super) state: [u32; 4],
    /// Total message bytes absorbed, modulo 2^64.
    pub(super) len: u64,
    /// Pending partial block.
    pub(super) buffer: [u8; BLOCK_SIZE],
}

impl Md4Context {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a freshly initialized context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INIT_STATE,
            len: 0,
            buffer: [0u8; BLOCK_SIZE],
        }
    }

    /// Reinitialize in place. Required before reusing a finalized context.
    pub const fn init(&mut self) {
        self.state = INIT_STATE;
        self.len = 0;
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Absorb `data`. Any chunking of the message yields the same digest.
    ///
    /// Whole blocks are compressed straight from `data`; only the head
    /// needed to complete a pending block and the final tail are copied.
    #[allow(clippy::cast_possible_truncation)] // masked to 6 bits
    pub fn update(&mut self, mut data: &[u8]) {
        if data.is_empty() {
            return;
        }
        debug_assert!(
            !self.is_erased(),
            "update() on a finalized MD4 context; call init() first"
        );

        let used = (self.len & BLOCK_MASK) as usize;
        self.len = self.len.wrapping_add(data.len() as u64);

        if used != 0 {
            let free = BLOCK_SIZE - used;
            if data.len() < free {
                self.buffer[used..used + data.len()].copy_from_slice(data);
                return;
            }

            let (head, rest) = data.split_at(free);
            self.buffer[used..].copy_from_slice(head);
            compress(&mut self.state, &self.buffer);
            data = rest;
        }

        let (blocks, tail) = data.split_at(data.len() & !(BLOCK_SIZE - 1));
        if !blocks.is_empty() {
            compress(&mut self.state, blocks);
        }
        self.buffer[..tail.len()].copy_from_slice(tail);
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    /// Current chaining values.
    #[must_use]
    pub const fn state(&self) -> &[u32; 4] {
        &self.state
    }

    /// Total bytes absorbed so far (modulo 2^64).
    #[must_use]
    pub const fn byte_count(&self) -> u64 {
        self.len
    }

    /// Raw pending-block buffer, including bytes past the valid tail.
    #[must_use]
    pub const fn buffer(&self) -> &[u8; BLOCK_SIZE] {
        &self.buffer
    }

    /// True once every field has been wiped, i.e. after finalization.
    ///
    /// A live context can never reach an all-zero chaining state with a zero
    /// counter: `init` loads non-zero constants and `update` only runs on
    /// non-empty input.
    #[must_use]
    pub fn is_erased(&self) -> bool {
        self.state == [0u32; 4] && self.len == 0
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for Md4Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Zeroize for Md4Context {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.len.zeroize();
        self.buffer.zeroize();
    }
}

impl Drop for Md4Context {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for Md4Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md4Context")
            .field("byte_count", &self.len)
            .finish_non_exhaustive()
    }
}
