//! MD4 Finalization
//!
//! Padding, length encoding, digest extraction and erasure of the context.

use zeroize::Zeroize;

use super::{compress, Md4Context};
use crate::kernels::constants::{BLOCK_MASK, BLOCK_SIZE, HASH_SIZE, LENGTH_OFFSET, PAD_MARKER};

impl Md4Context {
    /// Pad the pending tail and leave the final block in the buffer.
    ///
    /// When the marker leaves fewer than 8 free bytes, the current block is
    /// zero-filled and compressed here and the length goes into a fresh block.
    #[allow(clippy::cast_possible_truncation)] // masked to 6 bits
    fn pad(&mut self) {
        let mut used = (self.len & BLOCK_MASK) as usize;

        self.buffer[used] = PAD_MARKER;
        used += 1;

        if BLOCK_SIZE - used < 8 {
            self.buffer[used..].fill(0);
            compress(&mut self.state, &self.buffer);
            used = 0;
        }

        self.buffer[used..LENGTH_OFFSET].fill(0);

        // Bits shifted out above 2^64 are dropped, as RFC 1320 specifies.
        let bit_len = self.len << 3;
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_le_bytes());
    }

    /// Finish the hash into `out`, then wipe the whole context.
    ///
    /// The context must be reinitialized with [`Md4Context::init`] before it
    /// is fed again; finalizing twice is a contract violation.
    pub fn finalize_into(&mut self, out: &mut [u8; HASH_SIZE]) {
        debug_assert!(
            !self.is_erased(),
            "MD4 context finalized twice without init()"
        );

        self.pad();
        compress(&mut self.state, &self.buffer);

        for (dst, word) in out.chunks_exact_mut(4).zip(self.state) {
            dst.copy_from_slice(&word.to_le_bytes());
        }

        self.zeroize();
    }

    /// Finish the hash and return the digest, wiping the context.
    #[must_use]
    pub fn finalize(&mut self) -> [u8; HASH_SIZE] {
        let mut out = [0u8; HASH_SIZE];
        self.finalize_into(&mut out);
        out
    }
}
