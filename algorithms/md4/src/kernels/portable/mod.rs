//! Portable implementation of MD4.
//!
//! Davies–Meyer compression over 64-byte blocks. All arithmetic is modulo
//! 2^32 and spelled with explicit `wrapping_*` operations, so overflow checks
//! in debug builds never fire on this path.

use self::utils::{f, g, h, load_block};
use crate::kernels::constants::{
    BLOCK_SIZE, ROUND1_SHIFTS, ROUND2_K, ROUND2_ORDER, ROUND2_SHIFTS, ROUND3_K, ROUND3_ORDER,
    ROUND3_SHIFTS,
};

mod finalize;
mod state;
pub mod utils;

pub use self::state::Md4Context;

// =============================================================================
// COMPRESSION
// =============================================================================

/// Advance `state` across every 64-byte block of `blocks`.
///
/// `blocks.len()` must be a non-zero multiple of `BLOCK_SIZE`; callers
/// guarantee this. A trailing partial block is never read.
pub fn compress(state: &mut [u32; 4], blocks: &[u8]) {
    debug_assert!(
        !blocks.is_empty() && blocks.len() % BLOCK_SIZE == 0,
        "compress() needs whole blocks, got {} bytes",
        blocks.len()
    );

    let (whole, _) = blocks.as_chunks::<BLOCK_SIZE>();
    for block in whole {
        compress_block(state, block);
    }
}

/// One Davies–Meyer step: 48 rounds keyed by the block, then feed-forward.
fn compress_block(state: &mut [u32; 4], block: &[u8; BLOCK_SIZE]) {
    let x = load_block(block);
    let [mut a, mut b, mut c, mut d] = *state;

    // Each step rewrites `a`; the tuple rotation hands the next word
    // (d, then c, then b) the `a` role, returning to identity every 4 steps.
    for (i, &word) in x.iter().enumerate() {
        let t = a
            .wrapping_add(f(b, c, d))
            .wrapping_add(word)
            .rotate_left(ROUND1_SHIFTS[i % 4]);
        (a, b, c, d) = (d, t, b, c);
    }

    for (i, &idx) in ROUND2_ORDER.iter().enumerate() {
        let t = a
            .wrapping_add(g(b, c, d))
            .wrapping_add(x[idx])
            .wrapping_add(ROUND2_K)
            .rotate_left(ROUND2_SHIFTS[i % 4]);
        (a, b, c, d) = (d, t, b, c);
    }

    for (i, &idx) in ROUND3_ORDER.iter().enumerate() {
        let t = a
            .wrapping_add(h(b, c, d))
            .wrapping_add(x[idx])
            .wrapping_add(ROUND3_K)
            .rotate_left(ROUND3_SHIFTS[i % 4]);
        (a, b, c, d) = (d, t, b, c);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
