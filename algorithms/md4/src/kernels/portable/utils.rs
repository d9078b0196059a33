//! Word loading and the three MD4 boolean round functions.

use crate::kernels::constants::BLOCK_SIZE;

// =============================================================================
// WORD LOADER
// =============================================================================

/// Load message word `index` (0..16) of a 64-byte block, little-endian.
///
/// Byte-by-byte assembly; correct on every target regardless of host
/// endianness or alignment.
#[inline]
pub fn load_word(block: &[u8; BLOCK_SIZE], index: usize) -> u32 {
    let off = index * 4;
    u32::from(block[off])
        | (u32::from(block[off + 1]) << 8)
        | (u32::from(block[off + 2]) << 16)
        | (u32::from(block[off + 3]) << 24)
}

/// Load message word `index` with a single unaligned 32-bit read.
///
/// Only compiled on little-endian x86 targets, which tolerate unaligned
/// loads. Reads exactly 4 bytes.
#[cfg(all(target_endian = "little", any(target_arch = "x86", target_arch = "x86_64")))]
#[inline]
#[allow(unsafe_code)]
pub fn load_word_unaligned(block: &[u8; BLOCK_SIZE], index: usize) -> u32 {
    assert!(index < BLOCK_SIZE / 4, "word index out of range");
    // SAFETY: `index < 16` keeps `[4 * index, 4 * index + 4)` inside the 64-byte
    // block, and `read_unaligned` places no alignment requirement on the pointer.
    unsafe {
        block
            .as_ptr()
            .add(index * 4)
            .cast::<u32>()
            .read_unaligned()
    }
}

/// Load all 16 message words of a block, using the fast path where available.
#[inline]
pub fn load_block(block: &[u8; BLOCK_SIZE]) -> [u32; 16] {
    let mut x = [0u32; 16];
    for (i, word) in x.iter_mut().enumerate() {
        #[cfg(all(target_endian = "little", any(target_arch = "x86", target_arch = "x86_64")))]
        {
            *word = load_word_unaligned(block, i);
        }
        #[cfg(not(all(target_endian = "little", any(target_arch = "x86", target_arch = "x86_64"))))]
        {
            *word = load_word(block, i);
        }
    }
    x
}

// =============================================================================
// ROUND FUNCTIONS
// =============================================================================

/// Round 1 selector: `(x & y) | (!x & z)`, in its 3-operation form.
#[inline]
pub const fn f(x: u32, y: u32, z: u32) -> u32 {
    z ^ (x & (y ^ z))
}

/// Round 2 majority: `(x & y) | (x & z) | (y & z)`.
#[inline]
pub const fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// Round 3 parity.
#[inline]
pub const fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}
