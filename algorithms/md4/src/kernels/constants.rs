//! MD4 Kernel Constants
//!
//! Values fixed by RFC 1320. The round constants are the classic
//! `floor(2^30 * sqrt(2))` and `floor(2^30 * sqrt(3))`.

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Algorithm name as exposed to hosts selecting a hash method by name.
pub const NAME: &str = "md4";

/// Block size consumed by one compression step (in bytes).
pub const BLOCK_SIZE: usize = 64;

/// Hash output size in bytes (128-bit digest).
pub const HASH_SIZE: usize = 16;

/// Number of 32-bit message words in one block.
pub const WORDS_PER_BLOCK: usize = BLOCK_SIZE / 4;

/// Offset of the 8-byte bit-length field in the final padded block.
pub const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// Mask extracting the number of buffered bytes from the byte counter.
pub const BLOCK_MASK: u64 = (BLOCK_SIZE as u64) - 1;

/// First padding byte appended after the message.
pub const PAD_MARKER: u8 = 0x80;

// =============================================================================
// INITIAL STATE
// =============================================================================

/// Chaining values `(a, b, c, d)` loaded by `init`.
pub const INIT_STATE: [u32; 4] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

// =============================================================================
// ROUND SCHEDULE
// =============================================================================

/// Additive constant of round 2.
pub const ROUND2_K: u32 = 0x5A82_7999;

/// Additive constant of round 3.
pub const ROUND3_K: u32 = 0x6ED9_EBA1;

/// Rotation amounts for round 1, cycled every four steps.
pub const ROUND1_SHIFTS: [u32; 4] = [3, 7, 11, 19];

/// Rotation amounts for round 2, cycled every four steps.
pub const ROUND2_SHIFTS: [u32; 4] = [3, 5, 9, 13];

/// Rotation amounts for round 3, cycled every four steps.
pub const ROUND3_SHIFTS: [u32; 4] = [3, 9, 11, 15];

/// Message word order for round 2 (column-major walk of the 4x4 word grid).
pub const ROUND2_ORDER: [usize; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];

/// Message word order for round 3 (bit-reversed walk of the word indices).
pub const ROUND3_ORDER: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
