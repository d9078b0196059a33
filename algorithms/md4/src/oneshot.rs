//! Public API Layer
//!
use crate::kernels::constants::HASH_SIZE;
use crate::kernels::portable::Md4Context;
use subtle::ConstantTimeEq;

// =============================================================================
// HASHING
// =============================================================================

/// Compute the MD4 digest of `input` in one call.
///
/// # Example
/// ```rust
/// let hash = md4::hash(b"abc");
/// assert_eq!(hash[..4], [0xa4, 0x48, 0x01, 0x7a]);
/// ```
#[must_use]
pub fn hash(input: &[u8]) -> [u8; HASH_SIZE] {
    let mut ctx = Md4Context::new();
    ctx.update(input);
    ctx.finalize()
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify hash in constant time.
///
/// Only the comparison is constant-time; MD4 itself offers no collision or
/// preimage resistance, so use this for legacy integrity checks only.
///
/// # Example
/// ```rust
/// let data = b"legacy payload";
/// let hash = md4::hash(data);
/// assert!(md4::verify(data, &hash));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}
