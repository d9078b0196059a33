#![cfg_attr(not(feature = "std"), no_std)]

//! # MD4
//!
//! The RFC 1320 message digest, for legacy protocols and formats that still
//! require it. MD4 is cryptographically broken: never use it where collision
//! or preimage resistance matters.

//! # Usage
//! ```rust
//! // 1. One-shot
//! let hash = md4::hash(b"abc");
//! assert_eq!(hash.len(), 16);
//!
//! // 2. Verification
//! assert!(md4::verify(b"abc", &hash));
//!
//! // 3. Streaming
//! use md4::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"a");
//! hasher.update(b"bc");
//! assert_eq!(hasher.finalize(), hash);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(feature = "std")]
pub mod ffi;
// Kernels are public for tests and benches only.
#[doc(hidden)]
pub mod kernels;
mod method;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use kernels::constants::{BLOCK_SIZE, HASH_SIZE, NAME};
pub use kernels::portable::Md4Context;
pub use method::HashMethod;
pub use oneshot::{hash, verify};
pub use streaming::Md4Hasher as Hasher;
pub use types::{HashMethodInfo, OutputSizeError, MD4_METHOD};

/// Size in bytes of one MD4 context.
pub const CONTEXT_SIZE: usize = core::mem::size_of::<Md4Context>();
