//! MD4 Kernels
//!
//! Compression function, streaming context and finalizer.

pub mod constants;
pub mod portable;
