//! Hash Method Interface
//!
//! The shape a host dispatcher relies on when it keeps several hash
//! algorithms side by side and picks one at runtime. Dyn-compatible, so a
//! host can store `Box<dyn HashMethod>` per algorithm.

use crate::types::{HashMethodInfo, OutputSizeError};

/// One hash algorithm behind a uniform init / absorb / extract protocol.
pub trait HashMethod {
    /// Name, block size, context size and digest size.
    fn info(&self) -> &'static HashMethodInfo;

    /// (Re)initialize. Required before the first `absorb` after `extract`.
    fn init(&mut self);

    /// Feed the next chunk. May be called any number of times, in any chunking.
    fn absorb(&mut self, chunk: &[u8]);

    /// Write the digest into `out` and wipe the running state.
    ///
    /// Callable once per initialization.
    ///
    /// # Errors
    /// Returns `OutputSizeError` if `out.len()` differs from
    /// `info().digest_size`; the state is left untouched in that case.
    fn extract(&mut self, out: &mut [u8]) -> Result<(), OutputSizeError>;
}
