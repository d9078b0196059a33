//! C-API Bindings
//!
//! Exposes MD4 to C/C++ via FFI with pointer checks and panic boundaries,
//! plus a hash-method table a C dispatcher can register next to its other
//! algorithms.

#![allow(unsafe_code)]

use crate::kernels::constants::{BLOCK_SIZE, HASH_SIZE};
use crate::kernels::portable::Md4Context;
use crate::oneshot;
use crate::streaming::Md4Hasher;

use std::ffi::{c_char, c_void};
use std::ptr;
use std::slice;

/// View `(ptr, len)` as a slice; a null pointer is only accepted with `len == 0`.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(slice::from_raw_parts(ptr, len))
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute MD4 hash.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for 16 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn md4_hash(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    if output_ptr.is_null() {
        return -1;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return -1;
    };

    let result = std::panic::catch_unwind(|| {
        let hash = oneshot::hash(input);
        ptr::copy_nonoverlapping(hash.as_ptr(), output_ptr, HASH_SIZE);
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

/// Verify hash in constant time.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `hash_ptr` must point to exactly 16 bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn md4_verify(
    input_ptr: *const u8,
    input_len: usize,
    hash_ptr: *const u8,
) -> i32 {
    if hash_ptr.is_null() {
        return -1;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return -1;
    };

    let result = std::panic::catch_unwind(|| {
        let mut hash = [0u8; HASH_SIZE];
        hash.copy_from_slice(slice::from_raw_parts(hash_ptr, HASH_SIZE));
        oneshot::verify(input, &hash)
    });

    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => -2,
    }
}

// =============================================================================
// STREAMING API
// =============================================================================

/// Opaque hasher handle for C.
pub struct Md4HasherPtr(Md4Hasher);

/// Create new hasher. Caller must free with `md4_hasher_free` or consume it
/// with `md4_hasher_finalize`.
#[no_mangle]
pub extern "C" fn md4_hasher_new() -> *mut Md4HasherPtr {
    Box::into_raw(Box::new(Md4HasherPtr(Md4Hasher::new())))
}

/// Feed data into the hasher.
///
/// # Safety
/// - `state_ptr` must be a valid pointer obtained from `md4_hasher_new`
/// - `data_ptr` must be valid for `len` bytes
#[no_mangle]
pub unsafe extern "C" fn md4_hasher_update(
    state_ptr: *mut Md4HasherPtr,
    data_ptr: *const u8,
    len: usize,
) {
    if state_ptr.is_null() || data_ptr.is_null() {
        return;
    }
    let hasher = &mut (*state_ptr).0;
    hasher.update(slice::from_raw_parts(data_ptr, len));
}

/// Finalize and write hash. Frees the hasher; do not call `md4_hasher_free` after this.
///
/// # Safety
/// - `state_ptr` must be a valid pointer obtained from `md4_hasher_new`
/// - `out_ptr` must be valid for 16 writable bytes
#[no_mangle]
pub unsafe extern "C" fn md4_hasher_finalize(state_ptr: *mut Md4HasherPtr, out_ptr: *mut u8) {
    if state_ptr.is_null() || out_ptr.is_null() {
        return;
    }
    let ptr = Box::from_raw(state_ptr);
    let hash = ptr.0.finalize();
    ptr::copy_nonoverlapping(hash.as_ptr(), out_ptr, HASH_SIZE);
}

/// Free hasher without finalizing. The context is wiped on drop.
///
/// # Safety
/// - `state_ptr` must be a valid pointer obtained from `md4_hasher_new`, or null
#[no_mangle]
pub unsafe extern "C" fn md4_hasher_free(state_ptr: *mut Md4HasherPtr) {
    if !state_ptr.is_null() {
        drop(Box::from_raw(state_ptr));
    }
}

// =============================================================================
// HASH METHOD TABLE
// =============================================================================

/// C layout of a hash method: metadata plus three entry points operating on
/// caller-owned context memory.
#[repr(C)]
pub struct HashMethodTable {
    /// NUL-terminated algorithm name.
    pub name: *const c_char,
    /// Input block size in bytes.
    pub block_size: usize,
    /// Bytes the caller must allocate per context.
    pub context_size: usize,
    /// Alignment the context allocation must satisfy.
    pub context_align: usize,
    /// Digest size in bytes.
    pub digest_size: usize,
    /// Initialize the context at the given address.
    pub init: unsafe extern "C" fn(context: *mut c_void),
    /// Absorb `size` bytes at `data`.
    pub absorb: unsafe extern "C" fn(context: *mut c_void, data: *const c_void, size: usize),
    /// Write `digest_size` bytes to `result` and wipe the context.
    pub extract: unsafe extern "C" fn(context: *mut c_void, result: *mut u8),
}

// SAFETY: the table is immutable and `name` points at a static string.
unsafe impl Sync for HashMethodTable {}

/// MD4 entry in the host's hash-method registry.
#[no_mangle]
pub static MD4_HASH_METHOD: HashMethodTable = HashMethodTable {
    name: c"md4".as_ptr(),
    block_size: BLOCK_SIZE,
    context_size: std::mem::size_of::<Md4Context>(),
    context_align: std::mem::align_of::<Md4Context>(),
    digest_size: HASH_SIZE,
    init: method_init,
    absorb: method_absorb,
    extract: method_extract,
};

/// # Safety
/// `context` must point to `context_size` writable bytes aligned to `context_align`.
unsafe extern "C" fn method_init(context: *mut c_void) {
    if context.is_null() {
        return;
    }
    // `write` rather than assignment: the memory may be uninitialized.
    context.cast::<Md4Context>().write(Md4Context::new());
}

/// # Safety
/// `context` must have been initialized by `init`; `data` must be valid for `size` bytes.
unsafe extern "C" fn method_absorb(context: *mut c_void, data: *const c_void, size: usize) {
    if context.is_null() {
        return;
    }
    let Some(chunk) = input_slice(data.cast::<u8>(), size) else {
        return;
    };
    (*context.cast::<Md4Context>()).update(chunk);
}

/// # Safety
/// `context` must have been initialized by `init`; `result` must be valid for 16 writable bytes.
unsafe extern "C" fn method_extract(context: *mut c_void, result: *mut u8) {
    if context.is_null() || result.is_null() {
        return;
    }
    let mut digest = [0u8; HASH_SIZE];
    (*context.cast::<Md4Context>()).finalize_into(&mut digest);
    ptr::copy_nonoverlapping(digest.as_ptr(), result, HASH_SIZE);
}
