//! State Hygiene Tests
//!
//! After finalization no chaining value, length or buffered message byte may
//! remain in the context.

#![allow(clippy::pedantic, clippy::nursery)]

use md4::{HashMethod, Hasher, Md4Context, BLOCK_SIZE, HASH_SIZE};

fn assert_wiped(ctx: &Md4Context) {
    assert_eq!(ctx.state(), &[0u32; 4], "chaining state survived");
    assert_eq!(ctx.byte_count(), 0, "length counter survived");
    assert_eq!(ctx.buffer(), &[0u8; BLOCK_SIZE], "buffered input survived");
    assert!(ctx.is_erased());
}

#[test]
fn test_context_wiped_after_finalize() {
    // 100 bytes leaves 36 secret bytes in the buffer before padding.
    let secret = [0xC3u8; 100];
    let mut ctx = Md4Context::new();
    ctx.update(&secret);
    assert!(ctx.buffer().contains(&0xC3));

    let digest = ctx.finalize();
    assert_eq!(digest, md4::hash(&secret));
    assert_wiped(&ctx);
}

#[test]
fn test_context_wiped_after_finalize_into() {
    let mut ctx = Md4Context::new();
    ctx.update(b"message digest");
    let mut out = [0u8; HASH_SIZE];
    ctx.finalize_into(&mut out);
    assert_eq!(hex::encode(out), "d9130a8164549fe818874806e1c7014b");
    assert_wiped(&ctx);
}

#[test]
fn test_context_wiped_after_extract() {
    let mut hasher = Hasher::new();
    hasher.absorb(b"abc");
    let mut out = [0u8; HASH_SIZE];
    hasher.extract(&mut out).unwrap_or_else(|e| panic!("{e}"));
    assert_wiped(hasher.context());
}

#[test]
fn test_empty_message_context_wiped() {
    let mut ctx = Md4Context::new();
    let _ = ctx.finalize();
    assert_wiped(&ctx);
}

#[test]
fn test_reinit_after_wipe() {
    let mut ctx = Md4Context::new();
    ctx.update(b"first");
    let _ = ctx.finalize();

    ctx.init();
    assert!(!ctx.is_erased());
    ctx.update(b"abc");
    assert_eq!(hex::encode(ctx.finalize()), "a448017aaf21d8525fc10ae87aa6729d");
}
