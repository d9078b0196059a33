#![no_main]

use libfuzzer_sys::fuzz_target;
use md4::{HashMethod, Hasher, Md4Context};

fuzz_target!(|data: &[u8]| {
    let reference_hash = md4::hash(data);

    // Drive the context through the host-facing interface, splitting the
    // input at a point chosen by the data itself.
    let split = data.first().map_or(0, |&b| usize::from(b)).min(data.len());
    let (head, tail) = data.split_at(split);

    let mut method = Hasher::new();
    method.init();
    method.absorb(head);
    method.absorb(tail);

    let mut out = [0u8; md4::HASH_SIZE];
    if method.extract(&mut out).is_err() {
        panic!("extract rejected a digest-sized buffer");
    }
    assert_eq!(out, reference_hash, "HashMethod and one-shot differ!");

    // No secret material may outlive extraction.
    let ctx: &Md4Context = method.context();
    assert!(ctx.is_erased());
    assert!(ctx.buffer().iter().all(|&b| b == 0));
});
