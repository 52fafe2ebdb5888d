//! Fuzz target for the incremental hashing API.
//!
//! Tests that:
//! 1. Any split of the input yields the one-shot digest
//! 2. A finalized context rejects further input and keeps its digest

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use sha3sum_core::digest::{one_shot, HashContext, OutputSize, PaddingMode};

#[derive(Debug, Arbitrary)]
struct IncrementalInput {
    size_index: u8,
    legacy: bool,
    data: Vec<u8>,
    cuts: Vec<u16>,
}

fuzz_target!(|input: IncrementalInput| {
    // Limit sizes to avoid OOM
    if input.data.len() > 4096 || input.cuts.len() > 64 {
        return;
    }

    let size = OutputSize::ALL[input.size_index as usize % OutputSize::ALL.len()];
    let mode = if input.legacy {
        PaddingMode::LegacyKeccak
    } else {
        PaddingMode::Sha3
    };

    let n = size.digest_len();
    let mut expected = [0u8; 64];
    assert_eq!(one_shot(size.bits(), mode, &input.data, &mut expected[..n]), Ok(n));

    let mut cuts: Vec<usize> = input
        .cuts
        .iter()
        .map(|&c| (c as usize).min(input.data.len()))
        .collect();
    cuts.sort_unstable();

    let mut ctx = HashContext::with_size(size, mode);
    let mut start = 0;
    for cut in cuts {
        ctx.absorb(&input.data[start..cut]).unwrap();
        start = cut;
    }
    ctx.absorb(&input.data[start..]).unwrap();
    assert_eq!(ctx.bytes_absorbed(), input.data.len() as u64);

    let digest = ctx.finalize().unwrap();
    assert_eq!(digest.as_bytes(), &expected[..n]);

    // Finalized contexts are frozen
    assert!(ctx.absorb(b"late").is_err());
    assert!(ctx.finalize().is_err());
    assert_eq!(ctx.digest(), Some(&digest));
});
