//! Fuzz target for SHA3/Keccak.
//!
//! Tests that arbitrary input sizes are handled correctly without panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sha3sum_core::digest::{one_shot, HashContext, OutputSize, PaddingMode};
use sha3sum_core::keccak::{keccak_256, sha3};

fuzz_target!(|data: &[u8]| {
    // Fixed-size helpers agree with the generic entry point
    let hash256 = sha3::sha3_256(data);
    let mut out = [0u8; 32];
    assert_eq!(one_shot(256, PaddingMode::Sha3, data, &mut out), Ok(32));
    assert_eq!(hash256, out);

    let legacy = keccak_256(data);
    assert_eq!(one_shot(256, PaddingMode::LegacyKeccak, data, &mut out), Ok(32));
    assert_eq!(legacy, out);
    assert_ne!(hash256, legacy, "SHA3 and Keccak padding must differ");

    for size in OutputSize::ALL {
        // Truncated output is a prefix of the full digest
        let mut full = [0u8; 64];
        let n = size.digest_len();
        assert_eq!(one_shot(size.bits(), PaddingMode::Sha3, data, &mut full[..n]), Ok(n));
        if n < full.len() {
            assert!(one_shot(size.bits(), PaddingMode::Sha3, data, &mut full).is_err());
        }

        let mut short = [0u8; 16];
        one_shot(size.bits(), PaddingMode::Sha3, data, &mut short).unwrap();
        assert_eq!(short[..], full[..16]);

        // Incremental API
        let mut ctx = HashContext::with_size(size, PaddingMode::Sha3);
        ctx.absorb(data).unwrap();
        let digest = ctx.finalize().unwrap();
        assert_eq!(digest.as_bytes(), &full[..n], "Incremental and one-shot should match");
    }
});
