//! Keccak-f\[1600\] sponge and the SHA3 / legacy Keccak hash functions.
//!
//! ## Parameters
//!
//! | Function | Capacity | Rate |
//! |----------|----------|------|
//! | SHA3-224 / Keccak-224 | 56 | 144 |
//! | SHA3-256 / Keccak-256 | 64 | 136 |
//! | SHA3-384 / Keccak-384 | 96 | 104 |
//! | SHA3-512 / Keccak-512 | 128 | 72 |
//!
//! Capacity is twice the digest length; rate and capacity always sum to the
//! 200-byte state. SHA3 and Keccak differ only in the domain suffix byte
//! written before the pad10*1 terminator.

pub mod permutation;
pub mod sha3;
pub mod sponge;

// Re-export the main functions at module level for convenience
pub use permutation::keccak_f1600;
pub use sha3::{keccak_256, keccak_512, sha3_224, sha3_256, sha3_384, sha3_512};
pub use sponge::Sponge;

/// Keccak-f\[1600\] state size in bytes.
pub const STATE_BYTES: usize = 200;

/// Rate for SHA3-224 in bytes (1152 bits / 8).
pub const SHA3_224_RATE: usize = 144;

/// Rate for SHA3-256 in bytes (1088 bits / 8).
pub const SHA3_256_RATE: usize = 136;

/// Rate for SHA3-384 in bytes (832 bits / 8).
pub const SHA3_384_RATE: usize = 104;

/// Rate for SHA3-512 in bytes (576 bits / 8).
pub const SHA3_512_RATE: usize = 72;

/// FIPS 202 SHA3 domain suffix: separator bits `01` plus the first padding bit.
pub const SHA3_SUFFIX: u8 = 0x06;

/// Original Keccak submission suffix: the first padding bit only.
pub const KECCAK_SUFFIX: u8 = 0x01;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_and_capacities_fill_state() {
        for (rate, digest) in [
            (SHA3_224_RATE, 28),
            (SHA3_256_RATE, 32),
            (SHA3_384_RATE, 48),
            (SHA3_512_RATE, 64),
        ] {
            assert_eq!(rate + 2 * digest, STATE_BYTES);
            assert_eq!(rate % 8, 0);
            assert!(digest <= rate);
        }
    }

    #[test]
    fn test_sha3_256_empty() {
        let hash = sha3_256(b"");
        // Known test vector for SHA3-256("")
        let expected = [
            0xa7, 0xff, 0xc6, 0xf8, 0xbf, 0x1e, 0xd7, 0x66, 0x51, 0xc1, 0x47, 0x56, 0xa0, 0x61,
            0xd6, 0x62, 0xf5, 0x80, 0xff, 0x4d, 0xe4, 0x3b, 0x49, 0xfa, 0x82, 0xd8, 0x0a, 0x4b,
            0x80, 0xf8, 0x43, 0x4a,
        ];
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_suffix_bits_disjoint_from_terminator() {
        assert_eq!(SHA3_SUFFIX & sponge::PAD_TERMINATOR, 0);
        assert_eq!(KECCAK_SUFFIX & sponge::PAD_TERMINATOR, 0);
    }
}
