//! One-call SHA3 and legacy Keccak hash functions.
//!
//! Each function absorbs the whole input, pads with the mode's domain
//! suffix and squeezes a fixed-size array. For incremental hashing use
//! [`crate::digest::HashContext`].

use super::sponge::Sponge;
use super::{
    KECCAK_SUFFIX, SHA3_224_RATE, SHA3_256_RATE, SHA3_384_RATE, SHA3_512_RATE, SHA3_SUFFIX,
};

/// SHA3-224 output size in bytes.
pub const SHA3_224_OUTPUT: usize = 28;
/// SHA3-256 output size in bytes.
pub const SHA3_256_OUTPUT: usize = 32;
/// SHA3-384 output size in bytes.
pub const SHA3_384_OUTPUT: usize = 48;
/// SHA3-512 output size in bytes.
pub const SHA3_512_OUTPUT: usize = 64;

#[inline]
fn hash_fixed<const N: usize>(rate: usize, suffix: u8, data: &[u8]) -> [u8; N] {
    let mut sponge = Sponge::new(rate);
    sponge.absorb(data);
    sponge.pad(suffix);
    let mut out = [0u8; N];
    sponge.squeeze(&mut out);
    out
}

/// Compute the SHA3-224 hash of the input data.
#[inline]
pub fn sha3_224(data: &[u8]) -> [u8; SHA3_224_OUTPUT] {
    hash_fixed(SHA3_224_RATE, SHA3_SUFFIX, data)
}

/// Compute the SHA3-256 hash of the input data.
///
/// # Example
///
/// ```
/// use sha3sum_core::keccak::sha3::sha3_256;
///
/// let hash = sha3_256(b"hello world");
/// assert_eq!(hash.len(), 32);
/// ```
#[inline]
pub fn sha3_256(data: &[u8]) -> [u8; SHA3_256_OUTPUT] {
    hash_fixed(SHA3_256_RATE, SHA3_SUFFIX, data)
}

/// Compute the SHA3-384 hash of the input data.
#[inline]
pub fn sha3_384(data: &[u8]) -> [u8; SHA3_384_OUTPUT] {
    hash_fixed(SHA3_384_RATE, SHA3_SUFFIX, data)
}

/// Compute the SHA3-512 hash of the input data.
#[inline]
pub fn sha3_512(data: &[u8]) -> [u8; SHA3_512_OUTPUT] {
    hash_fixed(SHA3_512_RATE, SHA3_SUFFIX, data)
}

/// Compute the legacy Keccak-256 hash (original submission padding).
#[inline]
pub fn keccak_256(data: &[u8]) -> [u8; SHA3_256_OUTPUT] {
    hash_fixed(SHA3_256_RATE, KECCAK_SUFFIX, data)
}

/// Compute the legacy Keccak-512 hash (original submission padding).
#[inline]
pub fn keccak_512(data: &[u8]) -> [u8; SHA3_512_OUTPUT] {
    hash_fixed(SHA3_512_RATE, KECCAK_SUFFIX, data)
}
