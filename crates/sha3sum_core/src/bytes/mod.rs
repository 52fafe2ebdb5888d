//! Byte manipulation utilities for the Keccak state.
//!
//! The sponge state is held as 64-bit lanes. Its byte view is defined by the
//! little-endian encoding of each lane; every function here computes that
//! view with shifts and `to_le_bytes`/`from_le_bytes`, never by
//! reinterpreting memory, so results are identical on big- and little-endian
//! hosts.

/// Load a 64-bit little-endian integer from a byte slice.
///
/// # Panics
/// Panics if the slice is shorter than 8 bytes.
#[inline]
pub fn load_le64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Store a 64-bit integer as little-endian bytes.
///
/// # Panics
/// Panics if the slice is shorter than 8 bytes.
#[inline]
pub fn store_le64(word: u64, bytes: &mut [u8]) {
    bytes[..8].copy_from_slice(&word.to_le_bytes());
}

/// Store the first `bytes.len()` bytes (at most 8) of a lane's
/// little-endian encoding.
#[inline]
pub fn store_le64_partial(word: u64, bytes: &mut [u8]) {
    let len = bytes.len().min(8);
    bytes[..len].copy_from_slice(&word.to_le_bytes()[..len]);
}

/// XOR `byte` into position `index` (0..8) of a lane's little-endian byte view.
///
/// # Panics
/// Debug builds panic if `index >= 8`.
#[inline]
pub const fn xor_lane_byte(word: u64, index: usize, byte: u8) -> u64 {
    debug_assert!(index < 8);
    word ^ ((byte as u64) << (8 * index))
}

/// Read position `index` (0..8) of a lane's little-endian byte view.
#[inline]
pub const fn lane_byte(word: u64, index: usize) -> u8 {
    (word >> (8 * index)) as u8
}

/// Rotate a 64-bit word left by n bits.
#[inline]
pub const fn rotl64(word: u64, n: u32) -> u64 {
    word.rotate_left(n)
}
