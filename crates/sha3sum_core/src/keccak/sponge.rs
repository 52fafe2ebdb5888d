//! Sponge absorb, pad and squeeze over the Keccak-f\[1600\] state.
//!
//! Input bytes are XORed into the little-endian byte view of the state at
//! the current `(word_index, byte_index)` position. Reaching the end of the
//! rate permutes immediately, so the buffered remainder is always shorter
//! than one block when padding is applied.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::permutation::{keccak_f1600, STATE_LANES};
use super::STATE_BYTES;
use crate::bytes::{lane_byte, load_le64, store_le64_partial, xor_lane_byte};

/// Multi-rate padding terminator, XORed into the last byte of the rate.
pub const PAD_TERMINATOR: u8 = 0x80;

/// Keccak sponge with a fixed rate.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge {
    lanes: [u64; STATE_LANES],
    /// Rate in bytes; a multiple of 8 for every supported digest size.
    rate: usize,
    /// Next lane to receive input, `0..rate / 8`.
    word_index: usize,
    /// Next byte within that lane, `0..8`.
    byte_index: usize,
}

impl Sponge {
    /// Create a zeroed sponge with the given rate in bytes.
    ///
    /// # Panics
    /// Panics if `rate` is zero, not a multiple of 8, or exceeds the state.
    pub fn new(rate: usize) -> Self {
        assert!(
            rate != 0 && rate % 8 == 0 && rate < STATE_BYTES,
            "invalid sponge rate: {}",
            rate
        );
        Self {
            lanes: [0u64; STATE_LANES],
            rate,
            word_index: 0,
            byte_index: 0,
        }
    }

    /// Rate in bytes.
    #[inline]
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Number of bytes buffered in the current, not yet permuted block.
    #[inline]
    pub fn buffered(&self) -> usize {
        self.word_index * 8 + self.byte_index
    }

    /// Current lane and byte offset of the next input byte.
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.word_index, self.byte_index)
    }

    /// Raw lanes, for inspection in tests and diagnostics.
    #[inline]
    pub fn lanes(&self) -> &[u64; STATE_LANES] {
        &self.lanes
    }

    /// XOR `input` into the state, permuting after every full block.
    pub fn absorb(&mut self, mut input: &[u8]) {
        // Finish a partially filled lane one byte at a time.
        while self.byte_index != 0 {
            let Some((&byte, rest)) = input.split_first() else {
                return;
            };
            self.absorb_byte(byte);
            input = rest;
        }

        // Lane aligned: whole lanes at once.
        let mut words = input.chunks_exact(8);
        for word in &mut words {
            self.lanes[self.word_index] ^= load_le64(word);
            self.advance_word();
        }

        for &byte in words.remainder() {
            self.absorb_byte(byte);
        }
    }

    /// Apply the domain suffix and pad10*1, then permute once.
    ///
    /// When the buffered remainder is `rate - 1` bytes the suffix and the
    /// terminator land on the same byte; their bits are disjoint so the two
    /// XORs combine into `suffix | 0x80`.
    pub fn pad(&mut self, suffix: u8) {
        let offset = self.buffered();
        self.xor_byte_at(offset, suffix);
        self.xor_byte_at(self.rate - 1, PAD_TERMINATOR);
        self.permute();
        self.word_index = 0;
        self.byte_index = 0;
    }

    /// Copy the leading `output.len()` bytes of the state's little-endian
    /// byte view into `output`.
    ///
    /// # Panics
    /// Panics if `output` is longer than the rate; digests never need a
    /// second squeeze block.
    pub fn squeeze(&self, output: &mut [u8]) {
        assert!(output.len() <= self.rate, "output exceeds one squeeze block");
        for (chunk, &lane) in output.chunks_mut(8).zip(self.lanes.iter()) {
            store_le64_partial(lane, chunk);
        }
    }

    /// Byte `index` of the state's little-endian byte view.
    #[inline]
    pub fn state_byte(&self, index: usize) -> u8 {
        lane_byte(self.lanes[index / 8], index % 8)
    }

    #[inline]
    fn absorb_byte(&mut self, byte: u8) {
        let lane = &mut self.lanes[self.word_index];
        *lane = xor_lane_byte(*lane, self.byte_index, byte);
        self.byte_index += 1;
        if self.byte_index == 8 {
            self.byte_index = 0;
            self.advance_word();
        }
    }

    #[inline]
    fn advance_word(&mut self) {
        self.word_index += 1;
        if self.word_index * 8 == self.rate {
            self.permute();
            self.word_index = 0;
        }
    }

    #[inline]
    fn xor_byte_at(&mut self, index: usize, byte: u8) {
        let lane = &mut self.lanes[index / 8];
        *lane = xor_lane_byte(*lane, index % 8, byte);
    }

    #[inline]
    fn permute(&mut self) {
        keccak_f1600(&mut self.lanes);
    }
}

impl core::fmt::Debug for Sponge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sponge")
            .field("rate", &self.rate)
            .field("word_index", &self.word_index)
            .field("byte_index", &self.byte_index)
            .finish_non_exhaustive()
    }
}
