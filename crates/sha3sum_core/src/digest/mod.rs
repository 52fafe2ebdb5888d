//! Digest parameters and the incremental hashing API.
//!
//! A computation is parameterized once by an [`OutputSize`] and a
//! [`PaddingMode`]; both are fixed for the life of a [`HashContext`].
//!
//! ```
//! use sha3sum_core::digest::{one_shot, HashContext, PaddingMode};
//!
//! let mut ctx = HashContext::sha3_512();
//! ctx.absorb(b"abc").unwrap();
//! let full = ctx.finalize().unwrap();
//!
//! let mut prefix = [0u8; 16];
//! let n = one_shot(512, PaddingMode::Sha3, b"abc", &mut prefix).unwrap();
//! assert_eq!(n, 16);
//! assert_eq!(&prefix[..], &full.as_bytes()[..16]);
//! ```

mod context;
mod output;

pub use context::{one_shot, HashContext};
pub use output::Digest;

use core::fmt;
use core::str::FromStr;

use crate::error::{HashError, ParameterError};
use crate::keccak::{KECCAK_SUFFIX, SHA3_SUFFIX, STATE_BYTES};

/// Output sizes accepted by [`HashContext::new`] and [`one_shot`], in bits.
pub const SUPPORTED_BITS: [u32; 4] = [224, 256, 384, 512];

/// Largest digest in bytes (512 bits).
pub const MAX_DIGEST_BYTES: usize = 64;

/// Digest length. Determines the sponge capacity (twice the digest) and
/// therefore the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputSize {
    /// 224-bit digest, 144-byte rate.
    Bits224,
    /// 256-bit digest, 136-byte rate.
    Bits256,
    /// 384-bit digest, 104-byte rate.
    Bits384,
    /// 512-bit digest, 72-byte rate.
    Bits512,
}

impl OutputSize {
    /// All sizes, smallest first.
    pub const ALL: [OutputSize; 4] = [
        OutputSize::Bits224,
        OutputSize::Bits256,
        OutputSize::Bits384,
        OutputSize::Bits512,
    ];

    /// Validate a size given in bits.
    pub fn from_bits(bits: u32) -> Result<Self, ParameterError> {
        match bits {
            224 => Ok(Self::Bits224),
            256 => Ok(Self::Bits256),
            384 => Ok(Self::Bits384),
            512 => Ok(Self::Bits512),
            other => Err(ParameterError::UnsupportedOutputSize(other)),
        }
    }

    /// Digest size in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits224 => 224,
            Self::Bits256 => 256,
            Self::Bits384 => 384,
            Self::Bits512 => 512,
        }
    }

    /// Digest length in bytes.
    pub const fn digest_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Capacity in bytes.
    pub const fn capacity(self) -> usize {
        2 * self.digest_len()
    }

    /// Rate in bytes: the part of the state that input is XORed into.
    pub const fn rate(self) -> usize {
        STATE_BYTES - self.capacity()
    }
}

impl TryFrom<u32> for OutputSize {
    type Error = ParameterError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Domain suffix applied before pad10*1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaddingMode {
    /// FIPS 202 SHA3 (suffix `0x06`).
    #[default]
    Sha3,
    /// Original Keccak submission (suffix `0x01`), as used by Ethereum.
    LegacyKeccak,
}

impl PaddingMode {
    /// Suffix byte XORed at the first unused position of the final block.
    pub const fn suffix(self) -> u8 {
        match self {
            Self::Sha3 => SHA3_SUFFIX,
            Self::LegacyKeccak => KECCAK_SUFFIX,
        }
    }

    /// Short lowercase name, the inverse of [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha3 => "sha3",
            Self::LegacyKeccak => "keccak",
        }
    }

    /// Algorithm name for a given size, e.g. `SHA3-256` or `Keccak-512`.
    pub const fn label(self, size: OutputSize) -> &'static str {
        match (self, size) {
            (Self::Sha3, OutputSize::Bits224) => "SHA3-224",
            (Self::Sha3, OutputSize::Bits256) => "SHA3-256",
            (Self::Sha3, OutputSize::Bits384) => "SHA3-384",
            (Self::Sha3, OutputSize::Bits512) => "SHA3-512",
            (Self::LegacyKeccak, OutputSize::Bits224) => "Keccak-224",
            (Self::LegacyKeccak, OutputSize::Bits256) => "Keccak-256",
            (Self::LegacyKeccak, OutputSize::Bits384) => "Keccak-384",
            (Self::LegacyKeccak, OutputSize::Bits512) => "Keccak-512",
        }
    }
}

impl FromStr for PaddingMode {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha3" => Ok(Self::Sha3),
            "keccak" => Ok(Self::LegacyKeccak),
            _ => Err(HashError::UnknownPaddingMode(s.to_string())),
        }
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a [`HashContext`].
///
/// `Initialized -> Absorbing -> Finalized` or `Initialized -> Finalized`.
/// Nothing leaves `Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Fresh context, nothing absorbed yet.
    Initialized,
    /// At least one `absorb` call succeeded.
    Absorbing,
    /// Digest produced; the context accepts no more input.
    Finalized,
}

impl Stage {
    /// Whether the context is finalized.
    pub const fn is_finalized(self) -> bool {
        matches!(self, Stage::Finalized)
    }
}
