//! # sha3sum_core
//!
//! Keccak sponge engine for the SHA-3 family (NIST FIPS 202) with an optional
//! legacy Keccak padding mode (the pre-standardization submission padding).
//!
//! | Component | Module |
//! |-----------|--------|
//! | Keccak-f\[1600\] permutation | [`keccak::permutation`] |
//! | Absorb / pad / squeeze | [`keccak::sponge`] |
//! | One-call SHA3 and Keccak helpers | [`keccak::sha3`] |
//! | Incremental digest API with checked lifecycle | [`digest`] |
//! | Chunked hashing over `std::io::Read` | [`streaming`] |
//!
//! The state is an inline `[u64; 25]`; its byte view is always the explicit
//! little-endian encoding of each lane, so digests do not depend on the host
//! byte order.
//!
//! ```
//! use sha3sum_core::digest::{HashContext, PaddingMode};
//!
//! let mut ctx = HashContext::new(256, PaddingMode::Sha3).unwrap();
//! ctx.absorb(b"ab").unwrap();
//! ctx.absorb(b"c").unwrap();
//! let digest = ctx.finalize().unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
//! );
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all)]

pub use subtle;
pub use zeroize;

/// Unified error types for consistent error handling
pub mod error;

/// Constant-time operations - uses audited `subtle` crate
pub mod ct;

/// Byte manipulation utilities (LE lane load/store, byte lanes, XOR)
pub mod bytes;

/// Keccak-f\[1600\] permutation, sponge, and fixed-size SHA3/Keccak helpers
pub mod keccak;

/// Digest API: output sizes, padding modes, `HashContext`, one-shot hashing
pub mod digest;

/// Streaming interfaces for large inputs
/// Bounded-memory chunked hashing with progress tracking
pub mod streaming;

/// Prelude with commonly used types
pub mod prelude {
    // Unified error types
    pub use crate::error::{HashError, ParameterError, StateError};

    // Digest API
    pub use crate::digest::{one_shot, Digest, HashContext, OutputSize, PaddingMode, Stage};

    // One-call helpers
    pub use crate::keccak::{keccak_256, sha3_224, sha3_256, sha3_384, sha3_512};

    // Streaming
    pub use crate::streaming::{StreamingConfig, StreamingError, StreamingHasher};
}
