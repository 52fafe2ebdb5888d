//! Unified error types for sha3sum_core.
//!
//! Parameter validation and lifecycle misuse are the only failure modes of
//! the core, plus rejecting an unknown padding mode name. Both are returned as values; neither ever leaves a context
//! partially mutated.

use core::fmt;

use crate::digest::SUPPORTED_BITS;

/// Invalid parameters supplied to a constructor or to [`crate::digest::one_shot`].
///
/// Validation happens before any state is touched, so a `ParameterError`
/// never coexists with a usable context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Requested digest size is not one of 224, 256, 384 or 512 bits.
    UnsupportedOutputSize(u32),
    /// Output buffer is larger than the digest. Truncation is allowed,
    /// extension is not.
    OutputTooLarge {
        /// Bytes the caller asked for.
        requested: usize,
        /// Full digest length in bytes.
        max: usize,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOutputSize(bits) => write!(
                f,
                "unsupported output size: {} bits (expected one of {:?})",
                bits, SUPPORTED_BITS
            ),
            Self::OutputTooLarge { requested, max } => write!(
                f,
                "requested {} output bytes but the digest is only {} bytes",
                requested, max
            ),
        }
    }
}

impl std::error::Error for ParameterError {}

/// Lifecycle misuse of a [`crate::digest::HashContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// `absorb` or `finalize` called on a context that was already finalized.
    AlreadyFinalized,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFinalized => write!(f, "hash context already finalized"),
        }
    }
}

impl std::error::Error for StateError {}

/// Unified hashing error type.
///
/// Wraps the specific error types of the crate so callers can use a single
/// `?`-compatible error across parameter validation and lifecycle checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// Invalid parameters
    Parameter(ParameterError),
    /// Lifecycle misuse
    State(StateError),
    /// Padding mode name other than `sha3` or `keccak`
    UnknownPaddingMode(String),
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::Parameter(e) => write!(f, "parameter error: {}", e),
            HashError::State(e) => write!(f, "state error: {}", e),
            HashError::UnknownPaddingMode(name) => write!(
                f,
                "unknown padding mode '{}' (expected sha3 or keccak)",
                name
            ),
        }
    }
}

impl std::error::Error for HashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashError::Parameter(e) => Some(e),
            HashError::State(e) => Some(e),
            HashError::UnknownPaddingMode(_) => None,
        }
    }
}

impl From<ParameterError> for HashError {
    fn from(e: ParameterError) -> Self {
        HashError::Parameter(e)
    }
}

impl From<StateError> for HashError {
    fn from(e: StateError) -> Self {
        HashError::State(e)
    }
}
