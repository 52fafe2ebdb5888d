use std::io;

use zeroize::Zeroize;

use super::{Digest, OutputSize, PaddingMode, Stage};
use crate::error::{ParameterError, StateError};
use crate::keccak::Sponge;

/// One in-flight SHA3 or Keccak computation.
///
/// Output size and padding mode are fixed at construction. After
/// [`finalize`](Self::finalize) the digest is frozen; further `absorb` or
/// `finalize` calls return [`StateError::AlreadyFinalized`] and the stored
/// digest stays available through [`digest`](Self::digest).
///
/// ```
/// use sha3sum_core::digest::HashContext;
///
/// let mut ctx = HashContext::keccak_256();
/// ctx.absorb(b"").unwrap();
/// assert_eq!(
///     ctx.finalize().unwrap().to_hex(),
///     "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
/// );
/// assert!(ctx.absorb(b"more").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct HashContext {
    sponge: Sponge,
    size: OutputSize,
    mode: PaddingMode,
    stage: Stage,
    bytes_absorbed: u64,
    digest: Option<Digest>,
}

impl HashContext {
    /// Create a context for a digest of `output_bits` bits.
    ///
    /// # Errors
    /// [`ParameterError::UnsupportedOutputSize`] unless `output_bits` is one
    /// of 224, 256, 384 or 512.
    pub fn new(output_bits: u32, mode: PaddingMode) -> Result<Self, ParameterError> {
        Ok(Self::with_size(OutputSize::from_bits(output_bits)?, mode))
    }

    /// Create a context from an already validated size.
    pub fn with_size(size: OutputSize, mode: PaddingMode) -> Self {
        Self {
            sponge: Sponge::new(size.rate()),
            size,
            mode,
            stage: Stage::Initialized,
            bytes_absorbed: 0,
            digest: None,
        }
    }

    /// SHA3-224 context.
    pub fn sha3_224() -> Self {
        Self::with_size(OutputSize::Bits224, PaddingMode::Sha3)
    }

    /// SHA3-256 context.
    pub fn sha3_256() -> Self {
        Self::with_size(OutputSize::Bits256, PaddingMode::Sha3)
    }

    /// SHA3-384 context.
    pub fn sha3_384() -> Self {
        Self::with_size(OutputSize::Bits384, PaddingMode::Sha3)
    }

    /// SHA3-512 context.
    pub fn sha3_512() -> Self {
        Self::with_size(OutputSize::Bits512, PaddingMode::Sha3)
    }

    /// Legacy Keccak-224 context.
    pub fn keccak_224() -> Self {
        Self::with_size(OutputSize::Bits224, PaddingMode::LegacyKeccak)
    }

    /// Legacy Keccak-256 context.
    pub fn keccak_256() -> Self {
        Self::with_size(OutputSize::Bits256, PaddingMode::LegacyKeccak)
    }

    /// Legacy Keccak-384 context.
    pub fn keccak_384() -> Self {
        Self::with_size(OutputSize::Bits384, PaddingMode::LegacyKeccak)
    }

    /// Legacy Keccak-512 context.
    pub fn keccak_512() -> Self {
        Self::with_size(OutputSize::Bits512, PaddingMode::LegacyKeccak)
    }

    /// Feed `input` into the sponge. Zero-length input is allowed and still
    /// moves the context to [`Stage::Absorbing`].
    pub fn absorb(&mut self, input: &[u8]) -> Result<(), StateError> {
        if self.stage.is_finalized() {
            return Err(StateError::AlreadyFinalized);
        }
        self.sponge.absorb(input);
        self.bytes_absorbed += input.len() as u64;
        self.stage = Stage::Absorbing;
        Ok(())
    }

    /// Pad, permute and return the digest. Runs at most once per context.
    pub fn finalize(&mut self) -> Result<Digest, StateError> {
        if self.stage.is_finalized() {
            return Err(StateError::AlreadyFinalized);
        }
        self.sponge.pad(self.mode.suffix());
        let digest = Digest::squeeze(&self.sponge, self.size);
        self.sponge.zeroize();
        self.stage = Stage::Finalized;
        self.digest = Some(digest);
        Ok(digest)
    }

    /// Current lifecycle stage.
    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Padding mode chosen at construction.
    #[inline]
    pub fn mode(&self) -> PaddingMode {
        self.mode
    }

    /// Output size chosen at construction.
    #[inline]
    pub fn output_size(&self) -> OutputSize {
        self.size
    }

    /// Rate in bytes.
    #[inline]
    pub fn rate(&self) -> usize {
        self.size.rate()
    }

    /// Capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.size.capacity()
    }

    /// Total bytes passed to `absorb` so far.
    #[inline]
    pub fn bytes_absorbed(&self) -> u64 {
        self.bytes_absorbed
    }

    /// The frozen digest, once finalized.
    #[inline]
    pub fn digest(&self) -> Option<&Digest> {
        self.digest.as_ref()
    }

    /// Algorithm name such as `SHA3-256` or `Keccak-512`.
    #[inline]
    pub fn algorithm(&self) -> &'static str {
        self.mode.label(self.size)
    }
}

impl io::Write for HashContext {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.absorb(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hash `input` in one call and copy the leading `out.len()` digest bytes
/// into `out`.
///
/// Parameters are validated before any hashing; on error `out` is untouched.
///
/// # Errors
/// - [`ParameterError::UnsupportedOutputSize`] for sizes other than
///   224/256/384/512.
/// - [`ParameterError::OutputTooLarge`] when `out` is longer than the digest.
pub fn one_shot(
    output_bits: u32,
    mode: PaddingMode,
    input: &[u8],
    out: &mut [u8],
) -> Result<usize, ParameterError> {
    let size = OutputSize::from_bits(output_bits)?;
    if out.len() > size.digest_len() {
        return Err(ParameterError::OutputTooLarge {
            requested: out.len(),
            max: size.digest_len(),
        });
    }

    let mut sponge = Sponge::new(size.rate());
    sponge.absorb(input);
    sponge.pad(mode.suffix());
    Digest::squeeze(&sponge, size).truncate_into(out)
}
