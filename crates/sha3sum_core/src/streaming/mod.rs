//! Streaming interfaces for hashing large inputs.
//!
//! [`StreamingHasher`] pulls fixed-size chunks from any [`std::io::Read`]
//! and forwards exactly the bytes each read returned, so memory stays
//! bounded by the chunk size regardless of input length. The digest is the
//! same as hashing the whole input in one call.
//!
//! ## Memory Efficiency
//!
//! The default chunk size is 64 KiB, configurable from 1 KiB up to 1 MiB.
//!
//! ## Usage
//!
//! ```
//! use std::io::Cursor;
//! use sha3sum_core::digest::{OutputSize, PaddingMode};
//! use sha3sum_core::streaming::StreamingHasher;
//!
//! let mut hasher = StreamingHasher::new(OutputSize::Bits256, PaddingMode::Sha3);
//! let read = hasher.update_reader(Cursor::new(b"abc")).unwrap();
//! assert_eq!(read, 3);
//! let digest = hasher.finalize().unwrap();
//! assert_eq!(digest.as_bytes(), &sha3sum_core::keccak::sha3_256(b"abc")[..]);
//! ```

use std::io::{ErrorKind, Read};

use crate::digest::{Digest, HashContext, OutputSize, PaddingMode};
use crate::error::StateError;

/// Default chunk size for streaming operations (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Maximum chunk size (1 MiB).
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Minimum chunk size (1 KiB).
pub const MIN_CHUNK_SIZE: usize = 1024;

/// Errors from streaming operations.
#[derive(Debug)]
pub enum StreamingError {
    /// IO error while reading the input.
    Io(std::io::Error),
    /// The wrapped context was already finalized (see
    /// [`StreamingHasher::from_context`]).
    State(StateError),
    /// Chunk size outside `MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE`.
    InvalidChunkSize(usize),
}

impl core::fmt::Display for StreamingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::State(e) => write!(f, "{}", e),
            Self::InvalidChunkSize(size) => write!(
                f,
                "invalid chunk size {} (must be {} - {} bytes)",
                size, MIN_CHUNK_SIZE, MAX_CHUNK_SIZE
            ),
        }
    }
}

impl std::error::Error for StreamingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::State(e) => Some(e),
            Self::InvalidChunkSize(_) => None,
        }
    }
}

impl From<std::io::Error> for StreamingError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<StateError> for StreamingError {
    fn from(e: StateError) -> Self {
        Self::State(e)
    }
}

/// Progress callback: `(bytes_processed, total_size)`.
pub type ProgressCallback = Box<dyn FnMut(u64, Option<u64>) + Send>;

/// Configuration for streaming operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingConfig {
    /// Size of each chunk in bytes.
    pub chunk_size: usize,
    /// Expected total size (for progress reporting).
    pub total_size: Option<u64>,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            total_size: None,
        }
    }
}

impl StreamingConfig {
    /// Create a new configuration with custom chunk size.
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self, StreamingError> {
        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&chunk_size) {
            return Err(StreamingError::InvalidChunkSize(chunk_size));
        }
        Ok(Self {
            chunk_size,
            total_size: None,
        })
    }

    /// Set the expected total size for progress reporting.
    pub fn with_total_size(mut self, size: u64) -> Self {
        self.total_size = Some(size);
        self
    }
}

/// Chunked driver over a [`HashContext`].
pub struct StreamingHasher {
    context: HashContext,
    chunk_size: usize,
    total_size: Option<u64>,
    bytes_processed: u64,
    progress: Option<ProgressCallback>,
}

impl StreamingHasher {
    /// Create a new streaming hasher with default configuration.
    pub fn new(size: OutputSize, mode: PaddingMode) -> Self {
        Self::with_config(size, mode, StreamingConfig::default())
    }

    /// Create a new streaming hasher with custom configuration.
    pub fn with_config(size: OutputSize, mode: PaddingMode, config: StreamingConfig) -> Self {
        Self::from_context(HashContext::with_size(size, mode), config)
    }

    /// Drive an existing context, e.g. one that already absorbed a header.
    ///
    /// A finalized context is accepted here; the first `update` or
    /// `finalize` then fails with [`StreamingError::State`].
    pub fn from_context(context: HashContext, config: StreamingConfig) -> Self {
        let bytes_processed = context.bytes_absorbed();
        Self {
            context,
            chunk_size: config.chunk_size,
            total_size: config.total_size,
            bytes_processed,
            progress: None,
        }
    }

    /// Install a callback invoked after every forwarded chunk.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Update the hash with more data.
    pub fn update(&mut self, data: &[u8]) -> Result<(), StreamingError> {
        self.context.absorb(data)?;
        self.bytes_processed += data.len() as u64;
        if let Some(ref mut cb) = self.progress {
            cb(self.bytes_processed, self.total_size);
        }
        Ok(())
    }

    /// Read `reader` to the end in chunks, returning the number of bytes
    /// consumed.
    ///
    /// Only the `n` bytes a read reports are forwarded; interrupted reads are
    /// retried.
    pub fn update_reader<R: Read>(&mut self, mut reader: R) -> Result<u64, StreamingError> {
        let mut buf = vec![0u8; self.chunk_size];
        let mut total = 0u64;

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.update(&buf[..n])?;
            total += n as u64;
        }

        Ok(total)
    }

    /// Finalize and return the digest.
    pub fn finalize(mut self) -> Result<Digest, StreamingError> {
        Ok(self.context.finalize()?)
    }

    /// Get the number of bytes processed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }

    /// Configured chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Algorithm name of the underlying context.
    pub fn algorithm(&self) -> &'static str {
        self.context.algorithm()
    }
}

impl core::fmt::Debug for StreamingHasher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StreamingHasher")
            .field("algorithm", &self.context.algorithm())
            .field("chunk_size", &self.chunk_size)
            .field("bytes_processed", &self.bytes_processed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::one_shot;
    use crate::keccak::sha3::{keccak_256, sha3_256};
    use std::io::Cursor;

    /// Reader that returns at most `step` bytes per call and reports
    /// `Interrupted` before every other read.
    struct ChoppyReader {
        data: Vec<u8>,
        pos: usize,
        step: usize,
        interrupt: bool,
    }

    impl Read for ChoppyReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(std::io::Error::new(ErrorKind::Interrupted, "retry"));
            }
            let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn sha3_256_hasher() -> StreamingHasher {
        StreamingHasher::new(OutputSize::Bits256, PaddingMode::Sha3)
    }

    #[test]
    fn test_streaming_hasher_empty() {
        let hasher = sha3_256_hasher();
        let hash = hasher.finalize().unwrap();
        assert_eq!(hash.as_bytes(), &sha3_256(&[])[..]);
    }

    #[test]
    fn test_streaming_hasher_small() {
        let data = b"Hello, World!";
        let mut hasher = sha3_256_hasher();
        hasher.update(data).unwrap();
        let hash = hasher.finalize().unwrap();
        assert_eq!(hash.as_bytes(), &sha3_256(data)[..]);
    }

    #[test]
    fn test_streaming_hasher_reader_matches_one_call() {
        // Larger than one chunk and not a multiple of it.
        let data: Vec<u8> = (0..200_000).map(|i| i as u8).collect();

        let mut hasher = sha3_256_hasher();
        let read = hasher.update_reader(Cursor::new(&data)).unwrap();
        assert_eq!(read, data.len() as u64);
        assert_eq!(hasher.bytes_processed(), data.len() as u64);

        let hash = hasher.finalize().unwrap();
        assert_eq!(hash.as_bytes(), &sha3_256(&data)[..]);
    }

    #[test]
    fn test_short_and_interrupted_reads() {
        let data: Vec<u8> = (0..5_000u32).map(|i| (i % 251) as u8).collect();
        let reader = ChoppyReader {
            data: data.clone(),
            pos: 0,
            step: 333,
            interrupt: false,
        };

        let config = StreamingConfig::with_chunk_size(MIN_CHUNK_SIZE).unwrap();
        let mut hasher =
            StreamingHasher::with_config(OutputSize::Bits512, PaddingMode::LegacyKeccak, config);
        assert_eq!(hasher.update_reader(reader).unwrap(), data.len() as u64);

        let mut expected = [0u8; 64];
        one_shot(512, PaddingMode::LegacyKeccak, &data, &mut expected).unwrap();
        assert_eq!(hasher.finalize().unwrap().as_bytes(), &expected[..]);
    }

    #[test]
    fn test_reader_error_propagates() {
        let mut hasher = sha3_256_hasher();
        let err = hasher.update_reader(FailingReader).unwrap_err();
        match err {
            StreamingError::Io(e) => assert_eq!(e.kind(), ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(hasher.bytes_processed(), 0);
    }

    #[test]
    fn test_keccak_mode() {
        let mut hasher = StreamingHasher::new(OutputSize::Bits256, PaddingMode::LegacyKeccak);
        hasher.update(b"ab").unwrap();
        hasher.update(b"c").unwrap();
        assert_eq!(hasher.algorithm(), "Keccak-256");
        assert_eq!(hasher.finalize().unwrap().as_bytes(), &keccak_256(b"abc")[..]);
    }

    #[test]
    fn test_progress_callback() {
        use std::sync::{Arc, Mutex};

        let data: Vec<u8> = (0..100_000).map(|i| i as u8).collect();
        let progress_updates = Arc::new(Mutex::new(Vec::new()));
        let updates_clone = progress_updates.clone();

        let config = StreamingConfig::default().with_total_size(data.len() as u64);
        let mut hasher = StreamingHasher::with_config(OutputSize::Bits256, PaddingMode::Sha3, config)
            .with_progress(move |processed, total| {
                updates_clone.lock().unwrap().push((processed, total));
            });
        hasher.update_reader(Cursor::new(&data)).unwrap();

        let updates = progress_updates.lock().unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0], (DEFAULT_CHUNK_SIZE as u64, Some(data.len() as u64)));
        assert_eq!(updates[1], (data.len() as u64, Some(data.len() as u64)));
    }

    #[test]
    fn test_invalid_chunk_size() {
        assert!(StreamingConfig::with_chunk_size(100).is_err()); // Too small
        assert!(StreamingConfig::with_chunk_size(10_000_000).is_err()); // Too large
        assert!(StreamingConfig::with_chunk_size(MIN_CHUNK_SIZE).is_ok());
        assert!(StreamingConfig::with_chunk_size(MAX_CHUNK_SIZE).is_ok());

        let err = StreamingConfig::with_chunk_size(100).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid chunk size 100 (must be 1024 - 1048576 bytes)"
        );
    }

    #[test]
    fn test_from_context_continues_prefix() {
        let mut context = HashContext::sha3_256();
        context.absorb(b"Hello, ").unwrap();

        let mut hasher = StreamingHasher::from_context(context, StreamingConfig::default());
        assert_eq!(hasher.bytes_processed(), 7);
        hasher.update_reader(Cursor::new(b"World!")).unwrap();
        assert_eq!(hasher.bytes_processed(), 13);

        let hash = hasher.finalize().unwrap();
        assert_eq!(hash.as_bytes(), &sha3_256(b"Hello, World!")[..]);
    }

    #[test]
    fn test_from_finalized_context() {
        let mut context = HashContext::sha3_256();
        context.finalize().unwrap();

        let mut hasher =
            StreamingHasher::from_context(context.clone(), StreamingConfig::default());
        let err = hasher.update(b"late").unwrap_err();
        assert!(matches!(
            err,
            StreamingError::State(StateError::AlreadyFinalized)
        ));
        assert_eq!(err.to_string(), "hash context already finalized");
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(hasher.bytes_processed(), 0);

        let hasher = StreamingHasher::from_context(context, StreamingConfig::default());
        assert!(matches!(
            hasher.finalize(),
            Err(StreamingError::State(StateError::AlreadyFinalized))
        ));
    }

    #[test]
    fn test_bytes_processed() {
        let data = b"Hello, World!";
        let mut hasher = sha3_256_hasher();

        assert_eq!(hasher.bytes_processed(), 0);
        hasher.update(data).unwrap();
        assert_eq!(hasher.bytes_processed(), data.len() as u64);

        hasher.update(data).unwrap();
        assert_eq!(hasher.bytes_processed(), (data.len() * 2) as u64);
    }
}
