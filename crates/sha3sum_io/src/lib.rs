//! I/O layer for sha3sum.
//!
//! This crate provides the side-effect half of the tool:
//! - Opening files for reading with typed errors
//! - Streaming files and standard input through `sha3sum_core`
//! - Rendering `<hex>  <path>` checksum lines
//!
//! All hashing logic is in `sha3sum_core`; this crate only provides the
//! I/O bridge.
//!
//! ## Example
//!
//! ```no_run
//! use sha3sum_core::digest::{OutputSize, PaddingMode};
//! use sha3sum_io::{format_line, hash_file};
//!
//! let checksum = hash_file("Cargo.toml", OutputSize::Bits256, PaddingMode::Sha3, 64 * 1024)?;
//! println!("{}", format_line(&checksum.digest, "Cargo.toml"));
//! # Ok::<(), sha3sum_io::IoError>(())
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

pub use sha3sum_core;

use sha3sum_core::digest::{Digest, OutputSize, PaddingMode};
use sha3sum_core::streaming::{StreamingConfig, StreamingError, StreamingHasher};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// I/O errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] io::Error),

    /// File not found.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Path names a directory.
    #[error("is a directory: {0}")]
    IsDirectory(PathBuf),

    /// Invalid streaming configuration or misuse of the hasher.
    #[error("streaming error: {0}")]
    Streaming(StreamingError),
}

impl IoError {
    /// Short reason suitable for a one-line diagnostic.
    pub fn reason(&self) -> String {
        match self {
            Self::Fs(e) => e.to_string(),
            Self::NotFound(_) => "no such file or directory".to_string(),
            Self::PermissionDenied(_) => "permission denied".to_string(),
            Self::IsDirectory(_) => "is a directory".to_string(),
            Self::Streaming(e) => e.to_string(),
        }
    }
}

impl From<StreamingError> for IoError {
    fn from(e: StreamingError) -> Self {
        match e {
            StreamingError::Io(e) => Self::Fs(e),
            other => Self::Streaming(other),
        }
    }
}

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// A finished digest together with the number of input bytes it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    /// The digest.
    pub digest: Digest,
    /// Bytes read from the input.
    pub bytes: u64,
    /// Algorithm name, e.g. `SHA3-256`.
    pub algorithm: &'static str,
}

/// Hash everything `reader` yields, `chunk_size` bytes at a time.
///
/// # Errors
/// * `IoError::Streaming` - `chunk_size` outside the supported range
/// * `IoError::Fs` - a read failed
pub fn hash_reader<R: Read>(
    reader: R,
    size: OutputSize,
    mode: PaddingMode,
    chunk_size: usize,
) -> Result<Checksum> {
    let config = StreamingConfig::with_chunk_size(chunk_size)?;
    hash_stream(reader, size, mode, config)
}

/// Open `path` for reading and stream it through the hasher.
///
/// The file is checked through its open handle, so a directory is reported
/// as `IoError::IsDirectory` rather than as a read failure.
///
/// # Errors
/// * `IoError::NotFound` - File does not exist
/// * `IoError::PermissionDenied` - File exists but cannot be opened
/// * `IoError::IsDirectory` - Path is a directory
/// * `IoError::Fs` - Other filesystem errors
pub fn hash_file(
    path: impl AsRef<Path>,
    size: OutputSize,
    mode: PaddingMode,
    chunk_size: usize,
) -> Result<Checksum> {
    let path = path.as_ref();
    let file = open_for_reading(path)?;
    debug!(path = %path.display(), chunk_size, "hashing file");

    let total = file.metadata()?.len();
    let config = StreamingConfig::with_chunk_size(chunk_size)?.with_total_size(total);
    let checksum = hash_stream(file, size, mode, config)?;
    debug!(path = %path.display(), bytes = checksum.bytes, "file hashed");
    Ok(checksum)
}

/// Hash a command-line input: [`STDIN_PATH`] reads standard input, anything
/// else is a file path.
pub fn hash_input(
    input: &str,
    size: OutputSize,
    mode: PaddingMode,
    chunk_size: usize,
) -> Result<Checksum> {
    if input == STDIN_PATH {
        debug!("hashing standard input");
        hash_reader(io::stdin().lock(), size, mode, chunk_size)
    } else {
        hash_file(input, size, mode, chunk_size)
    }
}

/// Render a checksum line: lowercase hex, two spaces, the path as given.
pub fn format_line(digest: &Digest, path: &str) -> String {
    format!("{}  {}", digest.to_hex(), path)
}

fn hash_stream<R: Read>(
    reader: R,
    size: OutputSize,
    mode: PaddingMode,
    config: StreamingConfig,
) -> Result<Checksum> {
    let mut hasher = StreamingHasher::with_config(size, mode, config)
        .with_progress(|done, total| trace!(bytes = done, ?total, "chunk absorbed"));
    let algorithm = hasher.algorithm();

    let bytes = hasher.update_reader(reader)?;
    let digest = hasher.finalize()?;
    debug!(algorithm, bytes, "input hashed");

    Ok(Checksum {
        digest,
        bytes,
        algorithm,
    })
}

fn open_for_reading(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    if file.metadata()?.is_dir() {
        return Err(IoError::IsDirectory(path.to_path_buf()));
    }
    Ok(file)
}

fn open_error(path: &Path, e: io::Error) -> IoError {
    match e.kind() {
        io::ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => IoError::PermissionDenied(path.to_path_buf()),
        _ => IoError::Fs(e),
    }
}
