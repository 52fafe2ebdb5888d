//! sha3sum CLI
//!
//! Prints SHA3 (FIPS 202) or legacy Keccak checksums of files, one
//! `<hex-digest>  <path>` line per file.
//!
//! ```bash
//! sha3sum 256 document.pdf
//! sha3sum --keccak 256 contract.bin
//! sha3sum --mode keccak 512 contract.bin
//! cat data | sha3sum 512 -
//! sha3sum --json 384 a.txt b.txt
//! ```
//!
//! # Environment Variables
//!
//! - `SHA3SUM_CHUNK_SIZE` - Read chunk size in bytes (default: 65536)
//! - `SHA3SUM_LOG` - Log filter for diagnostics on stderr (default: `warn`)
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Every file hashed |
//! | 1 | Bad digest size, chunk size or arguments |
//! | 2 | At least one file could not be read |

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use sha3sum_core::digest::{OutputSize, PaddingMode};
use sha3sum_core::error::HashError;
use sha3sum_core::streaming::{StreamingConfig, DEFAULT_CHUNK_SIZE};
use sha3sum_io::{format_line, hash_input, Checksum, IoError};

/// Bad digest size or other usage error.
const EXIT_USAGE: u8 = 1;

/// A file could not be opened or read.
const EXIT_UNREADABLE: u8 = 2;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SHA3SUM_LOG";

/// sha3sum - SHA3 and Keccak checksums.
#[derive(Parser, Debug)]
#[command(name = "sha3sum")]
#[command(version, long_about = None)]
struct Cli {
    /// Padding mode: sha3 (FIPS 202) or keccak (original submission).
    #[arg(long, value_parser = parse_mode, default_value_t = PaddingMode::Sha3)]
    mode: PaddingMode,

    /// Shorthand for `--mode keccak`.
    #[arg(long, conflicts_with = "mode")]
    keccak: bool,

    /// Output format.
    #[arg(long)]
    json: bool,

    /// Chunk size in bytes (default: 65536).
    ///
    /// Can also be set via SHA3SUM_CHUNK_SIZE environment variable.
    #[arg(long, env = "SHA3SUM_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Log debug diagnostics to stderr.
    #[arg(long, short)]
    verbose: bool,

    /// Digest size in bits: 224, 256, 384 or 512.
    #[arg(value_parser = parse_bits)]
    bits: OutputSize,

    /// Files to hash; `-` reads standard input.
    #[arg(required = true)]
    files: Vec<String>,
}

impl Cli {
    fn mode(&self) -> PaddingMode {
        if self.keccak {
            PaddingMode::LegacyKeccak
        } else {
            self.mode
        }
    }
}

/// Parse and validate the digest size argument
fn parse_bits(s: &str) -> Result<OutputSize, String> {
    let bits: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number; use 224, 256, 384 or 512", s))?;
    OutputSize::from_bits(bits).map_err(|e| e.to_string())
}

/// Parse the padding mode argument
fn parse_mode(s: &str) -> Result<PaddingMode, String> {
    s.parse().map_err(|e: HashError| e.to_string())
}

/// JSON output wrapper.
#[derive(Serialize)]
struct JsonOutput<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }

    fn error_with_data(msg: impl Into<String>, data: T) -> Self {
        Self {
            success: false,
            data: Some(data),
            error: Some(msg.into()),
        }
    }
}

/// One hashed input in `--json` output.
#[derive(Serialize)]
struct FileDigest {
    path: String,
    digest: String,
    bits: u32,
    mode: &'static str,
    bytes: u64,
}

impl FileDigest {
    fn new(path: &str, checksum: &Checksum, size: OutputSize, mode: PaddingMode) -> Self {
        Self {
            path: path.to_string(),
            digest: checksum.digest.to_hex(),
            bits: size.bits(),
            mode: mode.as_str(),
            bytes: checksum.bytes,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders usage and help itself; only the exit code is ours.
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            if cli.json {
                let output: JsonOutput<()> = JsonOutput::error(e.to_string());
                match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{}", json),
                    Err(json_err) => {
                        // Fallback to plain text if JSON serialization fails
                        eprintln!("sha3sum: {} (JSON serialization failed: {})", e, json_err);
                    }
                }
            } else {
                eprintln!("sha3sum: {}", e);
            }
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Install the stderr subscriber. `SHA3SUM_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let size = cli.bits;
    let mode = cli.mode();
    StreamingConfig::with_chunk_size(cli.chunk_size)?;
    debug!(
        algorithm = mode.label(size),
        chunk_size = cli.chunk_size,
        files = cli.files.len(),
        "starting"
    );

    let mut results = Vec::with_capacity(cli.files.len());
    let mut failures = Vec::new();

    for path in &cli.files {
        match hash_input(path, size, mode, cli.chunk_size) {
            Ok(checksum) => {
                if !cli.json {
                    println!("{}", format_line(&checksum.digest, path));
                }
                results.push(FileDigest::new(path, &checksum, size, mode));
            }
            Err(e) => {
                let msg = unreadable_message(path, &e);
                debug!(path = %path, error = %e, "skipping unreadable input");
                if !cli.json {
                    eprintln!("sha3sum: {}", msg);
                }
                failures.push(msg);
            }
        }
    }

    if cli.json {
        let output = if failures.is_empty() {
            JsonOutput::success(results)
        } else {
            JsonOutput::error_with_data(failures.join("; "), results)
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    if failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_UNREADABLE))
    }
}

fn unreadable_message(path: &str, e: &IoError) -> String {
    format!("cannot open file '{}' for reading: {}", path, e.reason())
}
