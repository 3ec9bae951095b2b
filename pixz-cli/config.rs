//! Configuration types and constants for the pixz CLI.

use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Compression level used when no `-0`..`-9` flag is given
pub const DEFAULT_LEVEL: u32 = 6;

/// Highest accepted compression level
pub const MAX_LEVEL: u32 = 9;

/// Preset bit selecting the extreme variant of a level (liblzma's `LZMA_PRESET_EXTREME`)
pub const PRESET_EXTREME: u32 = 0x8000_0000;

/// Represents the single operation performed by one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Compress input data
    Compress,
    /// Decompress input data
    Decompress,
    /// Extract selected members of a tarball
    ExtractMember,
    /// List the contents of a compressed file
    List,
}

/// Compression level together with the extreme modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Compression level (0-9)
    pub level: u32,
    /// Use the extreme variant of `level`
    pub extreme: bool,
}

impl Preset {
    /// Combines level and extreme flag into a single raw preset value.
    pub fn raw(self) -> u32 {
        debug_assert!(self.level <= MAX_LEVEL);
        if self.extreme {
            self.level | PRESET_EXTREME
        } else {
            self.level
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            extreme: false,
        }
    }
}

/// Pipeline tuning handed to the engine untouched.
///
/// `None` fields leave the choice to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuning {
    /// Maximum number of worker threads, `0` meaning one per available core
    pub processes: usize,
    /// Bound on the number of queued work items
    pub queue_size: Option<NonZeroUsize>,
    /// Fraction of the dictionary size used as block size
    pub block_fraction: Option<f64>,
}

/// Resolved configuration for one invocation
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Input file, `None` for stdin
    pub input: Option<PathBuf>,
    /// Output file, `None` for stdout
    pub output: Option<PathBuf>,
    /// Treat the payload as a tarball
    pub tar: bool,
    /// Keep input files after processing
    pub keep: bool,
    /// Write to stdout instead of a derived output file
    pub stdout: bool,
    /// Compression preset
    pub preset: Preset,
    /// Engine pipeline tuning
    pub tuning: Tuning,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: OperationMode::Compress,
            input: None,
            output: None,
            tar: true,
            keep: false,
            stdout: false,
            preset: Preset::default(),
            tuning: Tuning::default(),
        }
    }
}

/// Parses the argument of `-p`/`-T`.
///
/// # Errors
///
/// Returns a message if `s` is not a non-negative integer.
pub fn parse_processes(s: &str) -> Result<usize, String> {
    s.parse()
        .map_err(|_| "Need a non-negative integer argument to -p".to_string())
}

/// Parses the argument of `-q`.
///
/// # Errors
///
/// Returns a message if `s` is not a positive integer.
pub fn parse_queue_size(s: &str) -> Result<NonZeroUsize, String> {
    s.parse()
        .map_err(|_| "Need a positive integer argument to -q".to_string())
}

/// Parses the argument of `-f`.
///
/// # Errors
///
/// Returns a message if `s` is not a finite, strictly positive number.
pub fn parse_block_fraction(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err("Need a positive floating-point argument to -f".to_string()),
    }
}
