//! Command line argument parsing for the pixz utility

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use pixz_cli::{
    parse_block_fraction, parse_processes, parse_queue_size, OperationMode, Preset, RunConfig,
    Tuning, DEFAULT_LEVEL,
};

const USAGE_EXAMPLES: &str = "\
Basic usage:
  pixz input output.pxz           # Compress a file in parallel
  pixz -d input.pxz output        # Decompress

Tarballs:
  pixz input.tar output.tpxz      # Compress and index a tarball
  pixz -d input.tpxz output.tar   # Decompress
  pixz -l input.tpxz              # List tarball contents
  pixz -x path/to/file < input.tpxz | tar x  # Extract one file

Input and output:
  pixz < input > output.pxz       # Same as `pixz input output.pxz`
  pixz -i input -o output.pxz     # Ditto
  pixz [-d] input                 # Automatically choose output filename";

/// Parallel indexing XZ compression
#[derive(Parser, Debug)]
#[command(
    name = "pixz",
    about = "Parallel Indexing XZ compression, fully compatible with XZ",
    after_help = USAGE_EXAMPLES,
    disable_help_flag = true,
    args_override_self = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct PixzOpts {
    /// Input and output files, or tarball members with -x
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Force compression
    #[arg(short = 'z', long = "compress", overrides_with_all = ["decompress", "extract", "list"])]
    pub compress: bool,

    /// Force decompression
    #[arg(short = 'd', long = "decompress", overrides_with_all = ["compress", "extract", "list"])]
    pub decompress: bool,

    /// Extract files from a tarball
    #[arg(short = 'x', long = "extract", overrides_with_all = ["compress", "decompress", "list"])]
    pub extract: bool,

    /// List files in a tarball
    #[arg(short = 'l', long = "list", overrides_with_all = ["compress", "decompress", "extract"])]
    pub list: bool,

    /// Write to standard output and don't delete input files
    #[arg(short = 'c', long = "stdout")]
    pub stdout: bool,

    /// Specify input file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Specify output file
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Don't assume input is in tar format
    #[arg(short = 't', long = "no-tar")]
    pub no_tar: bool,

    /// Keep (don't delete) input files
    #[arg(short = 'k', long = "keep")]
    pub keep: bool,

    /// Display this short help and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Use at most NUM threads, 0 for one per processor core
    #[arg(
        short = 'p',
        long = "processes",
        value_name = "NUM",
        value_parser = parse_processes,
        overrides_with = "threads"
    )]
    pub processes: Option<usize>,

    /// Same as -p (compatibility with xz)
    #[arg(
        short = 'T',
        long = "threads",
        value_name = "NUM",
        value_parser = parse_processes,
        overrides_with = "processes"
    )]
    pub threads: Option<usize>,

    /// Fraction of the dictionary size to use as block size
    #[arg(short = 'f', long = "block-fraction", value_name = "NUM", value_parser = parse_block_fraction)]
    pub block_fraction: Option<f64>,

    /// Maximum number of queued blocks
    #[arg(short = 'q', long = "qsize", value_name = "NUM", value_parser = parse_queue_size)]
    pub qsize: Option<NonZeroUsize>,

    /// Use more CPU time to improve the compression ratio
    #[arg(short = 'e', long = "extreme")]
    pub extreme: bool,

    /// Compression level 0 (fastest)
    #[arg(short = '0', long = "fast", overrides_with_all = ["level_1", "level_2", "level_3", "level_4", "level_5", "level_6", "level_7", "level_8", "level_9"])]
    pub level_0: bool,

    /// Compression level 1
    #[arg(short = '1', overrides_with_all = ["level_0", "level_2", "level_3", "level_4", "level_5", "level_6", "level_7", "level_8", "level_9"])]
    pub level_1: bool,

    /// Compression level 2
    #[arg(short = '2', overrides_with_all = ["level_0", "level_1", "level_3", "level_4", "level_5", "level_6", "level_7", "level_8", "level_9"])]
    pub level_2: bool,

    /// Compression level 3
    #[arg(short = '3', overrides_with_all = ["level_0", "level_1", "level_2", "level_4", "level_5", "level_6", "level_7", "level_8", "level_9"])]
    pub level_3: bool,

    /// Compression level 4
    #[arg(short = '4', overrides_with_all = ["level_0", "level_1", "level_2", "level_3", "level_5", "level_6", "level_7", "level_8", "level_9"])]
    pub level_4: bool,

    /// Compression level 5
    #[arg(short = '5', overrides_with_all = ["level_0", "level_1", "level_2", "level_3", "level_4", "level_6", "level_7", "level_8", "level_9"])]
    pub level_5: bool,

    /// Compression level 6 (default)
    #[arg(short = '6', overrides_with_all = ["level_0", "level_1", "level_2", "level_3", "level_4", "level_5", "level_7", "level_8", "level_9"])]
    pub level_6: bool,

    /// Compression level 7
    #[arg(short = '7', overrides_with_all = ["level_0", "level_1", "level_2", "level_3", "level_4", "level_5", "level_6", "level_8", "level_9"])]
    pub level_7: bool,

    /// Compression level 8
    #[arg(short = '8', overrides_with_all = ["level_0", "level_1", "level_2", "level_3", "level_4", "level_5", "level_6", "level_7", "level_9"])]
    pub level_8: bool,

    /// Compression level 9 (best)
    #[arg(short = '9', long = "best", overrides_with_all = ["level_0", "level_1", "level_2", "level_3", "level_4", "level_5", "level_6", "level_7", "level_8"])]
    pub level_9: bool,
}

impl PixzOpts {
    /// Determine operation mode based on flags
    pub fn operation_mode(&self) -> OperationMode {
        if self.decompress {
            OperationMode::Decompress
        } else if self.extract {
            OperationMode::ExtractMember
        } else if self.list {
            OperationMode::List
        } else {
            OperationMode::Compress
        }
    }

    /// Get the compression level from the preset flags
    pub fn compression_level(&self) -> Option<u32> {
        [
            self.level_0,
            self.level_1,
            self.level_2,
            self.level_3,
            self.level_4,
            self.level_5,
            self.level_6,
            self.level_7,
            self.level_8,
            self.level_9,
        ]
        .iter()
        .zip(0..)
        .find_map(|(&flag, level)| flag.then_some(level))
    }

    /// Build the run configuration from the parsed options
    pub fn config(&self) -> RunConfig {
        RunConfig {
            mode: self.operation_mode(),
            input: self.input.clone(),
            output: self.output.clone(),
            tar: !self.no_tar,
            keep: self.keep,
            stdout: self.stdout,
            preset: Preset {
                level: self.compression_level().unwrap_or(DEFAULT_LEVEL),
                extreme: self.extreme,
            },
            tuning: Tuning {
                processes: self.processes.or(self.threads).unwrap_or(0),
                queue_size: self.qsize,
                block_fraction: self.block_fraction,
            },
        }
    }

    /// Splits the options into the configuration and the positional arguments
    pub fn into_parts(self) -> (RunConfig, Vec<String>) {
        let config = self.config();
        (config, self.files)
    }
}
