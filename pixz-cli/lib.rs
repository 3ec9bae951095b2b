//! Command-line front-end for parallel indexing XZ compression.
//!
//! Turns the parsed flags and positional arguments into a single [`Plan`]:
//! one operation, an input and an output stream, and whether the input is
//! removed afterwards. Missing output names are derived from the input name
//! through a fixed table of suffix rules. The plan is then handed to an
//! [`Engine`], which does the actual compression work.

mod archive;
mod bind;
mod config;
mod error;
mod io;
mod operations;
mod process;
mod suffix;


pub use archive::{matches_member, member_paths, write_members};
pub use bind::{bind_positionals, Plan};
pub use config::{
    parse_block_fraction, parse_processes, parse_queue_size, OperationMode, Preset, RunConfig,
    Tuning, DEFAULT_BUFFER_SIZE, DEFAULT_LEVEL, MAX_LEVEL, PRESET_EXTREME,
};
pub use error::{CliError, Error, Result, UsageError, EXIT_FATAL, EXIT_USAGE};
pub use io::{open_input, open_output, Input, Output};
pub use operations::{Engine, XzEngine};
pub use process::{cleanup_input_file, dispatch, execute, run_cli};
pub use suffix::{derive_path, derive_path_with, SuffixRule, SUFFIX_RULES};
