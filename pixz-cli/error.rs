//! Error types for pixz CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status for malformed invocations and `--help`.
pub const EXIT_USAGE: i32 = 2;

/// Exit status for fatal runtime failures.
pub const EXIT_FATAL: i32 = 1;

/// Malformed invocation. Reported together with the help text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Help was explicitly requested
    #[error("")]
    HelpRequested,

    /// Flag parsing failed
    #[error("{0}")]
    InvalidArguments(String),

    /// More positional arguments than the mode accepts
    #[error("Too many arguments")]
    TooManyArguments,

    /// Input given both by flag and positionally
    #[error("Multiple input files specified")]
    MultipleInputs,

    /// Output given both by flag and positionally
    #[error("Multiple output files specified")]
    MultipleOutputs,

    /// No suffix rule can derive the output name
    #[error("Unknown suffix")]
    UnknownSuffix {
        /// Path whose suffix was not recognized
        path: PathBuf,
    },

    /// Compressed output would go to a terminal
    #[error("Refusing to output to a TTY")]
    TerminalOutput,
}

/// Fatal failure after the invocation was accepted.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open input file
    #[error("can not open input file: {}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create output file
    #[error("can not open output file: {}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Compression operation failed
    #[error("compression failed: {message}")]
    Compression {
        /// Error message from the engine
        message: String,
    },

    /// Decompression operation failed
    #[error("decompression failed: {message}")]
    Decompression {
        /// Error message from the engine
        message: String,
    },

    /// The tar payload could not be walked
    #[error("invalid tarball: {message}")]
    InvalidTar {
        /// What was wrong with the archive
        message: String,
    },

    /// Requested members are not in the archive
    #[error("not found in archive: {}", paths.join(", "))]
    MissingMembers {
        /// Member paths that matched nothing
        paths: Vec<String>,
    },

    /// Member extraction without tar-awareness
    #[error("can not extract files without tar support")]
    ExtractWithoutTar,

    /// Read or write failure on an open stream
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Specialized `Result` type for pixz CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Either of the two terminal error classes.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed invocation
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Runtime failure
    #[error(transparent)]
    Fatal(#[from] Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => EXIT_USAGE,
            CliError::Fatal(_) => EXIT_FATAL,
        }
    }

    /// Returns a reference to the usage error, if this is one.
    pub fn as_usage(&self) -> Option<&UsageError> {
        match self {
            CliError::Usage(u) => Some(u),
            CliError::Fatal(_) => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Fatal(Error::Io(err))
    }
}
