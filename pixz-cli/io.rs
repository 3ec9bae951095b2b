//! Opening of the input and output streams.

use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Source of the data to process.
#[derive(Debug)]
pub enum Input {
    /// Standard input
    Stdin(io::Stdin),
    /// A regular file
    File {
        /// Open handle
        file: File,
        /// Path the file was opened from
        path: PathBuf,
    },
}

impl Input {
    /// Permission bits of the input file, `None` for stdin.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    pub fn permissions_mode(&self) -> io::Result<Option<u32>> {
        match self {
            Input::Stdin(_) => Ok(None),
            #[cfg(unix)]
            Input::File { file, .. } => {
                use std::os::unix::fs::PermissionsExt;
                Ok(Some(file.metadata()?.permissions().mode() & 0o7777))
            }
            #[cfg(not(unix))]
            Input::File { .. } => Ok(None),
        }
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read(buf),
            Input::File { file, .. } => file.read(buf),
        }
    }
}

/// Destination of the processed data.
#[derive(Debug)]
pub enum Output {
    /// Standard output
    Stdout(io::Stdout),
    /// A regular file
    File {
        /// Open handle
        file: File,
        /// Path the file was opened at
        path: PathBuf,
        /// The file did not exist before it was opened
        created: bool,
    },
}

impl Output {
    /// Returns `true` if the destination is an interactive terminal.
    pub fn is_terminal(&self) -> bool {
        match self {
            Output::Stdout(stdout) => stdout.is_terminal(),
            Output::File { file, .. } => file.is_terminal(),
        }
    }

    /// Path of the output file if this run created it.
    pub fn created_path(&self) -> Option<&Path> {
        match self {
            Output::File {
                path,
                created: true,
                ..
            } => Some(path),
            _ => None,
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(stdout) => stdout.write(buf),
            Output::File { file, .. } => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(stdout) => stdout.flush(),
            Output::File { file, .. } => file.flush(),
        }
    }
}

/// Opens the input file, or stdin if `path` is `None`.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Input> {
    match path {
        None => Ok(Input::Stdin(io::stdin())),
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Input::File {
                file,
                path: path.to_path_buf(),
            })
        }
    }
}

/// Opens the output file, or stdout if `path` is `None`.
///
/// When the input is a regular file a newly created output file gets the
/// input's permission bits. Output read from stdin is created with the
/// default permissions of the process. An existing output file is truncated
/// and keeps its permissions.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the input permissions cannot be read and
/// [`Error::CreateOutput`] if the file cannot be created.
pub fn open_output(path: Option<&Path>, input: &Input) -> Result<Output> {
    let Some(path) = path else {
        return Ok(Output::Stdout(io::stdout()));
    };

    let mode = input.permissions_mode().map_err(|source| match input {
        Input::File { path, .. } => Error::OpenInput {
            path: path.clone(),
            source,
        },
        Input::Stdin(_) => Error::Io(source),
    })?;

    let (file, created) =
        create_output_file(path, mode).map_err(|source| Error::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Output::File {
        file,
        path: path.to_path_buf(),
        created,
    })
}

/// Creates `path` with `mode`, or truncates it if it already exists.
///
/// The mode only applies to a file created here; an existing file keeps its
/// permissions. Returns whether the file was created.
#[cfg(unix)]
fn create_output_file(path: &Path, mode: Option<u32>) -> io::Result<(File, bool)> {
    use std::fs::Permissions;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    if let Some(mode) = mode {
        options.mode(mode);
    }

    match options.open(path) {
        Ok(file) => {
            // The umask narrows the mode on creation; restore the exact bits.
            if let Some(mode) = mode {
                file.set_permissions(Permissions::from_mode(mode))?;
            }
            Ok((file, true))
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            let file = OpenOptions::new().write(true).truncate(true).open(path)?;
            Ok((file, false))
        }
        Err(err) => Err(err),
    }
}

#[cfg(not(unix))]
fn create_output_file(path: &Path, _mode: Option<u32>) -> io::Result<(File, bool)> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok((file, true)),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            let file = OpenOptions::new().write(true).truncate(true).open(path)?;
            Ok((file, false))
        }
        Err(err) => Err(err),
    }
}
