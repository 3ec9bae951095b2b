//! Compression, decompression and listing engines.

use std::io::{self, BufReader, Read, Write};

use crate::config::{Preset, Tuning, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};
use crate::archive;

/// Processing engine invoked once per run.
///
/// Implementations read the whole `input` and write their result to
/// `output`. The caller flushes `output`.
pub trait Engine {
    /// Compresses `input`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, compressing or writing fails.
    fn compress(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        tar_aware: bool,
        preset: Preset,
        tuning: &Tuning,
    ) -> Result<()>;

    /// Decompresses `input`, keeping only `members` when the list is not empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is corrupt, a member is missing, or I/O fails.
    fn decompress(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        tar_aware: bool,
        members: &[String],
        tuning: &Tuning,
    ) -> Result<()>;

    /// Writes a listing of `input`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is corrupt or I/O fails.
    fn list(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        tar_aware: bool,
        tuning: &Tuning,
    ) -> Result<()>;
}

/// Engine producing and reading the `.xz` container with `lzma-rs`.
///
/// `lzma-rs` exposes neither presets nor threading, so the preset and
/// tuning values are accepted but have no effect on the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct XzEngine;

impl XzEngine {
    fn decode(input: &mut dyn Read) -> Result<(u64, Vec<u8>)> {
        let mut compressed = Vec::new();
        input.read_to_end(&mut compressed)?;

        let mut decompressed = Vec::new();
        lzma_rs::xz_decompress(&mut &compressed[..], &mut decompressed).map_err(|e| {
            Error::Decompression {
                message: e.to_string(),
            }
        })?;

        log::debug!(
            "decompressed {} bytes to {} bytes",
            compressed.len(),
            decompressed.len()
        );
        Ok((compressed.len() as u64, decompressed))
    }
}

impl Engine for XzEngine {
    fn compress(
        &self,
        input: &mut dyn Read,
        mut output: &mut dyn Write,
        tar_aware: bool,
        preset: Preset,
        tuning: &Tuning,
    ) -> Result<()> {
        log::debug!(
            "compressing with preset {:#x} (tar: {tar_aware}, processes: {}, qsize: {:?}, block fraction: {:?})",
            preset.raw(),
            tuning.processes,
            tuning.queue_size,
            tuning.block_fraction
        );

        let mut reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, input);
        lzma_rs::xz_compress(&mut reader, &mut output).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => Error::Compression {
                message: e.to_string(),
            },
            _ => Error::Io(e),
        })?;
        Ok(())
    }

    fn decompress(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        tar_aware: bool,
        members: &[String],
        _tuning: &Tuning,
    ) -> Result<()> {
        if !members.is_empty() && !tar_aware {
            return Err(Error::ExtractWithoutTar.into());
        }

        let (_, data) = Self::decode(input)?;
        if members.is_empty() {
            output.write_all(&data)?;
        } else {
            archive::write_members(&data, members, output)?;
        }
        Ok(())
    }

    fn list(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
        tar_aware: bool,
        _tuning: &Tuning,
    ) -> Result<()> {
        let (compressed, data) = Self::decode(input)?;
        if tar_aware {
            for path in archive::member_paths(&data)? {
                writeln!(output, "{path}")?;
            }
        } else {
            writeln!(output, "{compressed} {}", data.len())?;
        }
        Ok(())
    }
}
