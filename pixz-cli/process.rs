//! High-level orchestration of one pixz invocation.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::bind::{bind_positionals, Plan};
use crate::config::{OperationMode, RunConfig, DEFAULT_BUFFER_SIZE};
use crate::error::{Result, UsageError};
use crate::io::{open_input, open_output, Output};
use crate::operations::{Engine, XzEngine};

/// Invokes the engine operation selected by the plan's mode.
///
/// Compressed output is never written to a terminal.
///
/// # Errors
///
/// Returns [`UsageError::TerminalOutput`] when compressing to a terminal,
/// and any error produced by the engine or by flushing the output.
pub fn dispatch<E: Engine + ?Sized>(
    engine: &E,
    plan: &Plan,
    input: &mut dyn io::Read,
    output: Output,
) -> Result<()> {
    let config = &plan.config;

    if config.mode == OperationMode::Compress && output.is_terminal() {
        return Err(UsageError::TerminalOutput.into());
    }

    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, output);
    match config.mode {
        OperationMode::Compress => {
            engine.compress(input, &mut writer, config.tar, config.preset, &config.tuning)?;
        }
        OperationMode::Decompress => {
            engine.decompress(input, &mut writer, config.tar, &[], &config.tuning)?;
        }
        OperationMode::ExtractMember => {
            engine.decompress(input, &mut writer, config.tar, &plan.members, &config.tuning)?;
        }
        OperationMode::List => {
            engine.list(input, &mut writer, config.tar, &config.tuning)?;
        }
    }
    writer.flush()?;

    Ok(())
}

/// Removes the input file if the plan asks for it.
///
/// Failure to remove is logged and otherwise ignored: the output has already
/// been written at this point.
///
/// # Returns
///
/// Returns `true` if the input file was removed.
pub fn cleanup_input_file(plan: &Plan) -> bool {
    if !plan.remove_input || plan.config.keep {
        return false;
    }
    let Some(path) = plan.config.input.as_deref() else {
        return false;
    };

    match std::fs::remove_file(path) {
        Ok(()) => {
            log::debug!("removed input file {}", path.display());
            true
        }
        Err(err) => {
            log::warn!("{}: can not remove input file: {err}", path.display());
            false
        }
    }
}

/// Removes a partial output file left by a failed run.
fn discard_output_file(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => log::debug!("removed partial output file {}", path.display()),
        Err(err) => log::warn!("{}: can not remove output file: {err}", path.display()),
    }
}

/// Executes a resolved plan with the given engine.
///
/// 1. Opens the input file (or stdin)
/// 2. Opens the output file (or stdout), preserving the input's permissions
/// 3. Dispatches to the engine, removing an output file it created on failure
/// 4. Removes the input file if the output name was derived from it
///
/// # Errors
///
/// Returns an error if a stream cannot be opened or the operation fails.
pub fn execute<E: Engine + ?Sized>(engine: &E, plan: &Plan) -> Result<()> {
    let config = &plan.config;

    let mut input = open_input(config.input.as_deref())?;
    let output = open_output(config.output.as_deref(), &input)?;

    let created = output.created_path().map(Path::to_path_buf);

    if let Err(err) = dispatch(engine, plan, &mut input, output) {
        if let Some(path) = created {
            discard_output_file(&path);
        }
        return Err(err);
    }
    cleanup_input_file(plan);

    Ok(())
}

/// Binds the positionals and runs the invocation with [`XzEngine`].
///
/// # Errors
///
/// Returns a usage error for malformed invocations and a fatal error for
/// failures while processing.
pub fn run_cli(config: RunConfig, positionals: Vec<String>) -> Result<()> {
    let plan = bind_positionals(config, positionals)?;
    log::debug!("resolved plan: {plan:?}");
    execute(&XzEngine, &plan)
}
