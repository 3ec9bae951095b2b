//! Binding of positional arguments to input and output paths.

use std::path::PathBuf;

use crate::config::{OperationMode, RunConfig};
use crate::error::{Result, UsageError};
use crate::suffix::derive_path;

/// Fully resolved invocation, ready to be executed.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Final configuration, never mutated afterwards
    pub config: RunConfig,
    /// Tarball members to extract (extract mode only)
    pub members: Vec<String>,
    /// Delete the input after a successful run
    pub remove_input: bool,
}

/// Resolves the positional arguments left after flag parsing.
///
/// In extract mode the positionals are member paths and are passed through.
/// Otherwise the first one is the input and the second one the output. With
/// a single positional the output name is derived from the input through the
/// suffix rules, and the input is scheduled for removal unless `keep` is set.
///
/// # Errors
///
/// Returns a usage error for too many positionals, an input or output given
/// both by flag and positionally (`--stdout` counts as an output), or an
/// input whose suffix is not recognized.
pub fn bind_positionals(config: RunConfig, positionals: Vec<String>) -> Result<Plan> {
    if config.mode == OperationMode::ExtractMember {
        return Ok(Plan {
            config,
            members: positionals,
            remove_input: false,
        });
    }

    let mut config = config;
    let mut remove_input = false;
    let mut positionals = positionals.into_iter();

    match (positionals.next(), positionals.next(), positionals.next()) {
        (None, ..) => {}
        (Some(_), _, Some(_)) => return Err(UsageError::TooManyArguments.into()),
        (Some(_), Some(_), None) if config.mode == OperationMode::List => {
            return Err(UsageError::TooManyArguments.into());
        }
        (Some(input), second, None) => {
            if config.input.is_some() {
                return Err(UsageError::MultipleInputs.into());
            }

            match second {
                Some(output) => {
                    if config.output.is_some() || config.stdout {
                        return Err(UsageError::MultipleOutputs.into());
                    }
                    config.output = Some(PathBuf::from(output));
                }
                None if config.mode == OperationMode::List
                    || config.stdout
                    || config.output.is_some() => {}
                None => {
                    let derived = derive_path(config.mode, &input).ok_or_else(|| {
                        UsageError::UnknownSuffix {
                            path: PathBuf::from(&input),
                        }
                    })?;
                    log::debug!("derived output path {derived} from {input}");
                    config.output = Some(PathBuf::from(derived));
                    remove_input = !config.keep;
                }
            }

            config.input = Some(PathBuf::from(input));
        }
    }

    Ok(Plan {
        config,
        members: Vec::new(),
        remove_input,
    })
}
