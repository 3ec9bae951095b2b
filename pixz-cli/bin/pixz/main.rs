//! Parallel indexing XZ compression utility
//!
//! Compresses, decompresses, lists and extracts `.xz` files and tarballs.

use std::process;

use clap::{CommandFactory, Parser};

mod opts;

use opts::PixzOpts;

use pixz_cli::{run_cli, CliError, Result, UsageError};

const PROGRAM_NAME: &str = "pixz";

/// Parses the command line and runs it.
fn run() -> Result<()> {
    let opts = PixzOpts::try_parse().map_err(|err| {
        // Keep clap's one-line summary, the help text is printed separately
        let rendered = err.to_string();
        let summary = rendered.lines().next().unwrap_or_default();
        let summary = summary.strip_prefix("error: ").unwrap_or(summary);
        UsageError::InvalidArguments(summary.to_string())
    })?;

    if opts.help {
        return Err(UsageError::HelpRequested.into());
    }

    let (config, positionals) = opts.into_parts();
    run_cli(config, positionals)
}

/// Prints `err` to stderr the way its class requires.
fn report(err: &CliError) {
    let help = PixzOpts::command().render_help();
    match err.as_usage() {
        Some(UsageError::HelpRequested) => eprintln!("{help}"),
        Some(usage) => eprintln!("{usage}\n\n{help}"),
        None => eprintln!("{PROGRAM_NAME}: {err}"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PIXZ_LOG", "warn")).init();

    if let Err(err) = run() {
        report(&err);
        process::exit(err.exit_code());
    }
}
