mod cli;
mod error;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use hrx_core::{Report, Silent, Sink, WriterSink};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Mode, USAGE_BRIEF};
use crate::error::CliError;

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        return help();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(&err),
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// `--help` and `--version` print and succeed. Anything else is reported
/// like every other failure: one `error:` line and exit code 1.
fn parse_failure(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => match err.print() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        _ => {
            eprintln!("error: {}", clap_message(err));
            ExitCode::FAILURE
        }
    }
}

/// First line of clap's rendered error, without its own `error:` prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}

fn help() -> ExitCode {
    match Cli::command().print_long_help() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.usage {
        eprintln!("{USAGE_BRIEF}");
        return Ok(());
    }

    let mode = match cli.mode() {
        Err(CliError::MissingMode) if !cli.has_flags() => {
            Cli::command().print_long_help()?;
            return Ok(());
        }
        mode => mode?,
    };
    tracing::debug!(?mode, "starting");

    let report = Report::new();
    let mut stdout = WriterSink::new(io::stdout().lock());
    let mut silent = Silent;
    let sink: &mut dyn Sink = match mode {
        Mode::List => &mut stdout,
        _ if cli.verbose => &mut stdout,
        _ => &mut silent,
    };

    match mode {
        Mode::List => {
            let archive = cli.existing_archive()?;
            hrx_core::list(archive, cli.paths.as_slice(), &report, sink)?;
        }
        Mode::Create => {
            let archive = cli.archive()?;
            hrx_core::create(&cli.options(), archive, cli.paths.as_slice(), &report, sink)?;
        }
        Mode::Extract => {
            let archive = cli.existing_archive()?;
            let directory = cli.output_dir()?;
            hrx_core::extract(
                &cli.options(),
                archive,
                directory,
                cli.paths.as_slice(),
                &report,
                sink,
            )?;
        }
    }
    Ok(())
}
