//! graphkit - build a graph from the command line and run one algorithm
//!
//! Vertices and edges are given as flags; the subcommand picks the
//! traversal, spanning tree or shortest-path run to print.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphkit_core::error::{ExitCode as GraphExitCode, GraphError};
use graphkit_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(GraphExitCode::Success),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            exit_with(e.exit_code())
        }
    }
}

/// A bad `--edge` or a missing subcommand fails inside clap, before `Cli.format`
/// exists. Scripts asking for JSON still get the error envelope; help and
/// version output are not failures and print as usual.
fn parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    );
    if informational || !json_requested() {
        err.exit();
    }

    let error = GraphError::UsageError(err.to_string());
    report(&error, OutputFormat::Json, false);
    exit_with(error.exit_code())
}

fn report(error: &GraphError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {error}"),
        OutputFormat::Human => {}
    }
}

fn exit_with(code: GraphExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// `--format json`, `--format=json` or `GRAPHKIT_FORMAT=json`, read from the
/// raw process arguments
fn json_requested() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    let on_argv = args.iter().enumerate().any(|(i, arg)| {
        arg == "--format=json"
            || (arg == "--format" && args.get(i + 1).is_some_and(|next| next == "json"))
    });
    on_argv || env::var("GRAPHKIT_FORMAT").is_ok_and(|value| value == "json")
}
