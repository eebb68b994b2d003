use std::io;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", root = start_vertex);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber for the graphkit binary.
///
/// The filter comes from `RUST_LOG`, then `GRAPHKIT_LOG`, then the flags.
/// `log_level` is either a bare level applied to both graphkit crates or a
/// full filter directive. Logs always go to stderr so stdout stays clean for
/// command output.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPHKIT_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, log_level)));

    // Algorithm spans are instrumented, so their close events carry run time.
    let json = log_json.then(|| {
        fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_span_events(FmtSpan::CLOSE)
    });
    let compact = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(false)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(compact)
        .try_init()
}

fn default_directives(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(directive) if directive.contains('=') => directive.to_string(),
        Some(level) => crate_directives(level),
        None if verbose => crate_directives("debug"),
        None => crate_directives("warn"),
    }
}

fn crate_directives(level: &str) -> String {
    format!("graphkit={level},graphkit_core={level}")
}
