//! jsonfmt binary - pretty-print a JSON file to stdout.
//!
//! Thin wiring around `jsonfmt_core::stringify_file`: take the path from
//! the command line, print the formatted document on success, and log a
//! human-readable diagnostic on failure.

use std::process::ExitCode;

use jsonfmt_core::{StringifyError, stringify_file};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: jsonfmt <path-to-json-file>");
        return ExitCode::FAILURE;
    };

    match stringify_file(&path) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Logs one diagnostic per failure kind; no string is produced.
fn report(err: &StringifyError) {
    match err {
        StringifyError::NotFound(path) => {
            tracing::error!("the file '{}' was not found", path.display());
        }
        StringifyError::PermissionDenied(path) => {
            tracing::error!("permission denied reading '{}'", path.display());
        }
        StringifyError::MalformedJson(detail) => {
            tracing::error!("error decoding JSON: {detail}");
        }
        StringifyError::Io(detail) => {
            tracing::error!("I/O error: {detail}");
        }
    }
}
