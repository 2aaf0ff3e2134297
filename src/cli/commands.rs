//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io;

use vislab_core::showcase;

use crate::conventions;

use super::{CliError, CliResult, ExitCode, Topic};

/// Run every demonstration in order.
pub fn tour() -> CliResult<ExitCode> {
    tracing::debug!("running full tour");
    let stdout = io::stdout();
    showcase::run_all(&mut stdout.lock()).map_err(write_error)?;
    Ok(ExitCode::SUCCESS)
}

/// Run one demonstration topic.
pub fn show(topic: Topic) -> CliResult<ExitCode> {
    tracing::debug!(?topic, "running demonstration");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match topic {
        Topic::Constants => showcase::demo_constants(&mut out),
        Topic::Statics => showcase::demo_statics(&mut out),
        Topic::Functions => showcase::demo_functions(&mut out),
        Topic::Types => showcase::demo_types(&mut out),
        Topic::Structs => showcase::demo_structs(&mut out),
    }
    .map_err(write_error)?;
    Ok(ExitCode::SUCCESS)
}

/// Classify an identifier under the capitalization convention and print the
/// result, as a sentence or as JSON.
pub fn explain(identifier: &str, json: bool) -> CliResult<ExitCode> {
    let visibility = conventions::classify(identifier)
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;

    if json {
        let report = serde_json::json!({
            "identifier": identifier,
            "visibility": visibility.as_str(),
            "rust": visibility.rust_spelling(),
        });
        println!("{report}");
    } else {
        println!(
            "{identifier}: {}; Rust spelling: {}",
            visibility.as_str(),
            visibility.rust_spelling()
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Map a sink write failure into a CLI error.
fn write_error(e: io::Error) -> CliError {
    CliError::failure(format!("Error writing demonstration output: {e}"))
}
