//! CLI module for the vislab tour
//!
//! ## Commands
//!
//! - `tour` - Run every visibility demonstration in order
//! - `show <TOPIC>` - Run one demonstration topic
//! - `explain <IDENT>` - Classify an identifier under the capitalization convention
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::version::VISLAB_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// A guided tour of Rust item visibility
#[derive(Parser, Debug)]
#[command(name = "vislab")]
#[command(version = VISLAB_VERSION)]
#[command(about = "A guided tour of Rust item visibility", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every visibility demonstration in order
    Tour,

    /// Run one demonstration topic
    Show {
        /// Which declaration kind to demonstrate
        #[arg(value_enum, value_name = "TOPIC")]
        topic: Topic,
    },

    /// Classify an identifier under the capitalization convention
    Explain {
        /// Identifier to classify
        #[arg(value_name = "IDENT")]
        identifier: String,
        /// Emit the classification as JSON
        #[arg(long)]
        json: bool,
    },
}

/// The demonstration topics, one per kind of declaration.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Constants,
    Statics,
    Functions,
    Types,
    Structs,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Tour => commands::tour(),
        Command::Show { topic } => commands::show(topic),
        Command::Explain { identifier, json } => commands::explain(&identifier, json),
    }
}

// ============================================================================
// Tests
// ============================================================================
