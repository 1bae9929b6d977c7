//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use webhook_builder::config::{ConfigError, field};

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, invalid message, unreadable config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - network failure or a non-success status from the endpoint.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::URL => {
            eprintln!("\nPass --dry-run to print the message without sending it.");
            eprintln!("Run 'webhook-send init' to generate a configuration template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'webhook-send init' to generate a configuration template.");
        }
        ConfigError::InvalidMessage(_) => {
            eprintln!("\nThe message needs content, or at least one embed.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so that `--dry-run` output on stdout stays clean.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
