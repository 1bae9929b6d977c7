//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// webhook-send: post a chat webhook message
///
/// Builds a message from a TOML description and/or command-line options,
/// validates it, and posts it as JSON to a webhook URL.
#[derive(Debug, Parser)]
#[command(name = "webhook-send")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Webhook URL (required unless --dry-run)
    #[arg(long)]
    pub url: Option<String>,

    /// Plain-text message content
    #[arg(long)]
    pub content: Option<String>,

    /// Override the webhook's display name
    #[arg(long)]
    pub username: Option<String>,

    /// Override the webhook's avatar
    #[arg(long = "avatar-url")]
    pub avatar_url: Option<String>,

    /// Create a forum thread with this name
    #[arg(long = "thread-name")]
    pub thread_name: Option<String>,

    /// Do not notify mentioned users (`SUPPRESS_NOTIFICATIONS`)
    #[arg(long)]
    pub silent: bool,

    /// User-Agent header for the request
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// HTTP headers in 'Key=Value' or 'Key: Value' format (can be specified multiple times)
    #[arg(long = "header", value_name = "K=V")]
    pub headers: Vec<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print the JSON document instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for webhook-send
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
