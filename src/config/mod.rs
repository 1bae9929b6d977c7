//! Configuration layer for the `webhook-send` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The message is built from the `[message]` section first; `--content`,
//! `--username`, `--avatar-url` and `--thread-name` then overwrite the
//! matching values. `--silent` adds `SUPPRESS_NOTIFICATIONS` to any flags
//! from the file.
//!
//! Headers from the file and from `--header` are merged; on a name clash the
//! CLI value wins.
//!
//! Embeds can only be described in the config file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{
    AuthorSection, ColorValue, EmbedSection, FieldSection, FooterSection, MediaSection,
    MessageSection, TomlConfig, WebhookSection, default_config_template,
};
pub use validated::{ValidatedConfig, write_default_config};
