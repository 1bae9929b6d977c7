//! Default values for configuration options.

use crate::message::limits;

/// Default `User-Agent` header for webhook requests.
pub const USER_AGENT: &str = crate::webhook::DEFAULT_USER_AGENT;

/// Default path written by the `init` subcommand.
pub const CONFIG_FILE: &str = "webhook-send.toml";

/// Default maximum number of embeds per message.
pub const MAX_EMBEDS: usize = limits::EMBEDS_PER_MESSAGE;
