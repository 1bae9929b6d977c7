//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. The
//! `[message]` section mirrors the message builder; its values are not
//! validated here.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook endpoint configuration
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Message to send
    #[serde(default)]
    pub message: MessageSection,
}

/// Webhook endpoint configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL
    pub url: Option<String>,

    /// User-Agent header
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// HTTP headers as key-value pairs
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Message configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Display name override
    pub username: Option<String>,

    /// Plain-text content
    pub content: Option<String>,

    /// Avatar override
    pub avatar_url: Option<String>,

    /// Forum thread name
    pub thread_name: Option<String>,

    /// Flag names, e.g. `SUPPRESS_NOTIFICATIONS`
    #[serde(default)]
    pub flags: Vec<String>,

    /// Maximum number of embeds (0 disables the check)
    pub max_embeds: Option<usize>,

    /// Rich embeds in display order
    #[serde(default)]
    pub embeds: Vec<EmbedSection>,
}

/// One `[[message.embeds]]` entry.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedSection {
    /// Embed title
    pub title: Option<String>,

    /// Embed description
    pub description: Option<String>,

    /// Link behind the title
    pub url: Option<String>,

    /// Color as an integer or `#rrggbb`
    pub color: Option<ColorValue>,

    /// RFC 3339 timestamp, or `now`
    pub timestamp: Option<String>,

    /// Footer
    pub footer: Option<FooterSection>,

    /// Thumbnail
    pub thumbnail: Option<MediaSection>,

    /// Large image
    pub image: Option<MediaSection>,

    /// Author line
    pub author: Option<AuthorSection>,

    /// Fields in display order
    #[serde(default)]
    pub fields: Vec<FieldSection>,
}

/// A color written either as a packed integer or a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Packed 24-bit integer
    Packed(u32),
    /// `#rrggbb` string
    Hex(String),
}

/// Embed footer table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterSection {
    /// Footer text
    pub text: Option<String>,
    /// Footer icon URL
    pub icon_url: Option<String>,
}

/// Thumbnail or image table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaSection {
    /// Media URL
    pub url: Option<String>,
}

/// Embed author table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorSection {
    /// Author name
    pub name: Option<String>,
    /// Link behind the author name
    pub url: Option<String>,
    /// Author icon URL
    pub icon_url: Option<String>,
}

/// One `[[message.embeds.fields]]` entry.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSection {
    /// Field name
    pub name: Option<String>,
    /// Field value
    pub value: Option<String>,
    /// Lay out inline with neighbouring fields
    #[serde(default)]
    pub inline: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# webhook-send configuration file

[webhook]
# Webhook URL (required unless --dry-run)
# url = "https://discord.com/api/webhooks/<id>/<token>"

# User-Agent header (default: webhook-builder/<version>)
# user_agent = "my-bot/1.0"

# Request timeout in seconds (default: none)
# timeout = 30

# Extra HTTP headers
# [webhook.headers]
# X-Custom-Header = "value"

[message]
# Display name override (max 80 characters)
# username = "status-bot"

# Plain-text content (max 2000 characters)
content = "Hello from webhook-send"

# Avatar override
# avatar_url = "https://example.com/avatar.png"

# Forum thread name (max 100 characters)
# thread_name = "release notes"

# Flags: SUPPRESS_EMBEDS, SUPPRESS_NOTIFICATIONS
# flags = ["SUPPRESS_NOTIFICATIONS"]

# Maximum number of embeds (default: 10, 0 disables the check)
# max_embeds = 10

# Embeds need a description or at least one field
# [[message.embeds]]
# title = "Deploy finished"
# description = "All services are healthy"
# url = "https://example.com/deploys/42"
# color = "#00ff00"
# timestamp = "now"
# footer = { text = "ci", icon_url = "https://example.com/ci.png" }
# thumbnail = { url = "https://example.com/thumb.png" }
# image = { url = "https://example.com/graph.png" }
# author = { name = "deploy-bot", url = "https://example.com", icon_url = "https://example.com/bot.png" }
#
# [[message.embeds.fields]]
# name = "Region"
# value = "eu-west"
# inline = true
"##
    .to_string()
}
