//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the binary. All validation is performed during construction,
//! including validation of the assembled message.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use url::Url;

use crate::color;
use crate::message::{Embed, Message, MessageFlag};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{ColorValue, EmbedSection, MessageSection, TomlConfig};

/// Fully validated configuration ready for use by the binary.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL; `None` only in dry-run mode
    pub url: Option<Url>,

    /// `User-Agent` header value
    pub user_agent: HeaderValue,

    /// Extra HTTP headers
    pub headers: HeaderMap,

    /// Request timeout, if any
    pub timeout: Option<Duration>,

    /// The message to send; it passed validation
    pub message: Message,

    /// Print the document instead of sending it
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URL path carries the webhook token, so only the host is shown.
        let host = self
            .url
            .as_ref()
            .and_then(Url::host_str)
            .unwrap_or("none");
        let timeout = self
            .timeout
            .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()));

        write!(
            f,
            "Config {{ host: {host}, user_agent: {:?}, headers: {}, timeout: {timeout}, \
             embeds: {}, dry_run: {} }}",
            self.user_agent,
            self.headers.len(),
            self.message.embeds().len(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing (outside dry-run) or invalid
    /// - A header, user agent or timeout is invalid
    /// - A flag name, color or timestamp in the message section is invalid
    /// - The assembled message fails validation
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let user_agent = Self::resolve_user_agent(cli, toml)?;
        let headers = Self::resolve_headers(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let message = Self::build_message(cli, toml)?;

        message.serialize()?;

        Ok(Self {
            url,
            user_agent,
            headers,
            timeout,
            message,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<Url>, ConfigError> {
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()));

        let Some(url_str) = url_str else {
            if cli.dry_run {
                return Ok(None);
            }
            return Err(ConfigError::missing(
                field::URL,
                "Use --url or set webhook.url in config file",
            ));
        };

        Url::parse(url_str)
            .map(Some)
            .map_err(|e| ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: e.to_string(),
            })
    }

    fn resolve_user_agent(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<HeaderValue, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let agent = cli
            .user_agent
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.user_agent.as_deref()))
            .unwrap_or(defaults::USER_AGENT);

        parse_header_value("User-Agent", agent)
    }

    fn resolve_headers(cli: &Cli, toml: Option<&TomlConfig>) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();

        // Add TOML headers first (CLI can override)
        if let Some(toml) = toml {
            for (name, value) in &toml.webhook.headers {
                headers.insert(parse_header_name(name)?, parse_header_value(name, value)?);
            }
        }

        for header_str in &cli.headers {
            let (name, value) = parse_header_string(header_str)?;
            headers.insert(parse_header_name(&name)?, parse_header_value(&name, &value)?);
        }

        Ok(headers)
    }

    fn resolve_timeout(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Duration>, ConfigError> {
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout));

        match seconds {
            Some(0) => Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            }),
            other => Ok(other.map(Duration::from_secs)),
        }
    }

    /// Builds the message from the TOML section, then applies CLI overrides.
    fn build_message(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Message, ConfigError> {
        let mut message = match toml {
            Some(toml) => message_from_section(&toml.message)?,
            None => Message::new(),
        };

        if let Some(ref username) = cli.username {
            message.username(username.as_str());
        }
        if let Some(ref content) = cli.content {
            message.content(content.as_str());
        }
        if let Some(ref avatar_url) = cli.avatar_url {
            message.avatar(avatar_url.as_str());
        }
        if let Some(ref thread_name) = cli.thread_name {
            message.thread_name(thread_name.as_str());
        }
        if cli.silent {
            message.add_flags([MessageFlag::SuppressNotifications]);
        }

        Ok(message)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn message_from_section(section: &MessageSection) -> Result<Message, ConfigError> {
    let mut message = Message::new();

    if let Some(ref username) = section.username {
        message.username(username.as_str());
    }
    if let Some(ref content) = section.content {
        message.content(content.as_str());
    }
    if let Some(ref avatar_url) = section.avatar_url {
        message.avatar(avatar_url.as_str());
    }
    if let Some(ref thread_name) = section.thread_name {
        message.thread_name(thread_name.as_str());
    }

    let flags = section
        .flags
        .iter()
        .map(|name| {
            MessageFlag::from_name(name).ok_or_else(|| ConfigError::InvalidFlag(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    message.add_flags(flags);

    // 0 disables the cap
    let max_embeds = section.max_embeds.unwrap_or(defaults::MAX_EMBEDS);
    message.max_embeds((max_embeds > 0).then_some(max_embeds));

    for embed in &section.embeds {
        message.add_embed(embed_from_section(embed)?);
    }

    Ok(message)
}

fn embed_from_section(section: &EmbedSection) -> Result<Embed, ConfigError> {
    let mut embed = Embed::new();

    if let Some(ref title) = section.title {
        embed.title(title.as_str());
    }
    if let Some(ref description) = section.description {
        embed.description(description.as_str());
    }
    if let Some(ref url) = section.url {
        embed.url(url.as_str());
    }
    if let Some(ref value) = section.color {
        embed.color(parse_color(value)?);
    }
    if let Some(ref timestamp) = section.timestamp {
        embed.timestamp(parse_timestamp(timestamp)?);
    }

    apply_sub_objects(&mut embed, section);

    for field in &section.fields {
        embed.field(|f| {
            if let Some(ref name) = field.name {
                f.name(name.as_str());
            }
            if let Some(ref value) = field.value {
                f.value(value.as_str());
            }
            f.inline(field.inline);
        });
    }

    Ok(embed)
}

/// Copies footer, thumbnail, image and author tables onto the embed.
///
/// Missing required keys are left unset so the builder reports them.
fn apply_sub_objects(embed: &mut Embed, section: &EmbedSection) {
    if let Some(ref footer) = section.footer {
        embed.footer(|f| {
            if let Some(ref text) = footer.text {
                f.text(text.as_str());
            }
            if let Some(ref icon_url) = footer.icon_url {
                f.icon(icon_url.as_str());
            }
        });
    }
    if let Some(ref thumbnail) = section.thumbnail {
        embed.thumbnail(|t| {
            if let Some(ref url) = thumbnail.url {
                t.url(url.as_str());
            }
        });
    }
    if let Some(ref image) = section.image {
        embed.image(|i| {
            if let Some(ref url) = image.url {
                i.url(url.as_str());
            }
        });
    }
    if let Some(ref author) = section.author {
        embed.author(|a| {
            if let Some(ref name) = author.name {
                a.name(name.as_str());
            }
            if let Some(ref url) = author.url {
                a.url(url.as_str());
            }
            if let Some(ref icon_url) = author.icon_url {
                a.icon(icon_url.as_str());
            }
        });
    }
}

fn parse_color(value: &ColorValue) -> Result<u32, ConfigError> {
    match value {
        ColorValue::Packed(packed) => Ok(*packed),
        ColorValue::Hex(hex) => {
            color::parse_hex(hex).ok_or_else(|| ConfigError::InvalidColor(hex.clone()))
        }
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ConfigError> {
    if value.trim().eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }

    DateTime::parse_from_rfc3339(value.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| ConfigError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_string(s: &str) -> Result<(String, String), ConfigError> {
    // Try "Key=Value" format first
    if let Some((name, value)) = s.split_once('=') {
        return Ok((name.trim().to_string(), value.trim().to_string()));
    }

    if let Some((name, value)) = s.split_once(':') {
        return Ok((name.trim().to_string(), value.trim().to_string()));
    }

    Err(ConfigError::InvalidHeader {
        value: s.to_string(),
    })
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse::<HeaderName>()
        .map_err(|e| ConfigError::InvalidHeaderName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
