//! The top-level webhook message.

use super::embed::Embed;
use super::error::{ValidationError, check_optional_length};
use super::flag::{MessageFlag, MessageFlags};
use super::limits;
use super::wire::{self, MessagePayload};

/// Creates a [`Message`] and populates it with `populate`.
///
/// # Example
///
/// ```
/// use webhook_builder::webhook;
///
/// let message = webhook(|m| {
///     m.username("status-bot").content("hello");
/// });
///
/// assert_eq!(
///     message.serialize().unwrap(),
///     r#"{"username":"status-bot","embeds":null,"content":"hello"}"#
/// );
/// ```
pub fn webhook(populate: impl FnOnce(&mut Message)) -> Message {
    let mut message = Message::new();
    populate(&mut message);
    message
}

/// A webhook message: plain-text content and/or rich embeds.
///
/// The builder accepts any state; rules are checked by [`Message::serialize`],
/// which reports the first violated rule in this order:
///
/// 1. username length
/// 2. embed count, then each embed in order
/// 3. content length
/// 4. content or at least one embed present
/// 5. thread name length
/// 6. `SUPPRESS_EMBEDS` without embeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    username: Option<String>,
    content: Option<String>,
    avatar_url: Option<String>,
    thread_name: Option<String>,
    embeds: Vec<Embed>,
    flags: MessageFlags,
    max_embeds: Option<usize>,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            username: None,
            content: None,
            avatar_url: None,
            thread_name: None,
            embeds: Vec::new(),
            flags: MessageFlags::empty(),
            max_embeds: Some(limits::EMBEDS_PER_MESSAGE),
        }
    }
}

impl Message {
    /// Creates an empty message with the default embed cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the webhook's display name (at most 80 characters).
    pub fn username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the plain-text content (at most 2000 characters).
    pub fn content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = Some(content.into());
        self
    }

    /// Overrides the webhook's avatar.
    pub fn avatar(&mut self, avatar_url: impl Into<String>) -> &mut Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Creates a forum thread with this name (at most 100 characters).
    pub fn thread_name(&mut self, thread_name: impl Into<String>) -> &mut Self {
        self.thread_name = Some(thread_name.into());
        self
    }

    /// Appends an embed populated by `populate`.
    pub fn embed(&mut self, populate: impl FnOnce(&mut Embed)) -> &mut Self {
        let mut embed = Embed::new();
        populate(&mut embed);
        self.embeds.push(embed);
        self
    }

    /// Appends an already built embed.
    pub fn add_embed(&mut self, embed: Embed) -> &mut Self {
        self.embeds.push(embed);
        self
    }

    /// Adds flags to the message. Adding a flag that is already set has no effect.
    pub fn add_flags(&mut self, flags: impl IntoIterator<Item = MessageFlag>) -> &mut Self {
        self.flags.extend(flags);
        self
    }

    /// Sets the maximum number of embeds accepted by `serialize`.
    ///
    /// Defaults to the platform cap of 10. `None` disables the check.
    pub const fn max_embeds(&mut self, limit: Option<usize>) -> &mut Self {
        self.max_embeds = limit;
        self
    }

    /// Returns the embeds in insertion order.
    #[must_use]
    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }

    /// Returns the flags set on the message.
    #[must_use]
    pub const fn flags(&self) -> MessageFlags {
        self.flags
    }

    fn check_embed_count(&self) -> Result<(), ValidationError> {
        match self.max_embeds {
            Some(limit) if self.embeds.len() > limit => Err(ValidationError::TooManyEmbeds {
                count: self.embeds.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }

    fn payload(&self) -> Result<MessagePayload<'_>, ValidationError> {
        check_optional_length("username", self.username.as_deref(), limits::USERNAME)?;

        let embeds = if self.embeds.is_empty() {
            None
        } else {
            self.check_embed_count()?;
            Some(
                self.embeds
                    .iter()
                    .map(Embed::payload)
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        check_optional_length("content", self.content.as_deref(), limits::CONTENT)?;

        if self.content.is_none() && embeds.is_none() {
            return Err(ValidationError::MissingContent);
        }

        check_optional_length(
            "thread_name",
            self.thread_name.as_deref(),
            limits::THREAD_NAME,
        )?;

        if self.flags.contains(MessageFlag::SuppressEmbeds) && embeds.is_some() {
            return Err(ValidationError::IncompatibleFlag);
        }

        Ok(MessagePayload {
            username: self.username.as_deref(),
            embeds,
            content: self.content.as_deref(),
            avatar_url: self.avatar_url.as_deref(),
            thread_name: self.thread_name.as_deref(),
            flags: (!self.flags.is_empty()).then(|| self.flags.bits()),
        })
    }

    /// Validates the whole message tree and renders the JSON document.
    ///
    /// Calling this twice on an unchanged message yields identical output.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, including errors
    /// from embeds and their sub-objects, unchanged.
    pub fn serialize(&self) -> Result<String, ValidationError> {
        self.payload().map(|p| wire::to_json(&p))
    }
}
