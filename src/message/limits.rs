//! Platform limits for message payloads.
//!
//! Lengths are counted in characters (Unicode scalar values).

/// Maximum length of the webhook username override.
pub const USERNAME: usize = 80;

/// Maximum length of plain-text message content.
pub const CONTENT: usize = 2000;

/// Maximum length of a thread name.
pub const THREAD_NAME: usize = 100;

/// Maximum length of an embed title.
pub const EMBED_TITLE: usize = 256;

/// Maximum length of an embed description.
pub const EMBED_DESCRIPTION: usize = 4096;

/// Maximum length of footer text.
pub const FOOTER_TEXT: usize = 2048;

/// Maximum length of an author name.
pub const AUTHOR_NAME: usize = 256;

/// Maximum length of a field name.
pub const FIELD_NAME: usize = 256;

/// Maximum length of a field value.
pub const FIELD_VALUE: usize = 1024;

/// Default maximum number of embeds per message.
pub const EMBEDS_PER_MESSAGE: usize = 10;
