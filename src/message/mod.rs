//! Validating builders for webhook messages.
//!
//! This module provides:
//! - The top-level message ([`Message`], [`webhook`])
//! - Rich embeds ([`Embed`]) and their sub-objects ([`Footer`], [`Thumbnail`],
//!   [`Image`], [`Author`], [`Field`])
//! - Message flags ([`MessageFlag`], [`MessageFlags`])
//! - Platform limits ([`limits`])
//! - The validation error taxonomy ([`ValidationError`])
//!
//! Builders are plain mutable data. Nothing is checked until `serialize`,
//! which walks the tree bottom-up and either returns the complete JSON text
//! or the first rule that was violated.

mod builder;
mod embed;
mod error;
mod flag;
pub mod limits;
mod parts;
mod wire;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod parts_tests;

pub use builder::{Message, webhook};
pub use embed::Embed;
pub use error::ValidationError;
pub use flag::{MessageFlag, MessageFlags};
pub use parts::{Author, Field, Footer, Image, Thumbnail};
