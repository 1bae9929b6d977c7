//! webhook-builder: chat webhook messages with validation
//!
//! A library for assembling chat-platform webhook messages (content, rich
//! embeds, flags), validating them against the platform's limits, and
//! serializing them to the JSON document the platform accepts. The
//! [`webhook`](mod@webhook) module posts the document to an endpoint.
//!
//! # Example
//!
//! ```
//! use webhook_builder::{color, webhook};
//!
//! let message = webhook(|m| {
//!     m.username("status-bot").embed(|e| {
//!         e.title("Deploy finished")
//!             .color(color::GREEN)
//!             .field(|f| {
//!                 f.name("Region").value("eu-west").inline(true);
//!             });
//!     });
//! });
//!
//! let json = message.serialize().unwrap();
//! assert!(json.starts_with(r#"{"username":"status-bot","embeds":[{"title":"Deploy finished""#));
//! ```

pub mod color;
pub mod config;
pub mod message;
pub mod webhook;

pub use message::{
    Author, Embed, Field, Footer, Image, Message, MessageFlag, MessageFlags, Thumbnail,
    ValidationError, webhook,
};
pub use webhook::send_webhook;
