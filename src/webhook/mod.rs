//! Webhook transport for delivering serialized messages.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Posting messages to an endpoint ([`WebhookSender`], [`HttpWebhook`], [`send_webhook`])
//!
//! Delivery is a single attempt. The endpoint's status code is handed back to
//! the caller rather than interpreted here.

mod client;
mod error;
mod http;
mod sender;


pub use client::ReqwestClient;
pub use error::{HttpError, SendError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{DEFAULT_USER_AGENT, HttpWebhook, WebhookSender, send_webhook};
