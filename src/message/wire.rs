//! Serializable payload shapes.
//!
//! These borrow from validated builders. Field declaration order is the key
//! order on the wire, and absent optional values are skipped rather than
//! emitted as `null` (except `embeds`, which the platform expects as `null`).

use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct MessagePayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    pub embeds: Option<Vec<EmbedPayload<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmbedPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterPayload<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<MediaPayload<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaPayload<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldPayload<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FooterPayload<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<&'a str>,
}

/// Shared by thumbnails and images.
#[derive(Debug, Serialize)]
pub(crate) struct MediaPayload<'a> {
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthorPayload<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FieldPayload<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub inline: bool,
}

/// Renders a payload as compact JSON text.
///
/// Payloads contain only strings, integers, booleans and sequences, none of
/// which can fail to serialize.
pub(crate) fn to_json<T: Serialize>(payload: &T) -> String {
    serde_json::to_string(payload).expect("payload types always serialize to JSON")
}
