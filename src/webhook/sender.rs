//! Webhook sender trait and HTTP implementation.

use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue, StatusCode};

use crate::message::{Message, webhook};

use super::{HttpClient, HttpRequest, ReqwestClient, SendError};

#[cfg(test)]
#[path = "sender_tests.rs"]
mod tests;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("webhook-builder/", env!("CARGO_PKG_VERSION"));

/// Trait for delivering serialized messages to an endpoint.
///
/// Implementations serialize the message first and transmit nothing if
/// validation fails.
pub trait WebhookSender: Send + Sync {
    /// Serializes `message` and delivers it.
    ///
    /// Returns the endpoint's status code. A non-2xx status is not an error;
    /// callers decide what to do with it.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Validation`] if the message is invalid and
    /// [`SendError::Http`] if the request could not be delivered.
    fn send(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<StatusCode, SendError>> + Send;
}

/// HTTP webhook endpoint.
///
/// Every message is sent as a `POST` with `Content-Type: application/json`
/// and a `User-Agent` header. The response body is discarded.
///
/// # Example
///
/// ```
/// use webhook_builder::webhook::{HttpWebhook, ReqwestClient};
/// use url::Url;
///
/// let endpoint = HttpWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://chat.example.com/api/webhooks/1/token").unwrap(),
/// );
/// assert_eq!(endpoint.url().host_str(), Some("chat.example.com"));
/// ```
#[derive(Debug)]
pub struct HttpWebhook<H> {
    client: H,
    url: url::Url,
    user_agent: HeaderValue,
    headers: HeaderMap,
}

impl<H> HttpWebhook<H> {
    /// Creates an endpoint with the default user agent and no extra headers.
    #[must_use]
    pub fn new(client: H, url: url::Url) -> Self {
        Self {
            client,
            url,
            user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
            headers: HeaderMap::new(),
        }
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: HeaderValue) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Sets additional headers sent with every request.
    ///
    /// `Content-Type` and `User-Agent` entries are overridden.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Returns the configured URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Returns the configured user agent.
    #[must_use]
    pub const fn user_agent(&self) -> &HeaderValue {
        &self.user_agent
    }

    /// Builds the POST request carrying `document`.
    fn build_request(&self, document: String) -> HttpRequest {
        let mut request = HttpRequest::post(self.url.clone());

        for (name, value) in &self.headers {
            request.headers.append(name, value.clone());
        }

        request
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(USER_AGENT, self.user_agent.clone())
            .with_body(document.into_bytes())
    }
}

impl<H: HttpClient> WebhookSender for HttpWebhook<H> {
    async fn send(&self, message: &Message) -> Result<StatusCode, SendError> {
        let document = message.serialize()?;
        let request = self.build_request(document);

        tracing::debug!(
            url = %self.url,
            bytes = request.body.as_ref().map_or(0, Vec::len),
            "Posting webhook message"
        );

        let response = self.client.request(request).await?;

        if response.is_success() {
            tracing::info!(status = %response.status, "Webhook message delivered");
        } else {
            tracing::warn!(
                status = %response.status,
                body = response.body_text().unwrap_or("<binary>"),
                "Webhook endpoint did not accept the message"
            );
        }

        Ok(response.status)
    }
}

/// Builds a message with `populate` and posts it to `url` using a default
/// [`ReqwestClient`].
///
/// # Errors
///
/// Returns [`SendError::Validation`] without sending anything if the message
/// is invalid, or [`SendError::Http`] if delivery fails.
///
/// # Example
///
/// ```no_run
/// use webhook_builder::send_webhook;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = Url::parse("https://chat.example.com/api/webhooks/1/token")?;
/// let status = send_webhook(url, |m| {
///     m.content("Deploy finished");
/// })
/// .await?;
/// assert!(status.is_success());
/// # Ok(())
/// # }
/// ```
pub async fn send_webhook(
    url: url::Url,
    populate: impl FnOnce(&mut Message),
) -> Result<StatusCode, SendError> {
    let message = webhook(populate);
    HttpWebhook::new(ReqwestClient::new(), url)
        .send(&message)
        .await
}
