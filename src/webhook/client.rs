//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` implementing [`HttpClient`].
/// No timeout is configured unless [`ReqwestClient::with_timeout`] is used.
///
/// # Example
///
/// ```no_run
/// use webhook_builder::webhook::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://chat.example.com/api/webhooks/1/token")?;
/// let request = HttpRequest::post(url).with_body(br#"{"content":"hi"}"#.to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a client whose requests fail with [`HttpError::Timeout`]
    /// after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::ClientBuild(Box::new(e)))?;
        Ok(Self { inner })
    }

    /// Creates an HTTP client from an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self
            .inner
            .request(req.method, req.url.as_str())
            .headers(req.headers);

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        // The body is drained so the connection can be reused.
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, body))
    }
}
