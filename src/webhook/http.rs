//! HTTP request/response types and client trait.

use super::HttpError;

/// An HTTP request to be sent.
///
/// Uses standard `http` crate types for method and headers, so any
/// [`HttpClient`] implementation can consume it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a POST request to the given URL with no headers and no body.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self {
            method: http::Method::POST,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a header, replacing any previous values for the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns the body as a UTF-8 string, if present and valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|b| std::str::from_utf8(b).ok())
    }
}

/// An HTTP response received from the endpoint.
///
/// Only the status is of interest to callers; the body is kept for
/// diagnostics.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for making HTTP requests.
///
/// Abstracts the HTTP library so senders can be tested with mock clients.
///
/// # Example
///
/// ```ignore
/// use webhook_builder::webhook::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct Accepting;
///
/// impl HttpClient for Accepting {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(http::StatusCode::NO_CONTENT, Vec::new()))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
