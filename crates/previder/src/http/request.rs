//! HTTP request builder

use super::Response;
use crate::{
    error::{Error, Result},
    observability::{RequestMetadata, RequestTimer, ResponseMetadata},
    types::PageRequest,
};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::time::Duration;
use url::Url;

/// Builder for a single HTTP request.
///
/// Requests are sent exactly once; retry policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Duration,
    pub(crate) http_client: Option<reqwest::Client>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: Duration::from_secs(60),
            http_client: None,
        }
    }

    /// Set the HTTP client to use
    pub(crate) fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Add every header of `headers`, replacing existing values.
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        for (key, value) in headers {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Try to set a header, returning an error if the name or value is invalid.
    ///
    /// # Errors
    /// Returns an error if the header name or value contains invalid characters.
    pub fn try_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value = value_str
            .parse::<HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Attach paging parameters to the query string.
    pub fn page(mut self, page: &PageRequest) -> Self {
        page.append_to(&mut self.url);
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the request and read the full response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] when no response arrived in time and
    /// [`Error::Connection`] for any other failure to complete the exchange.
    pub async fn send(self) -> Result<Response> {
        let client = self
            .http_client
            .ok_or_else(|| Error::HttpClient("No HTTP client configured".to_string()))?;

        let mut metadata = RequestMetadata::new(self.method.as_str(), self.url.path());
        if let Some(body) = &self.body {
            metadata = metadata.with_body_size(body.len());
        }
        metadata.log_request();
        let timer = RequestTimer::start();

        let mut req = client
            .request(self.method, self.url)
            .timeout(self.timeout)
            .headers(self.headers);
        if let Some(body) = self.body {
            req = req.body(body);
        }

        let timeout = self.timeout;
        let resp = req.send().await.map_err(|e| {
            metadata.log_transport_error(&e.to_string());
            transport_error(e, timeout)
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| transport_error(e, timeout))?
            .to_vec();

        let elapsed = timer.elapsed();
        let response_metadata =
            ResponseMetadata::new(status.as_u16(), elapsed).with_body_size(body.len());
        if status.is_success() {
            response_metadata.log_success(&metadata);
        } else {
            response_metadata.log_error(&metadata, status.canonical_reason().unwrap_or("error"));
        }

        Ok(Response::new(status, headers, body, elapsed))
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn header_map(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the request body.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Get the timeout.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }
}

fn transport_error(error: reqwest::Error, timeout: Duration) -> Error {
    if error.is_timeout() {
        Error::Timeout(timeout)
    } else {
        Error::Connection(error.to_string())
    }
}
