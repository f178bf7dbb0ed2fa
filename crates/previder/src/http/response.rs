//! HTTP response handling

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Error, Result};

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>, elapsed: Duration) -> Self {
        Self {
            status,
            headers,
            body,
            elapsed,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Time taken by the request/response cycle.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Check if the status is in `200..300`.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Whether the body holds nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Decode a successful response into `T`.
    ///
    /// An empty body is a success without payload and yields `Ok(None)`; many
    /// mutating endpoints answer that way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] (or [`Error::Decode`] for an unreadable error body)
    /// when the status is outside `200..300`, and [`Error::Decode`] when a
    /// non-empty body does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Option<T>> {
        self.check_status()?;
        if self.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&self.body)
            .map(Some)
            .map_err(|e| Error::Decode {
                message: e.to_string(),
                status: Some(self.status.as_u16()),
            })
    }

    /// Check the status of a response whose body is not needed.
    pub fn check_status(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::from_response(self.status, &self.body))
        }
    }
}
