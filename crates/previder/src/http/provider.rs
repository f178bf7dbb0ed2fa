//! HTTP provider trait for abstracting the transport
//!
//! [`Client`](crate::Client) talks to the API through an [`HttpProvider`]. The
//! default implementation is [`PreviderHttpProvider`](super::PreviderHttpProvider);
//! tests and embedders can supply their own.

use crate::{
    error::Result,
    http::{Method, Response},
    types::PageRequest,
};
use async_trait::async_trait;
use std::fmt;

/// Provider trait for making HTTP requests.
///
/// Implementations must be safe to share between tasks; the client calls
/// [`request`](HttpProvider::request) concurrently from every clone.
#[async_trait]
pub trait HttpProvider: Send + Sync + fmt::Debug {
    /// Perform one request/response cycle.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - API path relative to the base URL, e.g. `v2/iaas/task/42`
    /// * `page` - Paging parameters, only for paginated listings
    /// * `body` - Optional request body, serialized to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange itself fails. A response with an error
    /// status is returned as `Ok`; classifying it is left to [`Response::decode`].
    async fn request(
        &self,
        method: Method,
        path: &str,
        page: Option<&PageRequest>,
        body: Option<&(dyn erased_serde::Serialize + Send + Sync)>,
    ) -> Result<Response>;

    /// Get the provider name for debugging/logging.
    fn provider_name(&self) -> &'static str;

    /// Get the normalized base URL.
    fn base_url(&self) -> &str;
}

/// Serialize a request body to JSON bytes.
pub(crate) fn serialize_body(
    body: &(dyn erased_serde::Serialize + Send + Sync),
) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(crate::error::Error::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestRequest {
        name: String,
    }

    #[test]
    fn test_serialize_body() {
        let req = TestRequest {
            name: "backend".to_string(),
        };
        let bytes = serialize_body(&req).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["name"], "backend");
    }
}
