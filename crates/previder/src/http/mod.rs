//! HTTP transport layer
//!
//! This module provides the request/response plumbing behind [`Client`](crate::Client):
//! header and query construction, a single send per call, and status-aware
//! decoding of response bodies.

pub use previder_provider::{PreviderHttpProvider, PreviderHttpProviderBuilder};
pub use provider::HttpProvider;
pub use request::RequestBuilder;
pub use response::Response;

mod previder_provider;
pub mod provider;
mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
