//! # Previder
//!
//! Rust client for the Previder portal REST API supporting:
//! - Typed JSON requests over HTTPS with token authentication
//! - Optional sub-customer (tenant) scoping
//! - Paginated listings with a two-step page/content decode
//! - Long-running operations exposed as pollable tasks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use previder::{Client, VirtualNetworkUpdate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-access-token")?;
//!
//!     let task = client
//!         .virtual_networks()
//!         .create(&VirtualNetworkUpdate::new("backend", "VLAN"))
//!         .await?;
//!
//!     let finished = client
//!         .tasks()
//!         .wait_for(&task.task.id, Duration::from_secs(300))
//!         .await?;
//!
//!     println!("network ready: {:?}", finished.completed_at());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, ConnectionPoolConfig};
pub use error::{Error, Result};
pub use resources::{Customers, Tasks, VirtualNetworks, VirtualServers, WaitOptions};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;
pub use tokio_util::sync::CancellationToken;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use previder::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        CancellationToken, Client, ClientConfig, Error, Result,
        resources::WaitOptions,
        types::{Page, PageRequest, Reference, Task, TaskState},
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://portal.previder.com/api/";

/// Path segment every normalized base URL ends with
pub const API_BASE_PATH: &str = "api/";

/// Name used to prefix API error messages
pub const PROVIDER_NAME: &str = "Previder API";

/// Content type sent and accepted on every request
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Header carrying the access token
pub const AUTH_HEADER: &str = "x-auth-token";

/// Header carrying the sub-customer id
pub const CUSTOMER_HEADER: &str = "x-customerid";

/// Exact length of a sub-customer id; anything else is never sent
pub const CUSTOMER_ID_LEN: usize = 24;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_BASE_URL, "https://portal.previder.com/api/");
        assert!(DEFAULT_BASE_URL.ends_with(API_BASE_PATH));
        assert_eq!(JSON_CONTENT_TYPE, "application/json; charset=utf-8");
    }
}
