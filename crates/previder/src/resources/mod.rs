//! API resource endpoints
//!
//! Each resource is a thin handle over a [`Client`] clone that knows the
//! paths of one part of the API. Mutating calls return the server-side task
//! that tracks the change; see [`Tasks`] for waiting on it.

pub mod customers;
pub mod tasks;
pub mod virtual_networks;
pub mod virtual_servers;

pub use customers::Customers;
pub use tasks::{Tasks, WaitOptions};
pub use virtual_networks::VirtualNetworks;
pub use virtual_servers::VirtualServers;

use serde::de::DeserializeOwned;

use crate::{
    client::Client,
    error::{Error, Result},
    types::{Page, PageRequest},
};

/// Path prefix of the infrastructure endpoints
pub const IAAS_BASE_PATH: &str = "v2/iaas/";

/// Path prefix of the account endpoints
pub const CORE_BASE_PATH: &str = "v2/core/";

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}

/// Fetch one page of a listing and decode its content.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    client: &Client,
    path: &str,
    request: &PageRequest,
) -> Result<(Page, Vec<T>)> {
    let page: Page = require(client.get(path, Some(request)).await?, path)?;
    let content = page.decode_content()?;
    Ok((page, content))
}

/// Turn an empty success body into a decode error for calls that need a body.
pub(crate) fn require<T>(body: Option<T>, path: &str) -> Result<T> {
    body.ok_or_else(|| Error::missing_body(path))
}
