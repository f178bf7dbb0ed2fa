//! Virtual network endpoints

use super::{IAAS_BASE_PATH, Resource, fetch_page, require};
use crate::{
    client::Client,
    error::Result,
    types::{Page, PageRequest, VirtualNetwork, VirtualNetworkTask, VirtualNetworkUpdate},
};

/// Virtual networks API resource.
#[derive(Clone, Debug)]
pub struct VirtualNetworks {
    client: Client,
}

impl VirtualNetworks {
    /// Create a new VirtualNetworks resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn path(id: &str) -> String {
        format!("{IAAS_BASE_PATH}virtualnetwork/{id}")
    }

    /// Fetch one page of virtual networks.
    pub async fn page(&self, request: &PageRequest) -> Result<(Page, Vec<VirtualNetwork>)> {
        fetch_page(&self.client, &format!("{IAAS_BASE_PATH}virtualnetwork"), request).await
    }

    /// Fetch a single virtual network.
    pub async fn get(&self, id: &str) -> Result<VirtualNetwork> {
        let path = Self::path(id);
        require(self.client.get(&path, None).await?, &path)
    }

    /// Create a virtual network.
    pub async fn create(&self, network: &VirtualNetworkUpdate) -> Result<VirtualNetworkTask> {
        let path = format!("{IAAS_BASE_PATH}virtualnetwork");
        require(self.client.post(&path, network).await?, &path)
    }

    /// Rename or regroup a virtual network.
    pub async fn update(&self, id: &str, network: &VirtualNetworkUpdate) -> Result<VirtualNetworkTask> {
        let path = Self::path(id);
        require(self.client.put(&path, network).await?, &path)
    }

    /// Delete a virtual network.
    pub async fn delete(&self, id: &str) -> Result<VirtualNetworkTask> {
        let path = Self::path(id);
        require(self.client.delete(&path).await?, &path)
    }
}

impl Resource for VirtualNetworks {
    fn client(&self) -> &Client {
        &self.client
    }
}
