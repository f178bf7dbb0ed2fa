//! Virtual network types

use serde::{Deserialize, Serialize};

use super::Task;

/// A virtual network as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetwork {
    /// Network id
    pub id: String,
    /// Network name
    pub name: String,
    /// Group id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Group name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Network type, e.g. `VLAN`
    #[serde(rename = "type")]
    pub network_type: String,
    /// Whether the network is managed by the provider
    #[serde(default)]
    pub managed: bool,
    /// Lifecycle state, e.g. `NEW` or `READY`
    #[serde(default)]
    pub state: String,
}

/// Body for creating or updating a virtual network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualNetworkUpdate {
    /// Network name
    pub name: String,
    /// Network type
    #[serde(rename = "type")]
    pub network_type: String,
    /// Group id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl VirtualNetworkUpdate {
    /// Create an update body without a group.
    pub fn new(name: impl Into<String>, network_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            network_type: network_type.into(),
            group: None,
        }
    }
}

/// Task returned by mutating virtual network calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetworkTask {
    /// The task itself
    #[serde(flatten)]
    pub task: Task,
    /// Id of the network being changed
    #[serde(default)]
    pub virtual_network: Option<String>,
    /// Name of the network being changed
    #[serde(default)]
    pub virtual_network_name: Option<String>,
}
