//! Virtual server (virtual machine) types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Task;

/// Power actions accepted by the control endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VmAction {
    /// Power on
    PowerOn,
    /// Hard power off
    PowerOff,
    /// Guest shutdown
    Shutdown,
    /// Guest reboot
    Reboot,
    /// Suspend
    Suspend,
    /// Hard reset
    Reset,
}

impl VmAction {
    /// Path segment used by the control endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            VmAction::PowerOn => "POWERON",
            VmAction::PowerOff => "POWEROFF",
            VmAction::Shutdown => "SHUTDOWN",
            VmAction::Reboot => "REBOOT",
            VmAction::Suspend => "SUSPEND",
            VmAction::Reset => "RESET",
        }
    }
}

impl fmt::Display for VmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a virtual machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VmState {
    /// Just created
    New,
    /// Being deployed
    Deploying,
    /// Powered off
    PoweredOff,
    /// Powered on
    PoweredOn,
    /// Any state this client does not know about
    #[serde(other)]
    Unknown,
}

/// A virtual machine as listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
    /// Machine id
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Machine name
    pub name: String,
    /// Group id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Compute cluster the machine runs on
    #[serde(default)]
    pub compute_cluster: String,
    /// Number of virtual CPU cores
    #[serde(default)]
    pub cpu_cores: u32,
    /// Memory in MB
    #[serde(default)]
    pub memory: u64,
    /// Template the machine was deployed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Guest OS identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<String>,
    /// Lifecycle state
    #[serde(default = "unknown_state")]
    pub state: VmState,
    /// Sum of all disk sizes in MB
    #[serde(default)]
    pub total_disk_size: u64,
    /// Whether snapshots exist
    #[serde(default)]
    pub has_snapshots: bool,
    /// Whether the machine is managed by the provider
    #[serde(default)]
    pub managed: bool,
}

fn unknown_state() -> VmState {
    VmState::Unknown
}

/// A virtual disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    /// Disk id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Size in MB
    pub size: u64,
    /// Disk label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A network interface of a virtual machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    /// Interface id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Virtual network id
    pub network: String,
    /// Whether the interface is connected
    #[serde(default)]
    pub connected: bool,
    /// MAC address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Addresses reported by the guest
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discovered_addresses: Vec<String>,
    /// Addresses assigned by the platform
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_addresses: Vec<String>,
    /// Whether this is the primary interface
    #[serde(default)]
    pub primary: bool,
}

/// A virtual machine with disks, interfaces and audit data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineExt {
    /// Base machine fields
    #[serde(flatten)]
    pub machine: VirtualMachine,
    /// Guest hostname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Disks
    #[serde(default)]
    pub disks: Vec<Disk>,
    /// Network interfaces
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
    /// Whether deletion is blocked
    #[serde(default)]
    pub termination_protection_enabled: bool,
    /// Size flavor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    /// Username created during provisioning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_username: Option<String>,
    /// Creation time in epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// Body for deploying a new virtual machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineCreate {
    /// Machine layout
    #[serde(flatten)]
    pub machine: VirtualMachineExt,
    /// Machine to clone from instead of a template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_virtual_machine: Option<String>,
    /// Cloud-init user data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// Disk provisioning type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_type: Option<String>,
    /// Power on once deployed
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub power_on_after_clone: bool,
}

/// Body for updating a virtual machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineUpdate {
    /// Base machine fields
    #[serde(flatten)]
    pub machine: VirtualMachine,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Disks; omit one to keep it unchanged
    #[serde(default)]
    pub disks: Vec<Disk>,
    /// Network interfaces
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
    /// Whether deletion is blocked
    #[serde(default)]
    pub termination_protection_enabled: bool,
}

/// Task returned by mutating virtual machine calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineTask {
    /// The task itself
    #[serde(flatten)]
    pub task: Task,
    /// Id of the machine being changed
    #[serde(default)]
    pub virtual_machine: Option<String>,
    /// Name of the machine being changed
    #[serde(default)]
    pub virtual_machine_name: Option<String>,
}

/// A deployable template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualMachineTemplate {
    /// Template name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Template version
    #[serde(default)]
    pub version: u32,
    /// Category, e.g. `Linux`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A compute cluster machines can be placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeCluster {
    /// Cluster name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
}

/// Result of opening a web console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenConsoleResult {
    /// URL of the console session
    #[serde(default)]
    pub console_url: String,
}
