//! Virtual server endpoints

use super::{IAAS_BASE_PATH, Resource, fetch_page, require};
use crate::{
    client::Client,
    error::Result,
    types::{
        ComputeCluster, OpenConsoleResult, Page, PageRequest, VirtualMachine,
        VirtualMachineCreate, VirtualMachineExt, VirtualMachineTask, VirtualMachineTemplate,
        VirtualMachineUpdate, VmAction,
    },
};

/// Virtual servers API resource.
///
/// # Example
///
/// ```rust,no_run
/// # use previder::{Client, VmAction};
/// # use std::time::Duration;
/// # async fn example(client: Client) -> previder::Result<()> {
/// let task = client
///     .virtual_servers()
///     .control("65f1c0de2a4b7e0012345678", VmAction::Reboot)
///     .await?;
/// client.tasks().wait_for_task(&task.task, Duration::from_secs(120)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct VirtualServers {
    client: Client,
}

impl VirtualServers {
    /// Create a new VirtualServers resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn path(id: &str) -> String {
        format!("{IAAS_BASE_PATH}virtualmachine/{id}")
    }

    /// Fetch one page of virtual machines.
    pub async fn page(&self, request: &PageRequest) -> Result<(Page, Vec<VirtualMachine>)> {
        fetch_page(&self.client, &format!("{IAAS_BASE_PATH}virtualmachine"), request).await
    }

    /// Fetch a virtual machine with its disks and interfaces.
    pub async fn get(&self, id: &str) -> Result<VirtualMachineExt> {
        let path = Self::path(id);
        require(self.client.get(&path, None).await?, &path)
    }

    /// Deploy a new virtual machine.
    pub async fn create(&self, machine: &VirtualMachineCreate) -> Result<VirtualMachineTask> {
        let path = format!("{IAAS_BASE_PATH}virtualmachine");
        require(self.client.post(&path, machine).await?, &path)
    }

    /// Change the layout of a virtual machine.
    pub async fn update(
        &self,
        id: &str,
        machine: &VirtualMachineUpdate,
    ) -> Result<VirtualMachineTask> {
        let path = Self::path(id);
        require(self.client.put(&path, machine).await?, &path)
    }

    /// Delete a virtual machine.
    pub async fn delete(&self, id: &str) -> Result<VirtualMachineTask> {
        let path = Self::path(id);
        require(self.client.delete(&path).await?, &path)
    }

    /// Run a power action.
    pub async fn control(&self, id: &str, action: VmAction) -> Result<VirtualMachineTask> {
        let path = format!("{}/action/{action}", Self::path(id));
        require(self.client.post_empty(&path).await?, &path)
    }

    /// Open a web console session.
    pub async fn open_console(&self, id: &str) -> Result<OpenConsoleResult> {
        let path = format!("{}/console", Self::path(id));
        require(self.client.post_empty(&path).await?, &path)
    }

    /// List the compute clusters machines can be placed on.
    pub async fn compute_clusters(&self) -> Result<Vec<ComputeCluster>> {
        let path = format!("{IAAS_BASE_PATH}computecluster");
        Ok(self.client.get(&path, None).await?.unwrap_or_default())
    }

    /// List deployable templates.
    pub async fn templates(&self) -> Result<Vec<VirtualMachineTemplate>> {
        let path = format!("{IAAS_BASE_PATH}template");
        Ok(self.client.get(&path, None).await?.unwrap_or_default())
    }
}

impl Resource for VirtualServers {
    fn client(&self) -> &Client {
        &self.client
    }
}
