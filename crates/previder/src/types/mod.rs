//! Wire types for the Previder API
//!
//! Field names follow the API's camelCase JSON.

mod common;
mod customer;
mod page;
mod task;
mod virtual_network;
mod virtual_server;

pub use common::{ApiInfo, Reference};
pub use customer::{Customer, CustomerCreate, CustomerExt};
pub use page::{Page, PageRequest, PageRequestBuilder, PageRequestBuilderError};
pub use task::{ConfigurationItem, Task, TaskErrorField, TaskState};
pub use virtual_network::{VirtualNetwork, VirtualNetworkTask, VirtualNetworkUpdate};
pub use virtual_server::{
    ComputeCluster, Disk, NetworkInterface, OpenConsoleResult, VirtualMachine,
    VirtualMachineCreate, VirtualMachineExt, VirtualMachineTask, VirtualMachineTemplate,
    VirtualMachineUpdate, VmAction, VmState,
};
