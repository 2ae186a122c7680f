use serde::Serialize;

use super::capacity::CapacityTable;
use crate::error::ProvisionError;

/// Facts about a domain captured once at provisioning time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSnapshot {
    pub domain_name: String,
    pub endpoint: String,
    pub storage: StorageLayout,
    pub data_node_count: u32,
    /// `Some(count)` when dedicated coordinator (master) nodes are enabled.
    pub coordinator_count: Option<u32>,
    pub encryption_at_rest: bool,
    pub placement: NetworkPlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageLayout {
    Attached { volume_gb: u32 },
    InstanceStore { instance_type: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NetworkPlacement {
    Public,
    Private {
        vpc_id: String,
        subnets: Vec<Subnet>,
        security_group_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subnet {
    pub id: String,
    pub availability_zone: String,
}

impl ClusterSnapshot {
    /// Storage per data node in GB.
    pub fn storage_gb(&self, capacity: &CapacityTable) -> Result<u32, ProvisionError> {
        match &self.storage {
            StorageLayout::Attached { volume_gb } => Ok(*volume_gb),
            StorageLayout::InstanceStore { instance_type } => capacity
                .lookup(instance_type)
                .ok_or_else(|| ProvisionError::UnknownInstanceType(instance_type.clone())),
        }
    }

    pub fn node_count(&self) -> u32 {
        self.data_node_count + self.coordinator_count.unwrap_or(0)
    }

    pub fn coordinator_enabled(&self) -> bool {
        self.coordinator_count.is_some()
    }
}
