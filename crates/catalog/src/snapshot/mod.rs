mod capacity;
mod cluster;
mod describe;

pub use capacity::{CapacityError, CapacityTable};
pub use cluster::{ClusterSnapshot, NetworkPlacement, StorageLayout, Subnet};
pub use describe::{load_sdk_config, DomainDescriber, LookupError, OpenSearchDescriber};
