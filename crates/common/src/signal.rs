/// Namespace the search service publishes its domain metrics under.
pub const NAMESPACE: &str = "AWS/ES";

pub const CLUSTER_STATUS_RED: &str = "ClusterStatus.red";
pub const CLUSTER_STATUS_YELLOW: &str = "ClusterStatus.yellow";
pub const FREE_STORAGE_SPACE: &str = "FreeStorageSpace";
pub const CLUSTER_INDEX_WRITES_BLOCKED: &str = "ClusterIndexWritesBlocked";
pub const NODES: &str = "Nodes";
pub const AUTOMATED_SNAPSHOT_FAILURE: &str = "AutomatedSnapshotFailure";
pub const CPU_UTILIZATION: &str = "CPUUtilization";
pub const JVM_MEMORY_PRESSURE: &str = "JVMMemoryPressure";
pub const MASTER_CPU_UTILIZATION: &str = "MasterCPUUtilization";
pub const MASTER_JVM_MEMORY_PRESSURE: &str = "MasterJVMMemoryPressure";
pub const KMS_KEY_ERROR: &str = "KMSKeyError";
pub const KMS_KEY_INACCESSIBLE: &str = "KMSKeyInaccessible";

/// Message attribute set on everything the relay publishes. Deliveries that
/// carry it are the relay's own output and must not be handled again.
pub const RELAY_MARKER_ATTRIBUTE: &str = "SEARCHWATCH_RELAY_OUTPUT";

pub fn alarm_name(domain_name: &str, signal_name: &str) -> String {
    format!("{domain_name}-{signal_name}Alarm")
}
