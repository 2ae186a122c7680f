use std::collections::HashSet;

use searchwatch_common::signal::*;

use super::spec::{AlarmSpec, Comparison, MissingDataPolicy, Statistic};
use crate::error::ProvisionError;
use crate::snapshot::{CapacityTable, ClusterSnapshot};

/// Alarm when free space per node drops to a quarter of its capacity.
const FREE_STORAGE_FRACTION: f64 = 0.25;
/// FreeStorageSpace is reported in megabytes.
const MB_PER_GB: f64 = 1000.0;

pub fn storage_threshold_mb(storage_gb: u32) -> f64 {
    storage_gb as f64 * FREE_STORAGE_FRACTION * MB_PER_GB
}

/// Derive the full alarm set for one domain. Pure: nothing is registered here,
/// so a failure leaves no partial alarm set behind.
pub fn build_catalog(
    snapshot: &ClusterSnapshot,
    capacity: &CapacityTable,
    notification_targets: &[String],
) -> Result<Vec<AlarmSpec>, ProvisionError> {
    use Comparison::*;
    use Statistic::*;

    let storage_mb = storage_threshold_mb(snapshot.storage_gb(capacity)?);
    let node_count = snapshot.node_count() as f64;

    let mut specs = vec![
        AlarmSpec::new(CLUSTER_STATUS_RED, 1.0, GreaterOrEqual, 1, 1, Maximum),
        AlarmSpec::new(CLUSTER_STATUS_YELLOW, 1.0, GreaterOrEqual, 1, 1, Maximum),
        AlarmSpec::new(FREE_STORAGE_SPACE, storage_mb, LessOrEqual, 1, 1, Minimum),
        AlarmSpec::new(CLUSTER_INDEX_WRITES_BLOCKED, 1.0, GreaterOrEqual, 5, 1, Maximum),
        // A domain that stops reporting its node count is itself failing.
        AlarmSpec::new(NODES, node_count, LessThan, 1440, 1, Minimum)
            .with_missing_data(MissingDataPolicy::Breaching),
        AlarmSpec::new(AUTOMATED_SNAPSHOT_FAILURE, 1.0, GreaterOrEqual, 1, 1, Maximum),
        AlarmSpec::new(CPU_UTILIZATION, 80.0, GreaterOrEqual, 15, 3, Average),
        AlarmSpec::new(JVM_MEMORY_PRESSURE, 80.0, GreaterOrEqual, 5, 3, Maximum),
    ];

    if snapshot.coordinator_enabled() {
        specs.push(AlarmSpec::new(MASTER_CPU_UTILIZATION, 50.0, GreaterOrEqual, 15, 3, Average));
        specs.push(AlarmSpec::new(MASTER_JVM_MEMORY_PRESSURE, 80.0, GreaterOrEqual, 15, 1, Maximum));
    }

    if snapshot.encryption_at_rest {
        specs.push(AlarmSpec::new(KMS_KEY_ERROR, 1.0, GreaterOrEqual, 1, 1, Maximum));
        specs.push(AlarmSpec::new(KMS_KEY_INACCESSIBLE, 1.0, GreaterOrEqual, 1, 1, Maximum));
    }

    for spec in &mut specs {
        spec.notification_targets = notification_targets.to_vec();
    }

    let mut seen = HashSet::new();
    if let Some(dup) = specs.iter().find(|s| !seen.insert(s.signal_name.as_str())) {
        return Err(ProvisionError::Config(format!(
            "duplicate alarm for signal {}",
            dup.signal_name
        )));
    }

    Ok(specs)
}
