use searchwatch_common::signal;

const CLUSTER_RED: &[&str] = &[
    "_cluster/health?pretty",
    "_cluster/allocation/explain?format=json",
    "_cat/indices?v&health=red&s=index",
];

const CLUSTER_YELLOW: &[&str] = &[
    "_cluster/health?pretty",
    "_cluster/allocation/explain?format=json",
    "_cat/indices?v&health=yellow&s=index",
];

const STORAGE: &[&str] = &[
    "_cat/allocation?v&s=disk.percent:desc",
    "_cat/indices?v&s=store.size:desc",
];

const WRITES_BLOCKED: &[&str] = &[
    "_cat/allocation?v&s=disk.percent:desc",
    "_nodes/stats/jvm?pretty",
];

const CPU: &[&str] = &["_cat/nodes?v&s=cpu:desc", "_nodes/hot_threads"];

const JVM: &[&str] = &["_nodes/stats/jvm?pretty", "_cat/fielddata?v"];

const MASTER_CPU: &[&str] = &["_cat/master?v", "_cat/pending_tasks?v"];

const MAPPED: &[(&str, &[&str])] = &[
    (signal::CLUSTER_STATUS_RED, CLUSTER_RED),
    (signal::CLUSTER_STATUS_YELLOW, CLUSTER_YELLOW),
    (signal::FREE_STORAGE_SPACE, STORAGE),
    (signal::CLUSTER_INDEX_WRITES_BLOCKED, WRITES_BLOCKED),
    (signal::CPU_UTILIZATION, CPU),
    (signal::JVM_MEMORY_PRESSURE, JVM),
    (signal::MASTER_CPU_UTILIZATION, MASTER_CPU),
];

/// Ordered query paths for `signal_name`, or `None` when the signal has no
/// diagnostics attached.
pub fn queries_for(signal_name: &str) -> Option<&'static [&'static str]> {
    MAPPED
        .iter()
        .find(|(name, _)| *name == signal_name)
        .map(|(_, queries)| *queries)
}

pub fn mapped_signals() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    MAPPED.iter().copied()
}
