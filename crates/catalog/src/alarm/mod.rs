mod catalog;
mod spec;

pub use catalog::{build_catalog, storage_threshold_mb};
pub use spec::{AlarmSpec, Comparison, MissingDataPolicy, Statistic};
