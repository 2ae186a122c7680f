use searchwatch_common::ArnError;

use crate::backend::BackendError;
use crate::snapshot::{CapacityError, LookupError};

/// Anything that aborts a provisioning run. Every variant is fatal: no
/// alarm is registered once one of these is raised before registration.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error(transparent)]
    MalformedIdentifier(#[from] ArnError),

    #[error("cluster lookup failed for domain '{domain}': {source}")]
    ClusterLookup {
        domain: String,
        #[source]
        source: LookupError,
    },

    #[error("no storage capacity known for instance type '{0}'")]
    UnknownInstanceType(String),

    #[error(transparent)]
    Capacity(#[from] CapacityError),

    #[error("registering alarm '{alarm}' failed: {source}")]
    Registration {
        alarm: String,
        #[source]
        source: BackendError,
    },

    #[error("configuration: {0}")]
    Config(String),
}
