use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_opensearch::error::DisplayErrorContext;
use aws_sdk_opensearch::types::DomainStatus;

use super::cluster::{ClusterSnapshot, NetworkPlacement, StorageLayout, Subnet};

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("domain '{0}' does not exist")]
    NotFound(String),
    #[error("management API: {0}")]
    Api(String),
    #[error("domain description is missing {0}")]
    Incomplete(&'static str),
}

#[async_trait::async_trait]
pub trait DomainDescriber: Send + Sync {
    async fn describe(&self, domain_name: &str) -> Result<ClusterSnapshot, LookupError>;
}

/// Shared SDK configuration for the named credentials profile, pinned to the
/// domain's region.
pub async fn load_sdk_config(profile: Option<&str>, region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .profile_name(profile.unwrap_or("default"))
        .region(Region::new(region.to_string()))
        .load()
        .await
}

pub struct OpenSearchDescriber {
    client: aws_sdk_opensearch::Client,
}

impl OpenSearchDescriber {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_opensearch::Client::new(config),
        }
    }
}

#[async_trait::async_trait]
impl DomainDescriber for OpenSearchDescriber {
    async fn describe(&self, domain_name: &str) -> Result<ClusterSnapshot, LookupError> {
        let output = self
            .client
            .describe_domain()
            .domain_name(domain_name)
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception());
                if not_found {
                    LookupError::NotFound(domain_name.to_string())
                } else {
                    LookupError::Api(DisplayErrorContext(&e).to_string())
                }
            })?;

        let status = output
            .domain_status()
            .ok_or_else(|| LookupError::NotFound(domain_name.to_string()))?;

        let snapshot = snapshot_from_status(domain_name, status)?;
        tracing::debug!(domain = domain_name, ?snapshot, "described domain");
        Ok(snapshot)
    }
}

fn snapshot_from_status(domain_name: &str, status: &DomainStatus) -> Result<ClusterSnapshot, LookupError> {
    let cluster = status
        .cluster_config()
        .ok_or(LookupError::Incomplete("cluster configuration"))?;

    let ebs = status
        .ebs_options()
        .ok_or(LookupError::Incomplete("attached volume options"))?;
    let ebs_enabled = ebs
        .ebs_enabled()
        .ok_or(LookupError::Incomplete("attached volume flag"))?;

    let storage = if ebs_enabled {
        match ebs.volume_size() {
            Some(size) if size > 0 => StorageLayout::Attached {
                volume_gb: size as u32,
            },
            _ => return Err(LookupError::Incomplete("attached volume size")),
        }
    } else {
        StorageLayout::InstanceStore {
            instance_type: cluster
                .instance_type()
                .map(|t| t.as_str().to_string())
                .ok_or(LookupError::Incomplete("instance type"))?,
        }
    };

    let data_node_count = count(cluster.instance_count(), "instance count")?;

    let coordinator_count = if cluster.dedicated_master_enabled().unwrap_or(false) {
        Some(count(cluster.dedicated_master_count(), "dedicated master count")?)
    } else {
        None
    };

    let encryption_at_rest = status
        .encryption_at_rest_options()
        .and_then(|o| o.enabled())
        .ok_or(LookupError::Incomplete("encryption at rest flag"))?;

    let (endpoint, placement) = match status.vpc_options() {
        Some(vpc) => {
            let endpoint = status
                .endpoints()
                .and_then(|e| e.get("vpc"))
                .cloned()
                .ok_or(LookupError::Incomplete("VPC endpoint"))?;
            let subnets = vpc
                .subnet_ids()
                .iter()
                .zip(vpc.availability_zones().iter())
                .map(|(id, az)| Subnet {
                    id: id.clone(),
                    availability_zone: az.clone(),
                })
                .collect();
            let placement = NetworkPlacement::Private {
                vpc_id: vpc
                    .vpc_id()
                    .ok_or(LookupError::Incomplete("VPC id"))?
                    .to_string(),
                subnets,
                security_group_id: vpc
                    .security_group_ids()
                    .first()
                    .cloned()
                    .ok_or(LookupError::Incomplete("security group"))?,
            };
            (endpoint, placement)
        }
        None => (
            status
                .endpoint()
                .ok_or(LookupError::Incomplete("endpoint"))?
                .to_string(),
            NetworkPlacement::Public,
        ),
    };

    Ok(ClusterSnapshot {
        domain_name: domain_name.to_string(),
        endpoint,
        storage,
        data_node_count,
        coordinator_count,
        encryption_at_rest,
        placement,
    })
}

/// A node count the service did not report, or reported as zero, cannot
/// produce a usable threshold.
fn count(value: Option<i32>, field: &'static str) -> Result<u32, LookupError> {
    match value {
        Some(n) if n > 0 => Ok(n as u32),
        _ => Err(LookupError::Incomplete(field)),
    }
}
