use std::collections::BTreeMap;

use serde::Serialize;

use searchwatch_common::{relay_env, DomainArn};

use crate::config::RelayOptions;
use crate::snapshot::{ClusterSnapshot, NetworkPlacement, Subnet};

pub const FUNCTION_TIMEOUT_SECS: u64 = 60;
pub const HTTPS_PORT: u16 = 443;

/// Parameters a deployment tool needs to stand up the diagnostic relay next
/// to the alarms. Nothing here is deployed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayDeploymentPlan {
    pub timeout_secs: u64,
    pub environment: BTreeMap<String, String>,
    pub trigger_topic: String,
    pub policies: Vec<PolicyStatement>,
    pub network: Option<VpcAttachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyStatement {
    pub actions: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VpcAttachment {
    pub vpc_id: String,
    pub subnets: Vec<Subnet>,
    pub security_group_id: String,
    pub ingress_port: u16,
}

impl RelayDeploymentPlan {
    /// `None` when the relay is disabled or nothing could trigger it.
    pub fn derive(
        arn: &DomainArn,
        snapshot: &ClusterSnapshot,
        options: &RelayOptions,
        notification_targets: &[String],
    ) -> Option<Self> {
        if !options.enabled {
            return None;
        }
        // One subscription only: every target receives the same alarm, and
        // subscribing to all of them would run the relay once per target.
        let trigger_topic = notification_targets.first()?.clone();

        let mut environment = BTreeMap::new();
        environment.insert(relay_env::DOMAIN_ENDPOINT.to_string(), snapshot.endpoint.clone());
        environment.insert(relay_env::DOMAIN_ARN.to_string(), arn.to_string());

        let mut policies = vec![PolicyStatement {
            actions: vec!["es:ESHttpHead".into(), "es:ESHttpGet".into()],
            resources: vec![arn.paths_resource()],
        }];

        if let Some(topic) = &options.output_topic_arn {
            environment.insert(relay_env::OUTPUT_TOPIC_ARN.to_string(), topic.clone());
            policies.push(PolicyStatement {
                actions: vec!["SNS:Publish".into()],
                resources: vec![topic.clone()],
            });
        }

        let network = match &snapshot.placement {
            NetworkPlacement::Public => None,
            NetworkPlacement::Private {
                vpc_id,
                subnets,
                security_group_id,
            } => Some(VpcAttachment {
                vpc_id: vpc_id.clone(),
                subnets: subnets.clone(),
                security_group_id: security_group_id.clone(),
                ingress_port: HTTPS_PORT,
            }),
        };

        Some(Self {
            timeout_secs: FUNCTION_TIMEOUT_SECS,
            environment,
            trigger_topic,
            policies,
            network,
        })
    }
}
