use serde::Serialize;

use searchwatch_common::DomainArn;

use crate::alarm::{build_catalog, AlarmSpec};
use crate::backend::AlarmBackend;
use crate::config::ProvisionConfig;
use crate::error::ProvisionError;
use crate::relay_plan::RelayDeploymentPlan;
use crate::snapshot::{CapacityTable, ClusterSnapshot, DomainDescriber};

#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub domain_arn: DomainArn,
    pub snapshot: ClusterSnapshot,
    pub alarms: Vec<AlarmSpec>,
    pub relay: Option<RelayDeploymentPlan>,
}

/// Resolve everything a provisioning run would register, without
/// registering anything.
pub async fn plan(
    config: &ProvisionConfig,
    capacity: &CapacityTable,
    describer: &dyn DomainDescriber,
) -> Result<ProvisionReport, ProvisionError> {
    let domain_arn = DomainArn::parse(&config.domain_arn)?;
    let domain = domain_arn.domain_name();

    let snapshot = describer
        .describe(domain)
        .await
        .map_err(|source| ProvisionError::ClusterLookup {
            domain: domain.to_string(),
            source,
        })?;

    let alarms = build_catalog(&snapshot, capacity, &config.notification_targets)?;

    let relay = RelayDeploymentPlan::derive(
        &domain_arn,
        &snapshot,
        &config.relay,
        &config.notification_targets,
    );
    if config.relay.enabled && relay.is_none() {
        return Err(ProvisionError::Config(
            "relay is enabled but no notification target can trigger it".into(),
        ));
    }

    tracing::info!(
        domain,
        alarms = alarms.len(),
        coordinators = snapshot.coordinator_enabled(),
        encrypted = snapshot.encryption_at_rest,
        relay = relay.is_some(),
        "catalog resolved"
    );

    Ok(ProvisionReport {
        domain_arn,
        snapshot,
        alarms,
        relay,
    })
}

/// Resolve the catalog, then register every alarm. Stops at the first
/// registration failure; alarms already written stay in place and are
/// updated, not duplicated, by the next run.
pub async fn provision(
    config: &ProvisionConfig,
    capacity: &CapacityTable,
    describer: &dyn DomainDescriber,
    backend: &dyn AlarmBackend,
) -> Result<ProvisionReport, ProvisionError> {
    let report = plan(config, capacity, describer).await?;
    let domain = report.domain_arn.domain_name();

    for spec in &report.alarms {
        let alarm = spec.alarm_name(domain);
        backend
            .put_alarm(&report.domain_arn, spec)
            .await
            .map_err(|source| ProvisionError::Registration {
                alarm: alarm.clone(),
                source,
            })?;
        tracing::debug!(%alarm, backend = backend.name(), "alarm written");
    }

    tracing::info!(domain, alarms = report.alarms.len(), backend = backend.name(), "provisioning complete");
    Ok(report)
}
