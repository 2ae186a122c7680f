use std::collections::HashMap;

use searchwatch_catalog::alarm::storage_threshold_mb;
use searchwatch_catalog::backend::{AlarmBackend, BackendError, InMemoryBackend};
use searchwatch_catalog::config::{ProvisionConfig, RelayOptions};
use searchwatch_catalog::snapshot::{
    CapacityTable, ClusterSnapshot, DomainDescriber, LookupError, NetworkPlacement, StorageLayout,
};
use searchwatch_catalog::{plan, provision, ProvisionError};
use searchwatch_common::{signal, DomainArn};

const ARN: &str = "arn:aws:es:us-east-1:123456789012:domain/search";
const OPS: &str = "arn:aws:sns:us-east-1:123456789012:ops";

struct FakeDescriber {
    domains: HashMap<String, ClusterSnapshot>,
}

impl FakeDescriber {
    fn with(snapshot: ClusterSnapshot) -> Self {
        let mut domains = HashMap::new();
        domains.insert(snapshot.domain_name.clone(), snapshot);
        Self { domains }
    }
}

#[async_trait::async_trait]
impl DomainDescriber for FakeDescriber {
    async fn describe(&self, domain_name: &str) -> Result<ClusterSnapshot, LookupError> {
        self.domains
            .get(domain_name)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(domain_name.to_string()))
    }
}

struct RejectingBackend;

#[async_trait::async_trait]
impl AlarmBackend for RejectingBackend {
    fn name(&self) -> &str {
        "rejecting"
    }

    async fn put_alarm(&self, _domain: &DomainArn, _spec: &searchwatch_catalog::alarm::AlarmSpec) -> Result<(), BackendError> {
        Err(BackendError("throttled".into()))
    }
}

fn instance_store_snapshot(instance_type: &str) -> ClusterSnapshot {
    ClusterSnapshot {
        domain_name: "search".into(),
        endpoint: "search-abc.us-east-1.es.amazonaws.com".into(),
        storage: StorageLayout::InstanceStore {
            instance_type: instance_type.into(),
        },
        data_node_count: 3,
        coordinator_count: None,
        encryption_at_rest: true,
        placement: NetworkPlacement::Public,
    }
}

fn config() -> ProvisionConfig {
    ProvisionConfig {
        domain_arn: ARN.into(),
        profile: None,
        notification_targets: vec![OPS.into()],
        capacity_file: None,
        relay: RelayOptions::default(),
    }
}

#[tokio::test]
async fn instance_store_encrypted_cluster_end_to_end() {
    let describer = FakeDescriber::with(instance_store_snapshot("m3.large.elasticsearch"));
    let backend = InMemoryBackend::new();
    let capacity = CapacityTable::builtin().unwrap();

    let report = provision(&config(), &capacity, &describer, &backend).await.unwrap();

    assert_eq!(report.alarms.len(), 10);
    assert_eq!(backend.count(), 10);

    let storage = backend.get("search-FreeStorageSpaceAlarm").unwrap();
    assert_eq!(storage.spec.threshold, 8000.0);
    assert_eq!(storage.spec.notification_targets, vec![OPS.to_string()]);

    assert!(backend.get("search-KMSKeyErrorAlarm").is_some());
    assert!(backend.get("search-KMSKeyInaccessibleAlarm").is_some());
    assert!(backend.get("search-MasterCPUUtilizationAlarm").is_none());

    let nodes = backend.get("search-NodesAlarm").unwrap();
    assert_eq!(nodes.spec.threshold, 3.0);
    assert_eq!(nodes.account, "123456789012");
}

#[tokio::test]
async fn rerun_updates_without_duplicates() {
    let describer = FakeDescriber::with(instance_store_snapshot("m3.large.search"));
    let backend = InMemoryBackend::new();
    let capacity = CapacityTable::builtin().unwrap();

    provision(&config(), &capacity, &describer, &backend).await.unwrap();
    provision(&config(), &capacity, &describer, &backend).await.unwrap();

    assert_eq!(backend.count(), 10);
    assert_eq!(backend.writes(), 20);
}

#[tokio::test]
async fn attached_volume_threshold_ignores_instance_type() {
    let mut snapshot = instance_store_snapshot("not-in-any-table.search");
    snapshot.storage = StorageLayout::Attached { volume_gb: 512 };
    let describer = FakeDescriber::with(snapshot);

    let report = plan(&config(), &CapacityTable::default(), &describer).await.unwrap();
    let storage = report
        .alarms
        .iter()
        .find(|a| a.signal_name == signal::FREE_STORAGE_SPACE)
        .unwrap();
    assert_eq!(storage.threshold, storage_threshold_mb(512));
    assert_eq!(storage.threshold, 128_000.0);
}

#[tokio::test]
async fn malformed_identifier_fails_before_lookup() {
    let describer = FakeDescriber::with(instance_store_snapshot("m3.large.search"));
    let backend = InMemoryBackend::new();
    let mut cfg = config();
    cfg.domain_arn = "arn:aws:es:us-east-1:search".into();

    let err = provision(&cfg, &CapacityTable::builtin().unwrap(), &describer, &backend)
        .await
        .unwrap_err();

    assert!(matches!(err, ProvisionError::MalformedIdentifier(_)));
    assert_eq!(backend.writes(), 0);
}

#[tokio::test]
async fn missing_domain_is_lookup_error_and_writes_nothing() {
    let describer = FakeDescriber {
        domains: HashMap::new(),
    };
    let backend = InMemoryBackend::new();

    let err = provision(&config(), &CapacityTable::builtin().unwrap(), &describer, &backend)
        .await
        .unwrap_err();

    assert!(matches!(err, ProvisionError::ClusterLookup { ref domain, .. } if domain == "search"));
    assert_eq!(backend.writes(), 0);
}

#[tokio::test]
async fn unknown_instance_type_writes_nothing() {
    let describer = FakeDescriber::with(instance_store_snapshot("r7g.large.search"));
    let backend = InMemoryBackend::new();

    let err = provision(&config(), &CapacityTable::builtin().unwrap(), &describer, &backend)
        .await
        .unwrap_err();

    assert!(matches!(err, ProvisionError::UnknownInstanceType(ref t) if t == "r7g.large.search"));
    assert_eq!(backend.writes(), 0);
}

#[tokio::test]
async fn registration_failure_names_the_alarm() {
    let describer = FakeDescriber::with(instance_store_snapshot("m3.large.search"));

    let err = provision(&config(), &CapacityTable::builtin().unwrap(), &describer, &RejectingBackend)
        .await
        .unwrap_err();

    match err {
        ProvisionError::Registration { alarm, source } => {
            assert_eq!(alarm, "search-ClusterStatus.redAlarm");
            assert!(source.to_string().contains("throttled"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn enabled_relay_is_planned_with_first_target() {
    let describer = FakeDescriber::with(instance_store_snapshot("m3.large.search"));
    let mut cfg = config();
    cfg.notification_targets.push("arn:aws:sns:us-east-1:123456789012:pager".into());
    cfg.relay = RelayOptions {
        enabled: true,
        output_topic_arn: Some(OPS.into()),
    };

    let report = plan(&cfg, &CapacityTable::builtin().unwrap(), &describer).await.unwrap();
    let relay = report.relay.unwrap();
    assert_eq!(relay.trigger_topic, OPS);
    assert_eq!(
        relay.environment.get("DOMAIN_ENDPOINT").map(String::as_str),
        Some("search-abc.us-east-1.es.amazonaws.com")
    );
}

#[tokio::test]
async fn enabled_relay_without_targets_is_config_error() {
    let describer = FakeDescriber::with(instance_store_snapshot("m3.large.search"));
    let mut cfg = config();
    cfg.notification_targets.clear();
    cfg.relay.enabled = true;

    let err = plan(&cfg, &CapacityTable::builtin().unwrap(), &describer).await.unwrap_err();
    assert!(matches!(err, ProvisionError::Config(_)));
}
