use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use searchwatch_common::DomainArn;

use super::channel::{AlarmBackend, BackendError};
use crate::alarm::AlarmSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredAlarm {
    pub alarm_name: String,
    pub domain_name: String,
    pub account: String,
    pub spec: AlarmSpec,
}

/// Alarm store keyed by alarm name, used for dry runs and tests.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    alarms: Arc<DashMap<String, RegisteredAlarm>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, alarm_name: &str) -> Option<RegisteredAlarm> {
        self.alarms.get(alarm_name).map(|a| a.clone())
    }

    pub fn list(&self) -> Vec<RegisteredAlarm> {
        let mut all: Vec<_> = self.alarms.iter().map(|a| a.value().clone()).collect();
        all.sort_by(|a, b| a.alarm_name.cmp(&b.alarm_name));
        all
    }

    pub fn count(&self) -> usize {
        self.alarms.len()
    }

    /// Total `put_alarm` calls, including updates in place.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AlarmBackend for InMemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn put_alarm(&self, domain: &DomainArn, spec: &AlarmSpec) -> Result<(), BackendError> {
        let alarm_name = spec.alarm_name(domain.domain_name());
        self.alarms.insert(
            alarm_name.clone(),
            RegisteredAlarm {
                alarm_name,
                domain_name: domain.domain_name().to_string(),
                account: domain.account().to_string(),
                spec: spec.clone(),
            },
        );
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
