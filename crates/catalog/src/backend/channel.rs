use searchwatch_common::DomainArn;

use crate::alarm::AlarmSpec;

/// Alerting service that stores alarm definitions. `put_alarm` must be
/// create-or-update keyed by the generated alarm name.
#[async_trait::async_trait]
pub trait AlarmBackend: Send + Sync {
    fn name(&self) -> &str;
    async fn put_alarm(&self, domain: &DomainArn, spec: &AlarmSpec) -> Result<(), BackendError>;
}

#[derive(Debug)]
pub struct BackendError(pub String);

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "alarm backend: {}", self.0)
    }
}

impl std::error::Error for BackendError {}
