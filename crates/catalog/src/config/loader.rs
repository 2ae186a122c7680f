use std::path::Path;

use super::schema::ProvisionConfig;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Validation(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

pub fn load_from_file(path: &Path) -> Result<ProvisionConfig, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

pub fn load_from_str(yaml: &str) -> Result<ProvisionConfig, LoadError> {
    let cfg: ProvisionConfig = serde_yaml::from_str(yaml)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Shape checks only; the domain identifier itself is parsed by the
/// provisioning run so a malformed one surfaces as its own error.
pub fn validate(cfg: &ProvisionConfig) -> Result<(), LoadError> {
    if cfg.domain_arn.trim().is_empty() {
        return Err(LoadError::Validation("domain_arn must not be empty".into()));
    }
    if cfg.notification_targets.iter().any(|t| t.trim().is_empty()) {
        return Err(LoadError::Validation(
            "notification_targets must not contain empty entries".into(),
        ));
    }
    if cfg.relay.enabled && cfg.notification_targets.is_empty() {
        return Err(LoadError::Validation(
            "relay.enabled requires at least one notification target to trigger it".into(),
        ));
    }
    if let Some(topic) = &cfg.relay.output_topic_arn {
        if topic.trim().is_empty() {
            return Err(LoadError::Validation(
                "relay.output_topic_arn must not be empty when set".into(),
            ));
        }
    }
    Ok(())
}
