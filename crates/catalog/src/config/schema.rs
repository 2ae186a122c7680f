use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProvisionConfig {
    pub domain_arn: String,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub notification_targets: Vec<String>,
    #[serde(default)]
    pub capacity_file: Option<String>,
    #[serde(default)]
    pub relay: RelayOptions,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RelayOptions {
    #[serde(default)]
    pub enabled: bool,
    /// Topic that receives the relay's diagnostic report. May be one of the
    /// notification targets; the relay ignores its own republished output.
    #[serde(default)]
    pub output_topic_arn: Option<String>,
}

impl ProvisionConfig {
    pub fn profile_name(&self) -> &str {
        self.profile.as_deref().unwrap_or("default")
    }
}
