use std::time::Duration;

use searchwatch_common::{relay_env, ArnError, DomainArn, LinearRetry};

pub const QUERY_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },
    #[error(transparent)]
    Arn(#[from] ArnError),
}

/// Resolved once at startup and passed to the handler.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Host name of the domain endpoint, without scheme.
    pub endpoint: String,
    pub domain_arn: DomainArn,
    pub output_topic_arn: Option<String>,
    pub query_timeout: Duration,
    pub query_retry: LinearRetry,
    pub publish_retry: LinearRetry,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let endpoint = normalize_endpoint(&required(relay_env::DOMAIN_ENDPOINT)?);
        if endpoint.is_empty() || endpoint.contains('/') {
            return Err(ConfigError::Invalid {
                var: relay_env::DOMAIN_ENDPOINT,
                reason: "expected a bare host name".into(),
            });
        }

        let domain_arn = DomainArn::parse(&required(relay_env::DOMAIN_ARN)?)?;

        let output_topic_arn = lookup(relay_env::OUTPUT_TOPIC_ARN)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            endpoint,
            domain_arn,
            output_topic_arn,
            query_timeout: QUERY_TIMEOUT,
            query_retry: LinearRetry::cluster_queries(),
            publish_retry: LinearRetry::publish(),
        })
    }
}

fn normalize_endpoint(raw: &str) -> String {
    raw.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}
