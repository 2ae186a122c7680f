use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed domain identifier '{input}': {reason}")]
pub struct ArnError {
    pub input: String,
    pub reason: &'static str,
}

/// `arn:<partition>:<service>:<region>:<account>:domain/<name>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainArn {
    partition: String,
    service: String,
    region: String,
    account: String,
    domain_name: String,
}

impl DomainArn {
    pub fn parse(input: &str) -> Result<Self, ArnError> {
        let err = |reason| ArnError {
            input: input.to_string(),
            reason,
        };

        let parts: Vec<&str> = input.trim().split(':').collect();
        if parts.len() != 6 {
            return Err(err("expected 6 colon-separated segments"));
        }
        if parts[0] != "arn" {
            return Err(err("must start with 'arn:'"));
        }
        if parts[1..5].iter().any(|p| p.is_empty()) {
            return Err(err("partition, service, region and account must be set"));
        }

        let resource: Vec<&str> = parts[5].split('/').collect();
        if resource.len() != 2 {
            return Err(err("resource must be 'domain/<name>'"));
        }
        if resource[0] != "domain" || resource[1].is_empty() {
            return Err(err("resource must be 'domain/<name>'"));
        }

        Ok(Self {
            partition: parts[1].to_string(),
            service: parts[2].to_string(),
            region: parts[3].to_string(),
            account: parts[4].to_string(),
            domain_name: resource[1].to_string(),
        })
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    /// Signing service name, `es` for both OpenSearch and legacy Elasticsearch domains.
    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Resource pattern covering every HTTP path on the domain.
    pub fn paths_resource(&self) -> String {
        format!("{self}/*")
    }
}

impl fmt::Display for DomainArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:domain/{}",
            self.partition, self.service, self.region, self.account, self.domain_name
        )
    }
}

impl FromStr for DomainArn {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DomainArn {
    type Error = ArnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DomainArn> for String {
    fn from(arn: DomainArn) -> Self {
        arn.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:es:us-east-1:123456789012:domain/logs-prod";

    #[test]
    fn parses_components() {
        let arn = DomainArn::parse(ARN).unwrap();
        assert_eq!(arn.partition(), "aws");
        assert_eq!(arn.service(), "es");
        assert_eq!(arn.region(), "us-east-1");
        assert_eq!(arn.account(), "123456789012");
        assert_eq!(arn.domain_name(), "logs-prod");
        assert_eq!(arn.to_string(), ARN);
    }

    #[test]
    fn paths_resource_appends_wildcard() {
        let arn: DomainArn = ARN.parse().unwrap();
        assert_eq!(arn.paths_resource(), format!("{ARN}/*"));
    }

    #[test]
    fn rejects_missing_segments() {
        let err = DomainArn::parse("arn:aws:es:us-east-1:domain/logs").unwrap_err();
        assert!(err.to_string().contains("6 colon-separated"));
    }

    #[test]
    fn rejects_missing_domain_name() {
        assert!(DomainArn::parse("arn:aws:es:us-east-1:123456789012:domain").is_err());
        assert!(DomainArn::parse("arn:aws:es:us-east-1:123456789012:domain/").is_err());
        assert!(DomainArn::parse("arn:aws:es:us-east-1:123456789012:domain/a/b").is_err());
    }

    #[test]
    fn rejects_empty_account() {
        let err = DomainArn::parse("arn:aws:es:us-east-1::domain/logs").unwrap_err();
        assert!(err.reason.contains("account"));
    }

    #[test]
    fn deserializes_from_string() {
        let arn: DomainArn = serde_json::from_str(&format!("\"{ARN}\"")).unwrap();
        assert_eq!(arn.domain_name(), "logs-prod");
        assert!(serde_json::from_str::<DomainArn>("\"not-an-arn\"").is_err());
    }
}
