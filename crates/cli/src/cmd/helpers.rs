use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use searchwatch_catalog::config::{load_from_file, validate, ProvisionConfig, RelayOptions};
use searchwatch_catalog::snapshot::{load_sdk_config, CapacityTable};
use searchwatch_common::DomainArn;

/// Flags that can stand in for, or override, the config file.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct TargetArgs {
    #[arg(long, help = "Domain ARN (overrides config)")]
    pub domain_arn: Option<String>,

    #[arg(long = "target", help = "Notification topic ARN; repeat for several (replaces config list)")]
    pub targets: Vec<String>,

    #[arg(long, help = "YAML file layered over the built-in capacity table")]
    pub capacity_file: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        return dir.join("searchwatch").join("searchwatch.yml");
    }
    PathBuf::from("/etc/searchwatch/searchwatch.yml")
}

pub fn config_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

pub fn load_config(config_path: Option<&str>) -> Result<ProvisionConfig> {
    let path = self::config_path(config_path);
    load_from_file(&path).with_context(|| format!("loading config from {}", path.display()))
}

/// Config file merged with command-line overrides. The file may be absent
/// when no path was given and `--domain-arn` supplies the domain.
pub fn resolve_config(
    config_path: Option<&str>,
    profile: Option<&str>,
    overrides: &TargetArgs,
) -> Result<ProvisionConfig> {
    let default_missing = config_path.is_none() && !default_config_path().exists();

    let mut cfg = match (&overrides.domain_arn, default_missing) {
        (Some(arn), true) => ProvisionConfig {
            domain_arn: arn.clone(),
            profile: None,
            notification_targets: Vec::new(),
            capacity_file: None,
            relay: RelayOptions::default(),
        },
        (None, true) => bail!(
            "no config at {} and no --domain-arn given",
            default_config_path().display()
        ),
        _ => load_config(config_path)?,
    };

    if let Some(arn) = &overrides.domain_arn {
        cfg.domain_arn = arn.clone();
    }
    if !overrides.targets.is_empty() {
        cfg.notification_targets = overrides.targets.clone();
    }
    if let Some(file) = &overrides.capacity_file {
        cfg.capacity_file = Some(file.clone());
    }
    if let Some(p) = profile {
        cfg.profile = Some(p.to_string());
    }

    validate(&cfg).context("invalid configuration")?;
    tracing::debug!(
        domain_arn = %cfg.domain_arn,
        profile = cfg.profile_name(),
        targets = cfg.notification_targets.len(),
        relay = cfg.relay.enabled,
        "config resolved"
    );
    Ok(cfg)
}

pub fn load_capacity(capacity_file: Option<&str>) -> Result<CapacityTable> {
    CapacityTable::with_overrides(capacity_file.map(Path::new)).context("loading capacity table")
}

pub async fn sdk_config(cfg: &ProvisionConfig) -> Result<aws_config::SdkConfig> {
    let arn = DomainArn::parse(&cfg.domain_arn)?;
    Ok(load_sdk_config(cfg.profile.as_deref(), arn.region()).await)
}
