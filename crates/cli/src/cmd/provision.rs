use anyhow::Result;
use searchwatch_catalog::backend::CloudWatchBackend;
use searchwatch_catalog::snapshot::OpenSearchDescriber;

use super::helpers::{self, TargetArgs};
use super::plan::render_report;
use crate::output::{confirm, print_json, print_success, spinner, theme, OutputMode};

#[derive(clap::Args)]
pub struct ProvisionArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(long, help = "Skip confirmation prompt")]
    pub yes: bool,
}

pub async fn execute(
    args: ProvisionArgs,
    mode: OutputMode,
    config_path: Option<String>,
    profile: Option<String>,
) -> Result<()> {
    let cfg = helpers::resolve_config(config_path.as_deref(), profile.as_deref(), &args.target)?;
    let capacity = helpers::load_capacity(cfg.capacity_file.as_deref())?;

    if mode == OutputMode::Human && !args.yes {
        let prompt = format!("Register alarms for {} using profile '{}'?", cfg.domain_arn, cfg.profile_name());
        if !confirm::confirm_action(&prompt) {
            theme::print_dim("Aborted.");
            return Ok(());
        }
    }

    let sdk = helpers::sdk_config(&cfg).await?;
    let describer = OpenSearchDescriber::new(&sdk);
    let backend = CloudWatchBackend::new(&sdk);

    let sp = match mode {
        OutputMode::Human => Some(spinner::create("Registering alarms...")),
        OutputMode::Json => None,
    };

    let report = match searchwatch_catalog::provision(&cfg, &capacity, &describer, &backend).await {
        Ok(r) => {
            if let Some(sp) = sp {
                spinner::finish_ok(&sp, &format!("{} alarms registered", r.alarms.len()));
            }
            r
        }
        Err(e) => {
            if let Some(sp) = sp {
                spinner::finish_err(&sp, "Provisioning failed");
            }
            return Err(e.into());
        }
    };

    match mode {
        OutputMode::Json => print_json(&report)?,
        OutputMode::Human => {
            render_report(&report, "Provisioned");
            println!();
            print_success(&format!("Domain {} is monitored", report.domain_arn.domain_name()));
        }
    }
    Ok(())
}
