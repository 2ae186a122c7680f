use anyhow::Result;
use clap::Subcommand;

use super::helpers;
use crate::output::{print_error, print_json, print_success, theme, OutputMode};

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Print the resolved provisioning config
    Show,
    /// Parse and validate the config file
    Validate,
    /// Print the config file location
    Path,
}

pub fn execute(cmd: ConfigCmd, mode: OutputMode, config_path: Option<String>) -> Result<()> {
    match cmd {
        ConfigCmd::Show => show(mode, config_path),
        ConfigCmd::Validate => validate(mode, config_path),
        ConfigCmd::Path => path(mode, config_path),
    }
}

fn show(mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let cfg = helpers::load_config(config_path.as_deref())?;

    match mode {
        OutputMode::Json => print_json(&cfg)?,
        OutputMode::Human => {
            theme::print_header("Provisioning Configuration");

            theme::print_section("Domain");
            theme::print_kv("ARN", &cfg.domain_arn);
            theme::print_kv("Profile", cfg.profile_name());
            theme::print_kv(
                "Capacity file",
                cfg.capacity_file.as_deref().unwrap_or("<built-in>"),
            );

            theme::print_section("Notification targets");
            if cfg.notification_targets.is_empty() {
                theme::print_dim("none");
            }
            for target in &cfg.notification_targets {
                theme::print_kv("Topic", target);
            }

            theme::print_section("Diagnostic relay");
            theme::print_kv_colored("Enabled", &cfg.relay.enabled.to_string(), cfg.relay.enabled);
            theme::print_kv(
                "Output topic",
                cfg.relay.output_topic_arn.as_deref().unwrap_or("<not set>"),
            );
            println!();
        }
    }

    Ok(())
}

fn validate(mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let result = helpers::load_config(config_path.as_deref());

    match (&result, mode) {
        (Ok(_), OutputMode::Json) => print_json(&serde_json::json!({"valid": true}))?,
        (Ok(_), OutputMode::Human) => print_success("Configuration is valid"),
        (Err(e), OutputMode::Json) => {
            print_json(&serde_json::json!({"valid": false, "error": format!("{e:#}")}))?
        }
        (Err(e), OutputMode::Human) => print_error(&format!("Invalid configuration: {e:#}")),
    }

    result.map(|_| ())
}

fn path(mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let p = helpers::config_path(config_path.as_deref());
    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "path": p.display().to_string(),
            "exists": p.exists(),
        }))?,
        OutputMode::Human => println!("{}", p.display()),
    }
    Ok(())
}
