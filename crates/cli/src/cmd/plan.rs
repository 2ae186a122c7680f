use anyhow::Result;
use searchwatch_catalog::relay_plan::RelayDeploymentPlan;
use searchwatch_catalog::snapshot::{ClusterSnapshot, NetworkPlacement, OpenSearchDescriber, StorageLayout};
use searchwatch_catalog::ProvisionReport;

use super::helpers::{self, TargetArgs};
use crate::output::{build_table, print_json, spinner, theme, OutputMode};

#[derive(clap::Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

pub async fn execute(
    args: PlanArgs,
    mode: OutputMode,
    config_path: Option<String>,
    profile: Option<String>,
) -> Result<()> {
    let cfg = helpers::resolve_config(config_path.as_deref(), profile.as_deref(), &args.target)?;
    let capacity = helpers::load_capacity(cfg.capacity_file.as_deref())?;
    let sdk = helpers::sdk_config(&cfg).await?;
    let describer = OpenSearchDescriber::new(&sdk);

    let sp = match mode {
        OutputMode::Human => Some(spinner::create("Describing domain...")),
        OutputMode::Json => None,
    };

    let result = searchwatch_catalog::plan(&cfg, &capacity, &describer).await;

    let report = match result {
        Ok(r) => {
            if let Some(sp) = sp {
                spinner::finish_clear(&sp);
            }
            r
        }
        Err(e) => {
            if let Some(sp) = sp {
                spinner::finish_err(&sp, "Planning failed");
            }
            return Err(e.into());
        }
    };

    match mode {
        OutputMode::Json => print_json(&report)?,
        OutputMode::Human => {
            render_report(&report, "Provisioning Plan");
            theme::print_dim("Nothing was registered. Run `searchwatch provision` to apply.");
            println!();
        }
    }
    Ok(())
}

pub(crate) fn render_report(report: &ProvisionReport, title: &str) {
    theme::print_header(title);
    render_snapshot(&report.snapshot);

    theme::print_section(&format!("Alarms ({})", report.alarms.len()));
    let domain = report.domain_arn.domain_name();
    let mut table = build_table(&["Alarm", "Condition", "Window", "Statistic", "Missing data"]);
    for alarm in &report.alarms {
        table.add_row(vec![
            alarm.alarm_name(domain),
            format!("{} {}", alarm.comparison.as_symbol(), alarm.threshold),
            format!("{}m x {}", alarm.window_minutes, alarm.evaluation_periods),
            alarm.statistic.wire_name().to_string(),
            alarm.missing_data.wire_name().to_string(),
        ]);
    }
    println!("{table}");

    let targets = report
        .alarms
        .first()
        .map(|a| a.notification_targets.join(", "))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "<none>".into());
    theme::print_kv("Notifies", &targets);

    match &report.relay {
        Some(plan) => render_relay(plan),
        None => {
            theme::print_section("Diagnostic relay");
            theme::print_kv_colored("Enabled", "false", false);
        }
    }
}

fn render_snapshot(snapshot: &ClusterSnapshot) {
    theme::print_section("Domain");
    theme::print_kv("Name", &snapshot.domain_name);
    theme::print_kv("Endpoint", &snapshot.endpoint);
    theme::print_kv("Data nodes", &snapshot.data_node_count.to_string());
    let storage = match &snapshot.storage {
        StorageLayout::Attached { volume_gb } => format!("{volume_gb} GB attached volume"),
        StorageLayout::InstanceStore { instance_type } => format!("instance store ({instance_type})"),
    };
    theme::print_kv("Storage", &storage);
    theme::print_kv_colored(
        "Coordinators",
        &snapshot
            .coordinator_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| "disabled".into()),
        snapshot.coordinator_enabled(),
    );
    theme::print_kv_colored(
        "Encryption",
        &snapshot.encryption_at_rest.to_string(),
        snapshot.encryption_at_rest,
    );
    let placement = match &snapshot.placement {
        NetworkPlacement::Public => "public".to_string(),
        NetworkPlacement::Private { vpc_id, .. } => format!("vpc {vpc_id}"),
    };
    theme::print_kv("Network", &placement);
}

fn render_relay(plan: &RelayDeploymentPlan) {
    theme::print_section("Diagnostic relay");
    theme::print_kv_colored("Enabled", "true", true);
    theme::print_kv("Trigger", &plan.trigger_topic);
    theme::print_kv("Timeout", &format!("{}s", plan.timeout_secs));
    for (key, value) in &plan.environment {
        theme::print_kv(key, value);
    }
    for policy in &plan.policies {
        theme::print_kv("Allow", &format!("{} on {}", policy.actions.join(", "), policy.resources.join(", ")));
    }
    if let Some(network) = &plan.network {
        let subnets: Vec<String> = network
            .subnets
            .iter()
            .map(|s| format!("{} ({})", s.id, s.availability_zone))
            .collect();
        theme::print_kv("VPC", &network.vpc_id);
        theme::print_kv("Subnets", &subnets.join(", "));
        theme::print_kv(
            "Ingress",
            &format!("tcp/{} on {}", network.ingress_port, network.security_group_id),
        );
    }
}
