use anyhow::{bail, Result};
use serde_json::json;

use super::helpers;
use crate::output::{build_table, print_json, print_info, theme, OutputMode};

#[derive(clap::Args)]
pub struct CapacityArgs {
    #[arg(help = "Look up a single instance type")]
    pub instance_type: Option<String>,

    #[arg(long, help = "YAML file layered over the built-in table (defaults to the config's capacity_file)")]
    pub file: Option<String>,
}

pub fn execute(args: CapacityArgs, mode: OutputMode, config_path: Option<String>) -> Result<()> {
    let file = match args.file {
        Some(f) => Some(f),
        // The config is optional here; fall back to the built-in table.
        None => helpers::load_config(config_path.as_deref())
            .ok()
            .and_then(|cfg| cfg.capacity_file),
    };
    let table = helpers::load_capacity(file.as_deref())?;

    if let Some(instance_type) = &args.instance_type {
        let Some(gb) = table.lookup(instance_type) else {
            bail!("no storage capacity known for instance type '{instance_type}'");
        };
        match mode {
            OutputMode::Json => print_json(&json!({"instance_type": instance_type, "storage_gb": gb}))?,
            OutputMode::Human => print_info(instance_type, &format!("{gb} GB per node")),
        }
        return Ok(());
    }

    match mode {
        OutputMode::Json => {
            let entries: serde_json::Map<String, serde_json::Value> =
                table.iter().map(|(k, v)| (k.to_string(), json!(v))).collect();
            print_json(&entries)?
        }
        OutputMode::Human => {
            theme::print_header("Instance Storage");
            if let Some(f) = &file {
                theme::print_dim(&format!("Overrides from {f}"));
            }
            let mut out = build_table(&["Instance type", "Storage (GB)"]);
            for (instance_type, gb) in table.iter() {
                out.add_row(vec![instance_type.to_string(), gb.to_string()]);
            }
            println!("{out}");
        }
    }
    Ok(())
}
