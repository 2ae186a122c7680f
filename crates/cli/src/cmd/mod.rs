mod capacity;
mod config;
pub(crate) mod helpers;
mod plan;
mod provision;
mod queries;
mod version;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Register the alarm catalog for a domain
    Provision(provision::ProvisionArgs),
    /// Show what provisioning would register, without writing anything
    Plan(plan::PlanArgs),
    /// List the diagnostic queries the relay runs per signal
    Queries(queries::QueriesArgs),
    /// Show the instance storage capacity table
    Capacity(capacity::CapacityArgs),
    #[command(subcommand)]
    Config(config::ConfigCmd),
    Version,
}

pub async fn run(opts: crate::Opts) -> Result<()> {
    let mode = opts.output_mode();
    match opts.cmd {
        Commands::Provision(args) => provision::execute(args, mode, opts.config, opts.profile).await,
        Commands::Plan(args) => plan::execute(args, mode, opts.config, opts.profile).await,
        Commands::Queries(args) => queries::execute(args, mode),
        Commands::Capacity(args) => capacity::execute(args, mode, opts.config),
        Commands::Config(cmd) => config::execute(cmd, mode, opts.config),
        Commands::Version => {
            version::execute(mode);
            Ok(())
        }
    }
}
