mod cmd;
mod output;
#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use cmd::Commands;
use output::OutputMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "searchwatch", version, about = "Alarm provisioning for managed search domains")]
pub struct Opts {
    #[clap(subcommand)]
    cmd: Commands,

    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(long, global = true, help = "Path to provisioning config file")]
    config: Option<String>,

    #[arg(long, global = true, env = "AWS_PROFILE", help = "Credentials profile (overrides config)")]
    profile: Option<String>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Log more (-v info, -vv debug)")]
    verbose: u8,
}

impl Opts {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(opts.log_filter())))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    cmd::run(opts).await
}
