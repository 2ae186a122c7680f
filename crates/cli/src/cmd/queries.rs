use anyhow::{bail, Result};
use searchwatch_relay::queries::{mapped_signals, queries_for};
use serde::Serialize;

use crate::output::{build_table, print_json, theme, OutputMode};

#[derive(clap::Args)]
pub struct QueriesArgs {
    #[arg(help = "Only show the queries for this signal")]
    pub signal: Option<String>,
}

#[derive(Serialize)]
struct SignalQueries {
    signal: &'static str,
    queries: &'static [&'static str],
}

pub fn execute(args: QueriesArgs, mode: OutputMode) -> Result<()> {
    let selected: Vec<SignalQueries> = match &args.signal {
        Some(signal) => {
            let Some(queries) = queries_for(signal) else {
                bail!("no diagnostic queries are mapped for signal '{signal}'");
            };
            mapped_signals()
                .filter(|(name, _)| *name == signal.as_str())
                .map(|(signal, _)| SignalQueries { signal, queries })
                .collect()
        }
        None => mapped_signals()
            .map(|(signal, queries)| SignalQueries { signal, queries })
            .collect(),
    };

    match mode {
        OutputMode::Json => print_json(&selected)?,
        OutputMode::Human => {
            theme::print_header("Diagnostic Queries");
            let mut table = build_table(&["Signal", "#", "Request"]);
            for entry in &selected {
                for (i, query) in entry.queries.iter().enumerate() {
                    let signal = if i == 0 { entry.signal } else { "" };
                    table.add_row(vec![signal.to_string(), (i + 1).to_string(), format!("GET /{query}")]);
                }
            }
            println!("{table}");
        }
    }
    Ok(())
}
