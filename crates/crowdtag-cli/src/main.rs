//! Crowdtag: keyword tagging and statistics for protest event batches.

use std::path::{Path, PathBuf};

use anyhow::Context;
use crowdtag_runtime::{Orchestrator, RunOptions, RunReport};
use crowdtag_tagging::RuleTable;
use tracing_subscriber::EnvFilter;

mod batch;

fn print_help() {
    println!("Crowdtag: keyword tagging for protest event batches");
    println!();
    println!("Usage: crowdtag <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <events.json> [config.json]      Print the run report as JSON");
    println!("  summary <events.json> [config.json]  Print a human-readable summary");
    println!("  rules                                Print the rule table as JSON");
    println!("  help                                 Show this help message");
    println!();
    println!("Options:");
    println!("  --filtered   Aggregate only left-leaning events inside the date window");
}

fn execute(events_path: &Path, config_path: Option<&Path>, options: RunOptions) -> anyhow::Result<RunReport> {
    let config = batch::load_config(config_path).context("Failed to load config")?;
    let events = batch::load_events(events_path)
        .with_context(|| format!("Failed to read events from {}", events_path.display()))?;
    let orchestrator = Orchestrator::new(&config)?;
    Ok(orchestrator.run(&events, options))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let filtered = args.iter().any(|a| a == "--filtered");
    let positional: Vec<&str> = args
        .iter()
        .skip(1)
        .map(String::as_str)
        .filter(|a| !a.starts_with("--"))
        .collect();

    let Some(command) = positional.first().copied() else {
        print_help();
        return Ok(());
    };
    let options = if filtered {
        RunOptions::filtered()
    } else {
        RunOptions::default()
    };

    match command {
        "run" | "summary" => {
            let Some(events_path) = positional.get(1).map(PathBuf::from) else {
                eprintln!("Usage: crowdtag {} <events.json> [config.json] [--filtered]", command);
                std::process::exit(1);
            };
            let config_path = positional.get(2).map(PathBuf::from);
            let report = execute(&events_path, config_path.as_deref(), options)?;
            if command == "run" {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                batch::print_summary(&report);
            }
        }
        "rules" => {
            println!("{}", serde_json::to_string_pretty(&RuleTable::standard())?);
        }
        "help" | "-h" => print_help(),
        _ => {
            eprintln!("Unknown command: {}. Use 'crowdtag help' for usage.", command);
            std::process::exit(1);
        }
    }

    Ok(())
}
