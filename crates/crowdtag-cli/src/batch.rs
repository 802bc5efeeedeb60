//! Batch I/O: reads event files and renders the human-readable summary.

use std::path::Path;

use crowdtag_core::{EngineConfig, Event, Result};
use crowdtag_runtime::{RunReport, Scope};
use tracing::info;

/// Read a JSON array of events.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    let events: Vec<Event> = serde_json::from_str(&content)?;
    info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load the engine config from an optional file, then apply env overrides.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    config.with_env_overrides()
}

pub fn print_summary(report: &RunReport) {
    println!("=== Crowdtag Run Summary ===");
    println!();
    println!("Rule table:         v{}", report.rule_version);
    println!(
        "Scope:              {}",
        match report.scope {
            Scope::All => "all events",
            Scope::Filtered => "left-leaning, in window",
        }
    );
    println!("Events:             {}", report.total_events);
    println!("Left-leaning:       {}", report.filtered_events);
    println!("Aggregated:         {}", report.aggregated_events);

    let overview = &report.overview;
    println!();
    println!("Overview:");
    println!("  states             {:>6}", overview.unique_states);
    println!("  localities         {:>6}", overview.unique_localities);
    if let (Some(average), Some(largest)) = (overview.average_size, overview.largest_size) {
        println!("  average size       {:>6.1}", average);
        println!("  largest size       {:>6.0}", largest);
    }
    if let Some(range) = overview.date_range {
        println!("  dates              {} to {}", range.start, range.end);
    }
    for event_type in overview.event_types.iter().take(5) {
        println!("  {:<18} {:>6}", event_type.value, event_type.count);
    }

    println!();
    println!("Tags:");
    for stat in &report.tag_stats {
        println!(
            "  {:<16} {:>6} events ({:>5.1}%)  {:>10.0} participants ({:>5.1}%)",
            stat.name,
            stat.event_count,
            stat.event_percentage,
            stat.participant_count,
            stat.participant_percentage
        );
    }

    if !report.claim_counts.is_empty() {
        println!();
        println!("Top claims:");
        for claim in report.claim_counts.iter().take(10) {
            println!("  {:>6}  {}", claim.count, claim.claim);
        }
    }

    if !report.claim_network.links.is_empty() {
        println!();
        println!("Claims seen together:");
        for link in report.claim_network.links.iter().take(10) {
            println!("  {:>6}  {} + {}", link.value, link.source, link.target);
        }
    }

    println!();
    println!("Tactics:");
    for tactic in &report.tactics {
        println!(
            "  {:<20} {:>6} ({:>5.1}%)",
            tactic.name, tactic.count, tactic.percentage
        );
    }

    println!();
    println!("Categories:");
    for category in &report.categories {
        println!(
            "  {:<20} {:>6} ({:>5.1}%)",
            category.name, category.count, category.percentage
        );
    }

    let o = &report.orientation;
    println!();
    println!(
        "Claim orientation:  {} unique, {} mentions",
        o.unique_claims, o.total_mentions
    );
    println!("  anti-actor         {:>6} ({:>5.1}%)", o.anti_actor.mentions, o.anti_actor.mention_percentage);
    println!("  left only          {:>6} ({:>5.1}%)", o.left_only.mentions, o.left_only.mention_percentage);
    println!("  right only         {:>6} ({:>5.1}%)", o.right_only.mentions, o.right_only.mention_percentage);
    println!("  ambiguous          {:>6} ({:>5.1}%)", o.ambiguous.mentions, o.ambiguous.mention_percentage);

    let timeline = &report.actor_timeline;
    println!();
    println!("Actor-targeted events: {}", timeline.total_events);
    if let Some(peak) = timeline.peak {
        println!("  peak day           {} ({} events)", peak.date, peak.count);
    }
    for state in &timeline.top_states {
        println!("  {:<18} {:>6}", state.state, state.count);
    }
    for claim in timeline.top_claims.iter().take(5) {
        println!("  {:>6}  {}", claim.count, claim.claim);
    }
}
