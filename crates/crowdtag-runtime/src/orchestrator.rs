//! Orchestrator: runs one batch through filter, classify, resolve, aggregate.

use std::borrow::Cow;
use std::time::Instant;

use crowdtag_aggregate::{
    actor_timeline, batch_overview, category_distribution, claim_counts, claim_network,
    claim_tags, orientation_summary, tactic_stats, TagAggregator,
};
use crowdtag_core::{EngineConfig, Event, OrientationLimits, Result};
use crowdtag_tagging::{
    categorize, classify_tactics, Classifier, ConflictResolver, LeaningFilter, RuleTable, TagSet,
};
use tracing::{debug, info};

use crate::types::*;

/// Top-level batch runner. Holds only read-only state, so runs are
/// independent and repeatable.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    classifier: Classifier,
    resolver: ConflictResolver,
    leaning: LeaningFilter,
    aggregator: TagAggregator,
    top_states: usize,
    top_overview: usize,
    top_actor_claims: usize,
    network_claims: usize,
    orientation_limits: OrientationLimits,
}

impl Orchestrator {
    /// Orchestrator over the standard rule table.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Self::with_rules(config, RuleTable::standard())
    }

    /// Orchestrator over a caller-supplied rule table.
    pub fn with_rules(config: &EngineConfig, rules: RuleTable) -> Result<Self> {
        config.validate()?;
        let orch = Self {
            classifier: Classifier::new(rules),
            resolver: ConflictResolver::standard(),
            leaning: LeaningFilter::from_config(config)?,
            aggregator: TagAggregator::from_config(config),
            top_states: config.top_states,
            top_overview: config.top_overview,
            top_actor_claims: config.top_actor_claims,
            network_claims: config.network_claims,
            orientation_limits: config.orientation_limits,
        };
        info!(
            "Orchestrator initialized: rules v{}, window {}..={}, default size {}",
            orch.classifier.rules().version,
            config.window.start,
            config.window.end,
            orch.aggregator.default_size()
        );
        Ok(orch)
    }

    pub fn rules(&self) -> &RuleTable {
        self.classifier.rules()
    }

    /// Resolved tag set for every event, index-aligned with `events`.
    pub fn label(&self, events: &[Event]) -> Vec<TagSet> {
        let raw = self.classifier.classify_batch(events);
        self.resolver.resolve_batch(events, &raw)
    }

    /// Run the whole pipeline over one batch.
    pub fn run(&self, events: &[Event], options: RunOptions) -> RunReport {
        let started = Instant::now();
        let labels = self.label(events);
        let assessed = self.leaning.assess_batch(events);
        let included: Vec<usize> = assessed
            .iter()
            .enumerate()
            .filter(|(_, a)| a.included())
            .map(|(i, _)| i)
            .collect();

        let rows: Vec<EventLabels> = events
            .iter()
            .zip(&labels)
            .zip(&assessed)
            .enumerate()
            .map(|(index, ((event, tags), assessment))| EventLabels {
                index,
                tags: tags.flags(),
                leaning: assessment.decision,
                in_window: assessment.in_window,
                category: categorize(event.claims()),
                tactics: classify_tactics(event),
            })
            .collect();

        let (scoped_events, scoped_labels): (Cow<[Event]>, Cow<[TagSet]>) = match options.scope {
            Scope::All => (Cow::Borrowed(events), Cow::Borrowed(labels.as_slice())),
            Scope::Filtered => (
                Cow::Owned(included.iter().map(|&i| events[i].clone()).collect()),
                Cow::Owned(included.iter().map(|&i| labels[i]).collect()),
            ),
        };
        debug!(
            "Aggregating {} of {} events ({:?} scope)",
            scoped_events.len(),
            events.len(),
            options.scope
        );

        let counts = claim_counts(&scoped_events);
        let report = RunReport {
            rule_version: self.rules().version,
            scope: options.scope,
            total_events: events.len(),
            filtered_events: included.len(),
            aggregated_events: scoped_events.len(),
            labels: rows,
            overview: batch_overview(&scoped_events, self.top_overview),
            tag_stats: self
                .aggregator
                .aggregate(&scoped_events, &scoped_labels, self.rules()),
            claim_tags: claim_tags(&scoped_events, &scoped_labels),
            claim_network: claim_network(&scoped_events, self.network_claims),
            orientation: orientation_summary(&counts, &self.orientation_limits),
            claim_counts: counts,
            tactics: tactic_stats(&scoped_events),
            categories: category_distribution(&scoped_events),
            actor_timeline: actor_timeline(&scoped_events, self.top_states, self.top_actor_claims),
        };

        info!(
            "Run complete: {} events, {} filtered, {} aggregated in {:?}",
            report.total_events,
            report.filtered_events,
            report.aggregated_events,
            started.elapsed()
        );
        report
    }
}
