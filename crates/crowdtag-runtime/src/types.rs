//! Runtime types.

use std::collections::BTreeMap;

use crowdtag_aggregate::{
    ActorTimeline, BatchOverview, CategoryCount, ClaimCount, ClaimNetwork, ClaimTags,
    OrientationSummary, TacticStats, TagStats,
};
use crowdtag_tagging::{CoarseCategory, LeaningDecision, Tactic};
use serde::Serialize;

/// Which events feed the aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Every event in the batch.
    #[default]
    All,
    /// Only the left-leaning dataset inside the date window.
    Filtered,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub scope: Scope,
}

impl RunOptions {
    pub fn filtered() -> Self {
        Self {
            scope: Scope::Filtered,
        }
    }
}

/// One row of the per-event label table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLabels {
    /// Position of the event in the input batch.
    pub index: usize,
    /// Tag key → 0/1, after conflict resolution.
    pub tags: BTreeMap<&'static str, u8>,
    pub leaning: LeaningDecision,
    pub in_window: bool,
    pub category: CoarseCategory,
    pub tactics: Vec<Tactic>,
}

/// Everything derived from one batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub rule_version: u32,
    pub scope: Scope,
    /// Events in the input batch.
    pub total_events: usize,
    /// Events in the left-leaning dataset, regardless of scope.
    pub filtered_events: usize,
    /// Events the aggregates below were computed over.
    pub aggregated_events: usize,
    pub labels: Vec<EventLabels>,
    pub overview: BatchOverview,
    pub tag_stats: Vec<TagStats>,
    pub claim_counts: Vec<ClaimCount>,
    pub claim_tags: Vec<ClaimTags>,
    pub claim_network: ClaimNetwork,
    pub tactics: Vec<TacticStats>,
    pub categories: Vec<CategoryCount>,
    pub orientation: OrientationSummary,
    pub actor_timeline: ActorTimeline,
}
