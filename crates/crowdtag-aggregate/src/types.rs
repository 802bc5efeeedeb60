//! Aggregate statistics types.

use std::collections::HashMap;

use chrono::NaiveDate;
use crowdtag_tagging::{CoarseCategory, Tactic, Tag, TagSet};
use serde::Serialize;

/// `part / whole * 100`, defined as zero for an empty or zero denominator.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Order `(value, count)` pairs by count descending, ties by value, and keep
/// at most `limit`.
pub(crate) fn rank<'a>(counts: HashMap<&'a str, usize>, limit: Option<usize>) -> Vec<(&'a str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Per-tag roll-up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagStats {
    pub tag: Tag,
    pub name: &'static str,
    pub event_count: usize,
    pub event_percentage: f64,
    /// Sum of imputed sizes over events holding the tag.
    pub participant_count: f64,
    pub participant_percentage: f64,
    /// Declared keyword list for the tag.
    pub keywords: Vec<String>,
    /// Most frequent raw claims texts among events holding the tag.
    pub top_claims: Vec<ClaimCount>,
}

/// Occurrence count for a claim string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimCount {
    pub claim: String,
    pub count: usize,
}

/// An atomic claim with the union of tags of every event containing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimTags {
    pub claim: String,
    pub count: usize,
    pub tags: TagSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TacticStats {
    pub tactic: Tactic,
    pub name: &'static str,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: CoarseCategory,
    pub name: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Claims and mentions falling in one orientation bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BucketTotals {
    /// Distinct claims.
    pub claims: usize,
    /// Sum of occurrence counts.
    pub mentions: usize,
    /// Share of all claim mentions.
    pub mention_percentage: f64,
    /// Most frequent claims in the bucket.
    pub top: Vec<ClaimCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrientationSummary {
    pub unique_claims: usize,
    pub total_mentions: usize,
    pub anti_actor: BucketTotals,
    pub left_only: BucketTotals,
    pub right_only: BucketTotals,
    pub ambiguous: BucketTotals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Occurrence count for a raw field value (event type, target, locality).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Events per calendar month, keyed `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Batch-level descriptive statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchOverview {
    pub total_events: usize,
    pub unique_states: usize,
    pub unique_localities: usize,
    /// Mean of reported sizes; `None` when no event reports one.
    pub average_size: Option<f64>,
    pub largest_size: Option<f64>,
    pub event_types: Vec<ValueCount>,
    pub top_targets: Vec<ValueCount>,
    pub top_localities: Vec<ValueCount>,
    pub daily: Vec<DailyCount>,
    pub monthly: Vec<MonthCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

/// Number of events whose claims include both `source` and `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimLink {
    pub source: String,
    pub target: String,
    pub value: usize,
}

/// Co-occurrence graph over the most frequent atomic claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimNetwork {
    pub nodes: Vec<ClaimCount>,
    pub links: Vec<ClaimLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state: String,
    pub count: usize,
}

/// Events targeting the catch-all actor over time and by state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActorTimeline {
    pub total_events: usize,
    pub daily: Vec<DailyCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak: Option<DailyCount>,
    pub top_states: Vec<StateCount>,
    /// Most frequent atomic claims among the targeting events.
    pub top_claims: Vec<ClaimCount>,
}
