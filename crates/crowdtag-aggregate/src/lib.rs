//! Crowdtag Aggregate: statistics over labelled event batches.
//!
//! Per-tag event and participant-weighted shares, atomic claim frequencies,
//! the claim→tag mapping, claim co-occurrence, tactic and category
//! distributions, claim orientation, the batch overview and the actor
//! timeline. Every function is a pure reduction over the batch; percentages
//! with a zero denominator are zero.

pub mod claims;
pub mod cooccurrence;
pub mod distribution;
pub mod summary;
pub mod tags;
pub mod timeline;
pub mod types;

pub use claims::{claim_counts, claim_tags, orientation_summary};
pub use cooccurrence::claim_network;
pub use distribution::{category_distribution, tactic_stats};
pub use summary::batch_overview;
pub use tags::TagAggregator;
pub use timeline::actor_timeline;
pub use types::{
    percentage, ActorTimeline, BatchOverview, BucketTotals, CategoryCount, ClaimCount, ClaimLink,
    ClaimNetwork, ClaimTags, DailyCount, DateRange, MonthCount, OrientationSummary, StateCount,
    TacticStats, TagStats, ValueCount,
};
