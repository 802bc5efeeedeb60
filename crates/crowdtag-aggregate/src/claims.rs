//! Claim-level aggregation: frequencies, claim→tag mapping, orientation.

use std::collections::HashMap;

use crowdtag_core::{Event, OrientationLimits};
use crowdtag_tagging::{orient, split_claims, OrientationBucket, TagSet};

use crate::types::{percentage, rank, BucketTotals, ClaimCount, ClaimTags, OrientationSummary};

/// Ranked [`ClaimCount`]s, most frequent first, ties by claim text.
pub(crate) fn rank_counts(counts: HashMap<&str, usize>, limit: Option<usize>) -> Vec<ClaimCount> {
    rank(counts, limit)
        .into_iter()
        .map(|(claim, count)| ClaimCount {
            claim: claim.to_string(),
            count,
        })
        .collect()
}

/// Frequency of every distinct atomic claim across all events.
///
/// Grouping is exact and case-sensitive after trimming.
pub fn claim_counts(events: &[Event]) -> Vec<ClaimCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for event in events {
        for claim in split_claims(event.claims()) {
            *counts.entry(claim).or_insert(0) += 1;
        }
    }
    rank_counts(counts, None)
}

/// Each atomic claim with the union of tags of the events containing it.
///
/// `labels` is index-aligned with `events`.
pub fn claim_tags(events: &[Event], labels: &[TagSet]) -> Vec<ClaimTags> {
    let mut map: HashMap<&str, (usize, TagSet)> = HashMap::new();
    for (event, tags) in events.iter().zip(labels.iter()) {
        for claim in split_claims(event.claims()) {
            let entry = map.entry(claim).or_insert((0, TagSet::new()));
            entry.0 += 1;
            entry.1 = entry.1.union(*tags);
        }
    }
    let mut rows: Vec<ClaimTags> = map
        .into_iter()
        .map(|(claim, (count, tags))| ClaimTags {
            claim: claim.to_string(),
            count,
            tags,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.claim.cmp(&b.claim)));
    rows
}

/// Bucket every distinct claim by political orientation, keeping the most
/// frequent claims of each bucket up to `limits`.
pub fn orientation_summary(counts: &[ClaimCount], limits: &OrientationLimits) -> OrientationSummary {
    let mut summary = OrientationSummary {
        unique_claims: counts.len(),
        total_mentions: counts.iter().map(|c| c.count).sum(),
        ..Default::default()
    };

    for entry in counts {
        let flags = orient(&entry.claim);
        if flags.anti_actor {
            add(&mut summary.anti_actor, entry);
        }
        match flags.bucket() {
            OrientationBucket::LeftOnly => add(&mut summary.left_only, entry),
            OrientationBucket::RightOnly => add(&mut summary.right_only, entry),
            OrientationBucket::Ambiguous => add(&mut summary.ambiguous, entry),
            OrientationBucket::Neither => {}
        }
    }

    let total = summary.total_mentions as f64;
    for (bucket, limit) in [
        (&mut summary.anti_actor, limits.anti_actor),
        (&mut summary.left_only, limits.left_only),
        (&mut summary.right_only, limits.right_only),
        (&mut summary.ambiguous, limits.ambiguous),
    ] {
        bucket.mention_percentage = percentage(bucket.mentions as f64, total);
        bucket
            .top
            .sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.claim.cmp(&b.claim)));
        bucket.top.truncate(limit);
    }
    summary
}

fn add(bucket: &mut BucketTotals, entry: &ClaimCount) {
    bucket.claims += 1;
    bucket.mentions += entry.count;
    bucket.top.push(entry.clone());
}
