//! Daily and per-state counts of events targeting the catch-all actor.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use crowdtag_core::Event;
use crowdtag_tagging::{split_claims, targets_actor};

use crate::claims::rank_counts;
use crate::types::{rank, ActorTimeline, DailyCount, StateCount};

/// Build the actor timeline.
///
/// Events with unparsable dates count toward the total and the state table
/// but are left out of the daily series. The peak is the earliest day with
/// the highest count.
pub fn actor_timeline(events: &[Event], top_states: usize, top_claims: usize) -> ActorTimeline {
    let mut total_events = 0;
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut states: HashMap<&str, usize> = HashMap::new();
    let mut claims: HashMap<&str, usize> = HashMap::new();

    for event in events.iter().filter(|e| targets_actor(e.targets())) {
        total_events += 1;
        if let Some(date) = event.parsed_date() {
            *days.entry(date).or_insert(0) += 1;
        }
        if let Some(state) = event.state.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            *states.entry(state).or_insert(0) += 1;
        }
        for claim in split_claims(event.claims()) {
            *claims.entry(claim).or_insert(0) += 1;
        }
    }

    let daily: Vec<DailyCount> = days
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect();
    let peak = daily
        .iter()
        .copied()
        .reduce(|best, day| if day.count > best.count { day } else { best });

    ActorTimeline {
        total_events,
        daily,
        peak,
        top_states: rank(states, Some(top_states))
            .into_iter()
            .map(|(state, count)| StateCount {
                state: state.to_string(),
                count,
            })
            .collect(),
        top_claims: rank_counts(claims, Some(top_claims)),
    }
}
