//! Tactic usage and coarse category distribution.

use crowdtag_core::Event;
use crowdtag_tagging::{categorize, classify_tactics, CoarseCategory, Tactic};

use crate::types::{percentage, CategoryCount, TacticStats};

/// Share of events using each tactic, in [`Tactic::ALL`] order.
///
/// Tactics are not exclusive, so counts may sum past the event total.
pub fn tactic_stats(events: &[Event]) -> Vec<TacticStats> {
    let mut counts = [0usize; Tactic::ALL.len()];
    for event in events {
        for tactic in classify_tactics(event) {
            if let Some(i) = Tactic::ALL.iter().position(|t| *t == tactic) {
                counts[i] += 1;
            }
        }
    }
    let total = events.len() as f64;
    Tactic::ALL
        .iter()
        .zip(counts)
        .map(|(tactic, count)| TacticStats {
            tactic: *tactic,
            name: tactic.display_name(),
            count,
            percentage: percentage(count as f64, total),
        })
        .collect()
}

/// Exclusive coarse category counts. Counts always sum to the event total.
///
/// Sorted by count descending; ties keep [`CoarseCategory::ALL`] order.
pub fn category_distribution(events: &[Event]) -> Vec<CategoryCount> {
    let mut counts = [0usize; CoarseCategory::ALL.len()];
    for event in events {
        let category = categorize(event.claims());
        if let Some(i) = CoarseCategory::ALL.iter().position(|c| *c == category) {
            counts[i] += 1;
        }
    }
    let total = events.len() as f64;
    let mut rows: Vec<CategoryCount> = CoarseCategory::ALL
        .iter()
        .zip(counts)
        .map(|(category, count)| CategoryCount {
            category: *category,
            name: category.display_name(),
            count,
            percentage: percentage(count as f64, total),
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<Event> {
        vec![
            Event::new()
                .with_claims("against Trump; for women's rights")
                .with_event_type("march; rally")
                .with_arrests(true),
            Event::new()
                .with_claims("for climate action")
                .with_event_type("vigil")
                .with_participant_measures("candlelight vigil"),
            Event::new().with_claims("for a ceasefire in Gaza"),
            Event::new().with_claims("for better parks"),
            Event::new(),
        ]
    }

    #[test]
    fn test_category_counts_sum_to_total() {
        let events = events();
        let rows = category_distribution(&events);
        let sum: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(sum, events.len());
        let other = rows
            .iter()
            .find(|r| r.category == CoarseCategory::Other)
            .unwrap();
        assert_eq!(other.count, 2);
        assert_eq!(rows[0].category, CoarseCategory::Other);
        assert!((other.percentage - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_tactic_stats() {
        let stats = tactic_stats(&events());
        let count = |t: Tactic| stats.iter().find(|s| s.tactic == t).unwrap().count;
        assert_eq!(count(Tactic::Demonstration), 1);
        assert_eq!(count(Tactic::March), 1);
        assert_eq!(count(Tactic::Arrests), 1);
        assert_eq!(count(Tactic::Vigil), 1);
        assert_eq!(count(Tactic::CounterProtest), 0);
        assert_eq!(stats.len(), Tactic::ALL.len());
    }

    #[test]
    fn test_empty_batch() {
        assert!(tactic_stats(&[]).iter().all(|s| s.percentage == 0.0));
        assert!(category_distribution(&[]).iter().all(|c| c.count == 0));
    }
}
