//! Batch overview: volume, size, place and time statistics.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use crowdtag_core::Event;

use crate::types::{rank, BatchOverview, DailyCount, DateRange, MonthCount, ValueCount};

fn field(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn ranked(counts: HashMap<&str, usize>, limit: usize) -> Vec<ValueCount> {
    rank(counts, Some(limit))
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// Descriptive statistics for a batch.
///
/// Size statistics cover only events that report a size. Blank fields are
/// left out of the value tables and distinct counts; unparsable dates are
/// left out of the daily and monthly series and the date range.
pub fn batch_overview(events: &[Event], top_n: usize) -> BatchOverview {
    let mut states: HashSet<&str> = HashSet::new();
    let mut localities: HashMap<&str, usize> = HashMap::new();
    let mut event_types: HashMap<&str, usize> = HashMap::new();
    let mut targets: HashMap<&str, usize> = HashMap::new();
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut sizes: Vec<f64> = Vec::new();

    for event in events {
        if let Some(state) = field(event.state.as_deref()) {
            states.insert(state);
        }
        if let Some(locality) = field(event.locality.as_deref()) {
            *localities.entry(locality).or_insert(0) += 1;
        }
        if let Some(event_type) = field(event.event_type.as_deref()) {
            *event_types.entry(event_type).or_insert(0) += 1;
        }
        if let Some(target) = field(event.targets()) {
            *targets.entry(target).or_insert(0) += 1;
        }
        if let Some(date) = event.parsed_date() {
            *days.entry(date).or_insert(0) += 1;
        }
        if let Some(size) = event.size_mean {
            sizes.push(size);
        }
    }

    let mut months: BTreeMap<String, usize> = BTreeMap::new();
    for (date, count) in &days {
        *months.entry(date.format("%Y-%m").to_string()).or_insert(0) += count;
    }

    let date_range = match (days.keys().next(), days.keys().next_back()) {
        (Some(&start), Some(&end)) => Some(DateRange { start, end }),
        _ => None,
    };
    let average_size = if sizes.is_empty() {
        None
    } else {
        Some(sizes.iter().sum::<f64>() / sizes.len() as f64)
    };

    BatchOverview {
        total_events: events.len(),
        unique_states: states.len(),
        unique_localities: localities.len(),
        average_size,
        largest_size: sizes.iter().copied().reduce(f64::max),
        event_types: ranked(event_types, top_n),
        top_targets: ranked(targets, top_n),
        top_localities: ranked(localities, top_n),
        daily: days
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect(),
        monthly: months
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .collect(),
        date_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<Event> {
        vec![
            Event::new()
                .with_date("2025-02-17")
                .with_locality("Austin")
                .with_state("TX")
                .with_event_type("rally")
                .with_targets("Donald Trump")
                .with_size(200.0),
            Event::new()
                .with_date("2025-02-28")
                .with_locality("Austin")
                .with_state("TX")
                .with_event_type("march")
                .with_targets("Donald Trump")
                .with_size(50.0),
            Event::new()
                .with_date("2025-03-04")
                .with_locality("Portland")
                .with_state("OR")
                .with_event_type("rally"),
            Event::new()
                .with_date("sometime")
                .with_locality("  ")
                .with_event_type("vigil"),
        ]
    }

    #[test]
    fn test_batch_overview() {
        let overview = batch_overview(&events(), 10);
        assert_eq!(overview.total_events, 4);
        assert_eq!(overview.unique_states, 2);
        assert_eq!(overview.unique_localities, 2);
        assert_eq!(overview.average_size, Some(125.0));
        assert_eq!(overview.largest_size, Some(200.0));
        assert_eq!(
            overview.event_types[0],
            ValueCount {
                value: "rally".into(),
                count: 2
            }
        );
        assert_eq!(overview.top_targets.len(), 1);
        assert_eq!(overview.top_localities[0].value, "Austin");
        assert_eq!(overview.daily.len(), 3);

        let months: Vec<(&str, usize)> = overview
            .monthly
            .iter()
            .map(|m| (m.month.as_str(), m.count))
            .collect();
        assert_eq!(months, vec![("2025-02", 2), ("2025-03", 1)]);

        let range = overview.date_range.unwrap();
        assert_eq!(range.start.to_string(), "2025-02-17");
        assert_eq!(range.end.to_string(), "2025-03-04");
    }

    #[test]
    fn test_overview_limits_value_tables() {
        let overview = batch_overview(&events(), 1);
        assert_eq!(overview.event_types.len(), 1);
        assert_eq!(overview.top_localities.len(), 1);
    }

    #[test]
    fn test_empty_overview() {
        let overview = batch_overview(&[], 10);
        assert_eq!(overview, BatchOverview::default());
        assert!(overview.average_size.is_none());
    }
}
