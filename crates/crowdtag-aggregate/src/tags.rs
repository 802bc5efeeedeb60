//! Per-tag event and participant-weighted statistics.

use std::collections::HashMap;

use crowdtag_core::{EngineConfig, Event};
use crowdtag_tagging::{RuleTable, TagSet};
use tracing::debug;

use crate::claims::rank_counts;
use crate::types::{percentage, TagStats};

/// Rolls label sets up into [`TagStats`].
#[derive(Debug, Clone)]
pub struct TagAggregator {
    default_size: f64,
    top_claims: usize,
}

impl TagAggregator {
    pub fn new(default_size: f64, top_claims: usize) -> Self {
        Self {
            default_size,
            top_claims,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.default_size, config.top_claims_per_tag)
    }

    pub fn default_size(&self) -> f64 {
        self.default_size
    }

    /// Imputed size of every event, computed once per event.
    pub fn imputed_sizes(&self, events: &[Event]) -> Vec<f64> {
        events.iter().map(|e| e.size_or(self.default_size)).collect()
    }

    /// Statistics for every tag in `table`, sorted by event count descending
    /// with ties kept in table order.
    ///
    /// `labels` is index-aligned with `events`.
    pub fn aggregate(&self, events: &[Event], labels: &[TagSet], table: &RuleTable) -> Vec<TagStats> {
        let sizes = self.imputed_sizes(events);
        let total_events = events.len() as f64;
        let total_size: f64 = sizes.iter().sum();

        let mut stats: Vec<TagStats> = table
            .rules
            .iter()
            .map(|rule| {
                let mut event_count = 0usize;
                let mut participant_count = 0.0;
                let mut claims: HashMap<&str, usize> = HashMap::new();

                for ((event, tags), size) in events.iter().zip(labels).zip(&sizes) {
                    if !tags.contains(rule.tag) {
                        continue;
                    }
                    event_count += 1;
                    participant_count += size;
                    if let Some(text) = event.claims() {
                        *claims.entry(text).or_insert(0) += 1;
                    }
                }

                TagStats {
                    tag: rule.tag,
                    name: rule.tag.display_name(),
                    event_count,
                    event_percentage: percentage(event_count as f64, total_events),
                    participant_count,
                    participant_percentage: percentage(participant_count, total_size),
                    keywords: rule.declared.clone(),
                    top_claims: rank_counts(claims, Some(self.top_claims)),
                }
            })
            .collect();

        // Stable sort keeps table order among equal counts.
        stats.sort_by(|a, b| b.event_count.cmp(&a.event_count));
        debug!(
            "Aggregated {} tags over {} events ({} imputed participants)",
            stats.len(),
            events.len(),
            total_size
        );
        stats
    }
}

impl Default for TagAggregator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdtag_tagging::Tag;

    fn only(tag: Tag) -> TagSet {
        [tag].into_iter().collect()
    }

    fn stat(stats: &[TagStats], tag: Tag) -> &TagStats {
        stats.iter().find(|s| s.tag == tag).unwrap()
    }

    #[test]
    fn test_from_config_default_size() {
        let config = EngineConfig {
            default_size: 4.0,
            ..EngineConfig::default()
        };
        let aggregator = TagAggregator::from_config(&config);
        assert_eq!(aggregator.default_size(), 4.0);
        assert_eq!(
            aggregator.imputed_sizes(&[Event::new(), Event::new().with_size(9.0)]),
            vec![4.0, 9.0]
        );
    }

    #[test]
    fn test_imputation_once_per_event() {
        let events = vec![
            Event::new().with_size(100.0).with_claims("for climate action"),
            Event::new().with_size(50.0).with_claims("for climate action"),
            Event::new().with_claims("for abortion rights"),
            Event::new().with_claims("for abortion rights; for healthcare"),
        ];
        let labels = vec![
            only(Tag::Environment),
            only(Tag::Environment),
            only(Tag::Abortion),
            [Tag::Abortion, Tag::Healthcare].into_iter().collect(),
        ];
        let table = RuleTable::standard();
        let stats = TagAggregator::default().aggregate(&events, &labels, &table);

        let abortion = stat(&stats, Tag::Abortion);
        assert_eq!(abortion.event_count, 2);
        assert_eq!(abortion.participant_count, 22.0);
        assert!((abortion.participant_percentage - 22.0 / 172.0 * 100.0).abs() < 1e-9);
        assert!((abortion.participant_percentage - 12.79).abs() < 0.01);
        assert_eq!(abortion.event_percentage, 50.0);

        let environment = stat(&stats, Tag::Environment);
        assert_eq!(environment.participant_count, 150.0);

        // Overlapping tags do not change the denominator.
        let healthcare = stat(&stats, Tag::Healthcare);
        assert_eq!(healthcare.participant_count, 11.0);
    }

    #[test]
    fn test_sorted_by_count_then_table_order() {
        let events = vec![Event::new(), Event::new(), Event::new()];
        let labels = vec![
            only(Tag::Workers),
            only(Tag::Workers),
            [Tag::Gaza, Tag::Musk].into_iter().collect(),
        ];
        let stats = TagAggregator::default().aggregate(&events, &labels, &RuleTable::standard());
        let order: Vec<Tag> = stats.iter().take(3).map(|s| s.tag).collect();
        assert_eq!(order, vec![Tag::Workers, Tag::Gaza, Tag::Musk]);
        assert_eq!(stats.len(), Tag::ALL.len());
        assert_eq!(stats[3].event_count, 0);
    }

    #[test]
    fn test_top_claims_use_raw_text() {
        let events = vec![
            Event::new().with_claims("for a green new deal"),
            Event::new().with_claims("for a green new deal"),
            Event::new().with_claims("against pollution; for clean water"),
            Event::new(),
        ];
        let labels = vec![only(Tag::Environment); 4];
        let stats = TagAggregator::new(11.0, 1).aggregate(&events, &labels, &RuleTable::standard());
        let environment = stat(&stats, Tag::Environment);
        assert_eq!(environment.event_count, 4);
        assert_eq!(environment.top_claims.len(), 1);
        assert_eq!(environment.top_claims[0].claim, "for a green new deal");
        assert_eq!(environment.top_claims[0].count, 2);
        assert!(environment.keywords.iter().any(|k| k == "climate"));
    }

    #[test]
    fn test_empty_batch_is_all_zero() {
        let stats = TagAggregator::default().aggregate(&[], &[], &RuleTable::standard());
        assert!(stats.iter().all(|s| s.event_count == 0
            && s.event_percentage == 0.0
            && s.participant_percentage == 0.0));
    }
}
