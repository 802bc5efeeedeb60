//! Event classifier: evaluates the rule table against events.

use crowdtag_core::Event;
use rayon::prelude::*;
use tracing::debug;

use crate::rules::{EventText, RuleTable};
use crate::tag::{Tag, TagSet};

/// Multi-label keyword classifier over a read-only rule table.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleTable,
}

impl Classifier {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Classifier over the built-in rule table.
    pub fn standard() -> Self {
        Self::new(RuleTable::standard())
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// All tags whose rule matches the event.
    pub fn classify(&self, event: &Event) -> TagSet {
        let text = EventText::from_event(event);
        self.rules
            .rules
            .iter()
            .filter(|rule| rule.matches(&text))
            .map(|rule| rule.tag)
            .collect()
    }

    /// Outcome for a single tag. Tags without a rule never match.
    pub fn classify_tag(&self, event: &Event, tag: Tag) -> bool {
        let text = EventText::from_event(event);
        self.rules.rule(tag).is_some_and(|rule| rule.matches(&text))
    }

    /// Classify a batch in parallel. Output is index-aligned with `events`.
    pub fn classify_batch(&self, events: &[Event]) -> Vec<TagSet> {
        let labels: Vec<TagSet> = events.par_iter().map(|e| self.classify(e)).collect();
        debug!(
            "Classified {} events, {} with at least one tag",
            events.len(),
            labels.iter().filter(|l| !l.is_empty()).count()
        );
        labels
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}
