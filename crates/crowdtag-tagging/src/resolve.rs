//! Tag conflict resolver: second pass over per-event tag sets.
//!
//! Two rules run in order:
//! 1. augment: the policy actor tag is added when budget-cut terminology or
//!    the actor's name appears in claims or targets;
//! 2. demote: the catch-all actor tag is dropped when it co-occurs with any
//!    other tag and the actor is not named in claims or targets.

use crowdtag_core::Event;
use serde::Serialize;
use tracing::debug;

use crate::rules::EventText;
use crate::tag::{Tag, TagSet};

/// Catch-all actor tag kept only when the actor is explicitly named.
#[derive(Debug, Clone, Serialize)]
pub struct DemoteRule {
    pub tag: Tag,
    pub names: Vec<String>,
}

/// Tag added whenever any of `terms` is mentioned.
#[derive(Debug, Clone, Serialize)]
pub struct AugmentRule {
    pub tag: Tag,
    pub terms: Vec<String>,
}

/// What the resolver changed on one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub augmented: bool,
    pub demoted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConflictResolver {
    pub demote: DemoteRule,
    pub augment: AugmentRule,
}

impl ConflictResolver {
    pub fn new(demote: DemoteRule, augment: AugmentRule) -> Self {
        let lower = |v: Vec<String>| v.into_iter().map(|s| s.to_lowercase()).collect();
        Self {
            demote: DemoteRule {
                tag: demote.tag,
                names: lower(demote.names),
            },
            augment: AugmentRule {
                tag: augment.tag,
                terms: lower(augment.terms),
            },
        }
    }

    /// Trump as the catch-all actor; Musk augmented on budget/DOGE terms.
    pub fn standard() -> Self {
        Self::new(
            DemoteRule {
                tag: Tag::Trump,
                names: vec!["trump".into()],
            },
            AugmentRule {
                tag: Tag::Musk,
                terms: [
                    "musk",
                    "doge",
                    "department of government efficiency",
                    "budget cut",
                    "funding cut",
                    "spending cut",
                    "federal cuts",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
        )
    }

    /// Apply both rules and return the adjusted set.
    pub fn resolve(&self, event: &Event, tags: TagSet) -> TagSet {
        self.resolve_with_report(event, tags).0
    }

    pub fn resolve_with_report(&self, event: &Event, mut tags: TagSet) -> (TagSet, Resolution) {
        let text = EventText::from_event(event);
        let mut resolution = Resolution::default();

        if !tags.contains(self.augment.tag) && text.mentions_any(&self.augment.terms) {
            tags.insert(self.augment.tag);
            resolution.augmented = true;
        }

        if tags.contains(self.demote.tag)
            && tags.len() > 1
            && !text.mentions_any(&self.demote.names)
        {
            tags.remove(self.demote.tag);
            resolution.demoted = true;
            debug!("Demoted {} on event dated {:?}", self.demote.tag, event.date);
        }

        (tags, resolution)
    }

    /// Resolve a batch, index-aligned with `events`.
    pub fn resolve_batch(&self, events: &[Event], labels: &[TagSet]) -> Vec<TagSet> {
        events
            .iter()
            .zip(labels.iter())
            .map(|(event, tags)| self.resolve(event, *tags))
            .collect()
    }
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[Tag]) -> TagSet {
        tags.iter().copied().collect()
    }

    #[test]
    fn test_actor_named_in_targets_is_kept() {
        let resolver = ConflictResolver::standard();
        let event = Event::new()
            .with_claims("Stop ICE raids and tariffs")
            .with_targets("Trump administration");
        let out = resolver.resolve(&event, set(&[Tag::Immigration, Tag::Trump]));
        assert!(out.contains(Tag::Trump));
        assert!(out.contains(Tag::Immigration));
    }

    #[test]
    fn test_incidental_actor_is_demoted() {
        let resolver = ConflictResolver::standard();
        let event = Event::new()
            .with_claims("Stop ICE raids")
            .with_targets("local police department");
        let (out, resolution) =
            resolver.resolve_with_report(&event, set(&[Tag::Immigration, Tag::Trump]));
        assert_eq!(out, set(&[Tag::Immigration]));
        assert!(resolution.demoted);
    }

    #[test]
    fn test_sole_actor_tag_untouched() {
        let resolver = ConflictResolver::standard();
        let event = Event::new().with_claims("for democracy");
        assert_eq!(resolver.resolve(&event, set(&[Tag::Trump])), set(&[Tag::Trump]));
    }

    #[test]
    fn test_actor_named_in_claims_case_insensitive() {
        let resolver = ConflictResolver::standard();
        let event = Event::new().with_claims("against TRUMP's tariffs; for workers");
        let out = resolver.resolve(&event, set(&[Tag::Workers, Tag::Trump]));
        assert!(out.contains(Tag::Trump));
    }

    #[test]
    fn test_budget_terms_augment_policy_actor() {
        let resolver = ConflictResolver::standard();
        let event = Event::new().with_claims("against federal cuts to science funding");
        let (out, resolution) = resolver.resolve_with_report(&event, TagSet::new());
        assert!(out.contains(Tag::Musk));
        assert!(resolution.augmented);

        let event = Event::new().with_targets("DOGE");
        assert!(resolver.resolve(&event, TagSet::new()).contains(Tag::Musk));
    }

    #[test]
    fn test_augment_runs_before_demotion() {
        let resolver = ConflictResolver::standard();
        let event = Event::new().with_claims("against budget cuts");
        // The augmented tag is a co-occurring tag for the demotion rule.
        let out = resolver.resolve(&event, set(&[Tag::Trump]));
        assert_eq!(out, set(&[Tag::Musk]));
    }

    #[test]
    fn test_deterministic() {
        let resolver = ConflictResolver::standard();
        let events = vec![
            Event::new().with_claims("Stop ICE raids"),
            Event::new().with_claims("against DOGE").with_targets("Trump"),
        ];
        let labels = vec![set(&[Tag::Immigration, Tag::Trump]), set(&[Tag::Trump])];
        let first = resolver.resolve_batch(&events, &labels);
        assert_eq!(first, resolver.resolve_batch(&events, &labels));
        assert_eq!(first[0], set(&[Tag::Immigration]));
        assert_eq!(first[1], set(&[Tag::Trump, Tag::Musk]));
    }
}
