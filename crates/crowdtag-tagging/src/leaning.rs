//! Left-leaning umbrella classification and the filtered dataset.
//!
//! An explicit valence is authoritative. Without one the decision falls back
//! to keyword inference with a negation exclusion. Membership in the filtered
//! dataset additionally requires the event date to fall inside the window.

use crowdtag_core::{DateWindow, EngineConfig, Event, NegationConfig, Result};
use regex::Regex;
use serde::Serialize;
use tracing::info;

use crate::rules::{acronym_pattern, EventText};

/// Claim keywords indicating a left-leaning event.
pub const LEFT_KEYWORDS: &[&str] = &[
    "reproductive rights",
    "abortion",
    "women's rights",
    "lgbtq",
    "gay rights",
    "trans rights",
    "transgender",
    "blm",
    "black lives matter",
    "racial justice",
    "police brutality",
    "defund",
    "climate",
    "environment",
    "green new deal",
    "healthcare",
    "medicare for all",
    "universal healthcare",
    "living wage",
    "minimum wage",
    "worker",
    "union",
    "labor rights",
    "income inequality",
    "tax the rich",
    "wealth tax",
    "student debt",
    "free college",
    "immigration",
    "immigrant",
    "refugee",
    "asylum",
    "border",
    "gun control",
    "gun violence",
    "gun safety",
    "palestine",
    "palestinian",
    "gaza",
    "ceasefire",
    "against genocide",
    "indigenous",
    "native american",
    "voting rights",
    "gerrymandering",
    "democracy",
    "progressive",
    "liberal",
    "socialist",
    "social justice",
    "equity",
    "equality",
    "against capitalism",
    "against pro-life",
    "against deportations",
    "against border security",
];

/// Standalone acronym standing in for the bare "ice" keyword.
pub const LEFT_ACRONYM: &str = "ICE";

/// Target names that mark an event as directed against the administration.
pub const ACTOR_TARGETS: &[&str] = &["trump", "musk"];

/// What decided an event's leaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaningSource {
    /// Explicit valence code.
    Valence,
    /// Negation pattern forced the result to false.
    Negated,
    /// Claim keyword or acronym hit.
    Claims,
    /// Targets name an administration actor.
    Targets,
    /// Nothing matched.
    NoMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaningDecision {
    pub left: bool,
    pub source: LeaningSource,
}

/// Left-leaning classifier plus inclusion window.
#[derive(Debug, Clone)]
pub struct LeaningFilter {
    keywords: Vec<String>,
    acronym: Regex,
    actor_targets: Vec<String>,
    negation_trigger: String,
    negation_subjects: Vec<String>,
    window: DateWindow,
}

impl LeaningFilter {
    pub fn new(window: DateWindow, negation: &NegationConfig) -> Result<Self> {
        Ok(Self {
            keywords: LEFT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            acronym: acronym_pattern(LEFT_ACRONYM)?,
            actor_targets: ACTOR_TARGETS.iter().map(|k| k.to_string()).collect(),
            negation_trigger: negation.trigger.to_lowercase(),
            negation_subjects: negation.subjects.iter().map(|s| s.to_lowercase()).collect(),
            window,
        })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::new(config.window, &config.negation)
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// "against" co-occurring with a protected subject in the claims.
    pub fn is_negated(&self, claims: Option<&str>) -> bool {
        let Some(claims) = claims else {
            return false;
        };
        let lower = claims.to_lowercase();
        lower.contains(&self.negation_trigger)
            && self.negation_subjects.iter().any(|s| lower.contains(s.as_str()))
    }

    /// Keyword/target inference, ignoring valence.
    ///
    /// Negation only blocks the claims path; targets naming an actor still
    /// count.
    pub fn infer(&self, event: &Event) -> LeaningDecision {
        let negated = self.is_negated(event.claims());
        let text = EventText::from_event(event);
        if !negated
            && (text.claims_contain_any(&self.keywords)
                || text.claims.is_some_and(|c| self.acronym.is_match(c)))
        {
            return decision(true, LeaningSource::Claims);
        }
        if text.targets_contain_any(&self.actor_targets) {
            return decision(true, LeaningSource::Targets);
        }
        if negated {
            return decision(false, LeaningSource::Negated);
        }
        decision(false, LeaningSource::NoMatch)
    }

    /// Binary left/not-left decision. Valence, when present, wins.
    pub fn decide(&self, event: &Event) -> LeaningDecision {
        match event.valence {
            Some(valence) => decision(valence.is_left(), LeaningSource::Valence),
            None => self.infer(event),
        }
    }

    /// Event date inside the inclusion window. Unparsable dates are outside.
    pub fn in_window(&self, event: &Event) -> bool {
        self.window.contains(event.parsed_date())
    }

    /// Leaning decision and window membership for one event.
    pub fn assess(&self, event: &Event) -> Assessment {
        Assessment {
            decision: self.decide(event),
            in_window: self.in_window(event),
        }
    }

    /// Leaning decision and window membership for every event,
    /// index-aligned with `events`.
    pub fn assess_batch(&self, events: &[Event]) -> Vec<Assessment> {
        let assessed: Vec<Assessment> = events
            .iter()
            .map(|e| self.assess(e))
            .collect();
        info!(
            "Left-leaning filter kept {} of {} events (window {}..={})",
            assessed.iter().filter(|a| a.included()).count(),
            events.len(),
            self.window.start,
            self.window.end
        );
        assessed
    }
}

/// Per-event outcome of the leaning filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub decision: LeaningDecision,
    pub in_window: bool,
}

impl Assessment {
    /// Member of the filtered left-leaning dataset.
    pub fn included(&self) -> bool {
        self.decision.left && self.in_window
    }
}

fn decision(left: bool, source: LeaningSource) -> LeaningDecision {
    LeaningDecision { left, source }
}
