//! Tactic tagging from event type, participant measures, and arrests.

use crowdtag_core::Event;
use serde::Serialize;

/// Protest tactic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tactic {
    Demonstration,
    March,
    CounterProtest,
    CivilDisobedience,
    Arrests,
    Vigil,
}

impl Tactic {
    pub const ALL: [Tactic; 6] = [
        Tactic::Demonstration,
        Tactic::March,
        Tactic::CounterProtest,
        Tactic::CivilDisobedience,
        Tactic::Arrests,
        Tactic::Vigil,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Tactic::Demonstration => "Demonstration",
            Tactic::March => "March",
            Tactic::CounterProtest => "Counter-Protest",
            Tactic::CivilDisobedience => "Civil Disobedience",
            Tactic::Arrests => "Arrests",
            Tactic::Vigil => "Vigil",
        }
    }

    /// Whether the event used this tactic. Missing fields never match.
    pub fn applies_to(&self, event: &Event) -> bool {
        match self {
            Tactic::Demonstration => {
                field_contains_any(event.event_type.as_deref(), &["demonstration", "rally", "protest"])
            }
            Tactic::March => field_contains_any(event.event_type.as_deref(), &["march"]),
            Tactic::CounterProtest => field_contains_any(event.event_type.as_deref(), &["counter"]),
            Tactic::CivilDisobedience => {
                field_contains_any(event.event_type.as_deref(), &["disobedience"])
            }
            Tactic::Arrests => event.arrests_any == Some(true),
            Tactic::Vigil => field_contains_any(event.participant_measures.as_deref(), &["vigil"]),
        }
    }
}

fn field_contains_any(field: Option<&str>, terms: &[&str]) -> bool {
    field.is_some_and(|f| {
        let lower = f.to_lowercase();
        terms.iter().any(|t| lower.contains(t))
    })
}

/// All tactics the event used, in [`Tactic::ALL`] order.
pub fn classify_tactics(event: &Event) -> Vec<Tactic> {
    Tactic::ALL
        .iter()
        .copied()
        .filter(|t| t.applies_to(event))
        .collect()
}
