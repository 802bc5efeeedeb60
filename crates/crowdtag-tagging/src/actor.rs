//! Detection of events whose targets name the catch-all actor.

use once_cell::sync::Lazy;
use regex::Regex;

// Covers "Trump", "Donald Trump", "President Trump", "former president
// Trump", plus the "45" and "DJT" shorthands.
static ACTOR_TARGET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)trump|\b45\b|\bdjt\b").unwrap());

/// Whether a targets text mentions the catch-all actor. Absent text never does.
pub fn targets_actor(targets: Option<&str>) -> bool {
    targets.is_some_and(|t| ACTOR_TARGET_RE.is_match(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_variants() {
        assert!(targets_actor(Some("Donald Trump")));
        assert!(targets_actor(Some("former president TRUMP")));
        assert!(targets_actor(Some("DJT; Congress")));
        assert!(targets_actor(Some("45")));
    }

    #[test]
    fn test_non_matches() {
        assert!(!targets_actor(Some("Route 450 toll authority")));
        assert!(!targets_actor(Some("city council")));
        assert!(!targets_actor(None));
    }
}
