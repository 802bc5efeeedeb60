//! Claim tokenizer: splits a claims summary into atomic claims.

/// Placeholder the dataset uses for events with no recorded claims.
pub const UNKNOWN_CLAIMS: &str = "Unknown";

/// Split a semicolon-delimited claims string into trimmed, non-empty claims.
///
/// Absent input and the `Unknown` placeholder produce no claims.
pub fn split_claims(text: Option<&str>) -> Vec<&str> {
    let Some(text) = text else {
        return Vec::new();
    };
    if text.trim() == UNKNOWN_CLAIMS {
        return Vec::new();
    }
    text.split(';')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_order() {
        let claims = split_claims(Some("for democracy; against Trump ;  for climate action"));
        assert_eq!(claims, vec!["for democracy", "against Trump", "for climate action"]);
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(split_claims(Some("a;; ;b;")), vec!["a", "b"]);
        assert!(split_claims(Some("   ")).is_empty());
    }

    #[test]
    fn test_absent_and_unknown() {
        assert!(split_claims(None).is_empty());
        assert!(split_claims(Some("Unknown")).is_empty());
        assert!(split_claims(Some(" Unknown ")).is_empty());
    }

    #[test]
    fn test_case_kept() {
        assert_eq!(split_claims(Some("Abolish ICE")), vec!["Abolish ICE"]);
    }
}
