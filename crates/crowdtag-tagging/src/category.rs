//! Coarse claim category: a single, mutually exclusive label per event.
//!
//! The first category in table order whose keywords occur in the claims
//! wins; events matching none fall into `Other`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoarseCategory {
    Trump,
    Women,
    Palestine,
    Climate,
    Lgbtq,
    Immigration,
    RacialJustice,
    Labor,
    Other,
}

/// Ordered first-match table.
const CATEGORY_TABLE: &[(CoarseCategory, &[&str])] = &[
    (CoarseCategory::Trump, &["trump", "president trump"]),
    (CoarseCategory::Women, &["women", "reproductive", "abortion"]),
    (CoarseCategory::Palestine, &["palestine", "gaza", "palestinian"]),
    (CoarseCategory::Climate, &["climate", "environmental"]),
    (CoarseCategory::Lgbtq, &["lgbtq", "queer", "trans"]),
    (CoarseCategory::Immigration, &["immigra", "migrant", "border"]),
    (
        CoarseCategory::RacialJustice,
        &["black lives", "racial justice", "blm"],
    ),
    (CoarseCategory::Labor, &["labor", "worker", "union", "wage"]),
];

impl CoarseCategory {
    pub const ALL: [CoarseCategory; 9] = [
        CoarseCategory::Trump,
        CoarseCategory::Women,
        CoarseCategory::Palestine,
        CoarseCategory::Climate,
        CoarseCategory::Lgbtq,
        CoarseCategory::Immigration,
        CoarseCategory::RacialJustice,
        CoarseCategory::Labor,
        CoarseCategory::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CoarseCategory::Trump => "trump",
            CoarseCategory::Women => "women",
            CoarseCategory::Palestine => "palestine",
            CoarseCategory::Climate => "climate",
            CoarseCategory::Lgbtq => "lgbtq",
            CoarseCategory::Immigration => "immigration",
            CoarseCategory::RacialJustice => "racial justice",
            CoarseCategory::Labor => "labor",
            CoarseCategory::Other => "Other",
        }
    }
}

/// Categorize a claims text. Absent claims are `Other`.
pub fn categorize(claims: Option<&str>) -> CoarseCategory {
    let Some(claims) = claims else {
        return CoarseCategory::Other;
    };
    let lower = claims.to_lowercase();
    CATEGORY_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(CoarseCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            categorize(Some("against Trump; for women's rights")),
            CoarseCategory::Trump
        );
        assert_eq!(
            categorize(Some("for immigrant workers")),
            CoarseCategory::Immigration
        );
    }

    #[test]
    fn test_other() {
        assert_eq!(categorize(Some("for public libraries")), CoarseCategory::Other);
        assert_eq!(categorize(None), CoarseCategory::Other);
    }

    #[test]
    fn test_every_category_reachable() {
        for (category, keywords) in CATEGORY_TABLE {
            assert_eq!(categorize(Some(keywords[0])), *category);
        }
    }
}
