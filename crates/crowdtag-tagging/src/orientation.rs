//! Claim-level political orientation flags.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::leaning::{LEFT_ACRONYM, LEFT_KEYWORDS};
use crate::rules::acronym_pattern;

pub const ANTI_ACTOR_KEYWORDS: &[&str] = &[
    "against trump",
    "against donald trump",
    "anti-trump",
    "anti trump",
    "trump abuse",
    "trump's abuse",
    "against president trump",
    "impeach",
    "resist",
    "resistance",
    "not my president",
];

pub const RIGHT_KEYWORDS: &[&str] = &[
    "pro-trump",
    "support trump",
    "maga",
    "america first",
    "stop the steal",
    "election fraud",
    "pro-life",
    "against abortion",
    "traditional values",
    "family values",
    "religious freedom",
    "second amendment",
    "gun rights",
    "border security",
    "illegal immigration",
    "law and order",
    "blue lives matter",
    "support police",
    "anti-socialism",
    "anti-communism",
    "lower taxes",
    "small government",
    "deregulation",
    "free market",
    "capitalism",
    "against cancel culture",
    "free speech",
    "anti-woke",
    "anti-crt",
    "parental rights",
    "school choice",
    "against mask mandates",
    "against vaccine mandates",
    "medical freedom",
    "pro-israel",
    "in solidarity with israel",
    "against antisemitism",
];

static LEFT_ACRONYM_RE: Lazy<Regex> =
    Lazy::new(|| acronym_pattern(LEFT_ACRONYM).expect("left acronym pattern compiles"));

/// Orientation flags for one atomic claim. Left and right may both hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClaimOrientation {
    pub anti_actor: bool,
    pub left: bool,
    pub right: bool,
}

/// Exclusive bucket derived from the left/right flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationBucket {
    LeftOnly,
    RightOnly,
    Ambiguous,
    Neither,
}

impl ClaimOrientation {
    pub fn bucket(&self) -> OrientationBucket {
        match (self.left, self.right) {
            (true, false) => OrientationBucket::LeftOnly,
            (false, true) => OrientationBucket::RightOnly,
            (true, true) => OrientationBucket::Ambiguous,
            (false, false) => OrientationBucket::Neither,
        }
    }
}

/// Flag a single atomic claim.
pub fn orient(claim: &str) -> ClaimOrientation {
    let lower = claim.to_lowercase();
    let any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));
    ClaimOrientation {
        anti_actor: any(ANTI_ACTOR_KEYWORDS),
        left: any(LEFT_KEYWORDS) || LEFT_ACRONYM_RE.is_match(claim),
        right: any(RIGHT_KEYWORDS),
    }
}
