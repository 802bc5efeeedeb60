//! Crowdtag Tagging: keyword-driven labelling of protest events.
//!
//! Splits claims into atomic claims, evaluates a declarative rule table
//! against each event, decides left-leaning membership, and resolves
//! conflicts between the actor tags. Tactic, coarse category, and
//! claim-orientation tagging follow the same keyword approach.

pub mod actor;
pub mod category;
pub mod classify;
pub mod leaning;
pub mod orientation;
pub mod resolve;
pub mod rules;
pub mod tactics;
pub mod tag;
pub mod tokenize;

pub use actor::targets_actor;
pub use category::{categorize, CoarseCategory};
pub use classify::Classifier;
pub use leaning::{Assessment, LeaningDecision, LeaningFilter, LeaningSource};
pub use orientation::{orient, ClaimOrientation, OrientationBucket};
pub use resolve::{AugmentRule, ConflictResolver, DemoteRule, Resolution};
pub use rules::{EventText, Matcher, RuleTable, TagRule, STANDARD_RULES_VERSION};
pub use tactics::{classify_tactics, Tactic};
pub use tag::{Tag, TagSet};
pub use tokenize::split_claims;
