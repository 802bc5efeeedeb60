//! Crowdtag Runtime: batch orchestration.
//!
//! Runs a fully materialized event batch through the left-leaning filter,
//! the classifier, the conflict resolver and the aggregators, producing one
//! serializable [`RunReport`].

pub mod orchestrator;
pub mod types;

pub use orchestrator::Orchestrator;
pub use types::*;
