//! Crowdtag Core: event records, engine configuration, error types.

pub mod config;
pub mod error;
pub mod event;

pub use config::{DateWindow, EngineConfig, NegationConfig, OrientationLimits};
pub use error::{Error, Result};
pub use event::{Event, Valence};
