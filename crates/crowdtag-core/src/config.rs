//! Engine configuration: imputation default, inclusion window, negation terms.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Participant count substituted for events without a size estimate.
pub const DEFAULT_SIZE: f64 = 11.0;
pub const DEFAULT_TOP_CLAIMS: usize = 5;
pub const DEFAULT_TOP_STATES: usize = 10;
pub const DEFAULT_TOP_OVERVIEW: usize = 10;
pub const DEFAULT_TOP_ACTOR_CLAIMS: usize = 10;
/// Most frequent atomic claims forming the co-occurrence network.
pub const DEFAULT_NETWORK_CLAIMS: usize = 20;

/// Inclusive calendar window for the filtered left-leaning dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    /// Whether `date` falls inside the window. Absent dates never do.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|d| d >= self.start && d <= self.end)
    }

    fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(Error::Config(format!(
                "date window start {} is after end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

/// Terms that turn an otherwise matching claim into an exclusion.
///
/// A claims text containing `trigger` together with any of `subjects`
/// ("against abortion") is never classified left-leaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegationConfig {
    #[serde(default = "default_trigger")]
    pub trigger: String,
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,
}

fn default_trigger() -> String {
    "against".into()
}

fn default_subjects() -> Vec<String> {
    [
        "abortion",
        "pro-choice",
        "reproductive rights",
        "lgbt",
        "gay",
        "transgender",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for NegationConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            subjects: default_subjects(),
        }
    }
}

/// Ranked claims kept per orientation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationLimits {
    #[serde(default = "default_wide_bucket")]
    pub anti_actor: usize,
    #[serde(default = "default_wide_bucket")]
    pub left_only: usize,
    #[serde(default = "default_narrow_bucket")]
    pub right_only: usize,
    #[serde(default = "default_narrow_bucket")]
    pub ambiguous: usize,
}

fn default_wide_bucket() -> usize {
    50
}

fn default_narrow_bucket() -> usize {
    20
}

impl Default for OrientationLimits {
    fn default() -> Self {
        Self {
            anti_actor: default_wide_bucket(),
            left_only: default_wide_bucket(),
            right_only: default_narrow_bucket(),
            ambiguous: default_narrow_bucket(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_size")]
    pub default_size: f64,
    #[serde(default)]
    pub window: DateWindow,
    #[serde(default = "default_top_claims")]
    pub top_claims_per_tag: usize,
    #[serde(default = "default_top_states")]
    pub top_states: usize,
    /// Length of each ranked list in the batch overview.
    #[serde(default = "default_top_overview")]
    pub top_overview: usize,
    #[serde(default = "default_top_actor_claims")]
    pub top_actor_claims: usize,
    #[serde(default = "default_network_claims")]
    pub network_claims: usize,
    #[serde(default)]
    pub orientation_limits: OrientationLimits,
    #[serde(default)]
    pub negation: NegationConfig,
}

fn default_size() -> f64 {
    DEFAULT_SIZE
}
fn default_top_claims() -> usize {
    DEFAULT_TOP_CLAIMS
}
fn default_top_states() -> usize {
    DEFAULT_TOP_STATES
}
fn default_top_overview() -> usize {
    DEFAULT_TOP_OVERVIEW
}
fn default_top_actor_claims() -> usize {
    DEFAULT_TOP_ACTOR_CLAIMS
}
fn default_network_claims() -> usize {
    DEFAULT_NETWORK_CLAIMS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            window: DateWindow::default(),
            top_claims_per_tag: DEFAULT_TOP_CLAIMS,
            top_states: DEFAULT_TOP_STATES,
            top_overview: DEFAULT_TOP_OVERVIEW,
            top_actor_claims: DEFAULT_TOP_ACTOR_CLAIMS,
            network_claims: DEFAULT_NETWORK_CLAIMS,
            orientation_limits: OrientationLimits::default(),
            negation: NegationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load config from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `CROWDTAG_*` environment overrides. Unparsable values are ignored.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(size) = env_parse::<f64>("CROWDTAG_DEFAULT_SIZE") {
            self.default_size = size;
        }
        if let Some(start) = env_date("CROWDTAG_WINDOW_START") {
            self.window.start = start;
        }
        if let Some(end) = env_date("CROWDTAG_WINDOW_END") {
            self.window.end = end;
        }
        if let Some(top) = env_parse::<usize>("CROWDTAG_TOP_CLAIMS") {
            self.top_claims_per_tag = top;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.default_size.is_finite() || self.default_size < 0.0 {
            return Err(Error::Config(format!(
                "default_size must be a non-negative number, got {}",
                self.default_size
            )));
        }
        if self.negation.trigger.trim().is_empty() {
            return Err(Error::Config("negation trigger is empty".into()));
        }
        self.window.validate()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring unparsable {}={:?}", key, raw);
            None
        }
    }
}

fn env_date(key: &str) -> Option<NaiveDate> {
    let raw = std::env::var(key).ok()?;
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            warn!("Ignoring unparsable {}={:?}", key, raw);
            None
        }
    }
}
