//! Protest event records as handed over by the loading layer.
//!
//! Every field is optional. Deserialisation is lenient: a value of the wrong
//! shape degrades to `None` instead of rejecting the whole record, so a
//! single malformed cell never aborts a batch.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Date formats accepted for the `date` column, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Externally supplied left/not-left classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Valence {
    /// Coded `1`: known left-leaning.
    Left,
    /// Coded `2`: known not left-leaning.
    NotLeft,
}

impl Valence {
    /// Map the numeric dataset code to a valence. Other codes are unknown.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Left),
            2 => Some(Self::NotLeft),
            _ => None,
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left)
    }
}

/// One reported protest event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Raw calendar date; see [`Event::parsed_date`].
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub locality: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub event_type: Option<String>,
    /// Semicolon-delimited claims.
    #[serde(default, deserialize_with = "lenient_text")]
    pub claims_summary: Option<String>,
    /// Actors the event is directed against.
    #[serde(default, deserialize_with = "lenient_text")]
    pub targets: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub participant_measures: Option<String>,
    /// Mean participant estimate. Negative or non-finite values read as absent.
    #[serde(default, deserialize_with = "lenient_size")]
    pub size_mean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_valence")]
    pub valence: Option<Valence>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub arrests_any: Option<bool>,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn with_claims(mut self, claims: impl Into<String>) -> Self {
        self.claims_summary = Some(claims.into());
        self
    }

    pub fn with_targets(mut self, targets: impl Into<String>) -> Self {
        self.targets = Some(targets.into());
        self
    }

    pub fn with_participant_measures(mut self, measures: impl Into<String>) -> Self {
        self.participant_measures = Some(measures.into());
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size_mean = Some(size);
        self
    }

    pub fn with_valence(mut self, valence: Valence) -> Self {
        self.valence = Some(valence);
        self
    }

    pub fn with_arrests(mut self, arrests: bool) -> Self {
        self.arrests_any = Some(arrests);
        self
    }

    /// Claims text, if present.
    pub fn claims(&self) -> Option<&str> {
        self.claims_summary.as_deref()
    }

    /// Targets text, if present.
    pub fn targets(&self) -> Option<&str> {
        self.targets.as_deref()
    }

    /// Parse the raw date. Unparsable or absent dates yield `None`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        // Timestamps such as "2025-02-17T00:00:00" keep only the date part.
        let raw = raw.split(['T', ' ']).next().unwrap_or(raw);
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    }

    /// Participant estimate with `default` substituted when missing.
    pub fn size_or(&self, default: f64) -> f64 {
        self.size_mean.unwrap_or(default)
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn lenient_size<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value).filter(|n| n.is_finite() && *n >= 0.0))
}

fn lenient_valence<'de, D>(deserializer: D) -> Result<Option<Valence>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Value::String(s) = &value {
        match s.trim() {
            "left" => return Ok(Some(Valence::Left)),
            "not_left" => return Ok(Some(Valence::NotLeft)),
            _ => {}
        }
    }
    Ok(number_of(&value)
        .filter(|n| n.fract() == 0.0)
        .and_then(|n| Valence::from_code(n as i64)))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        other => number_of(other).map(|n| n != 0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_deserialize() {
        let event: Event = serde_json::from_str(
            r#"{
                "date": "2025-02-17",
                "claims_summary": "for democracy; against Trump",
                "targets": 42,
                "size_mean": "150",
                "valence": 1.0,
                "arrests_any": 0
            }"#,
        )
        .unwrap();
        assert_eq!(event.claims(), Some("for democracy; against Trump"));
        assert_eq!(event.targets(), None);
        assert_eq!(event.size_mean, Some(150.0));
        assert_eq!(event.valence, Some(Valence::Left));
        assert_eq!(event.arrests_any, Some(false));
    }

    #[test]
    fn test_unknown_valence_codes() {
        let event: Event = serde_json::from_str(r#"{"valence": 0}"#).unwrap();
        assert_eq!(event.valence, None);
        let event: Event = serde_json::from_str(r#"{"valence": "2"}"#).unwrap();
        assert_eq!(event.valence, Some(Valence::NotLeft));
        let event: Event = serde_json::from_str(r#"{"valence": null}"#).unwrap();
        assert_eq!(event.valence, None);
    }

    #[test]
    fn test_negative_size_is_absent() {
        let event: Event = serde_json::from_str(r#"{"size_mean": -5}"#).unwrap();
        assert_eq!(event.size_mean, None);
        assert_eq!(event.size_or(11.0), 11.0);
    }

    #[test]
    fn test_parsed_date() {
        let iso = Event::new().with_date("2025-01-21");
        assert_eq!(iso.parsed_date(), NaiveDate::from_ymd_opt(2025, 1, 21));

        let us = Event::new().with_date("03/08/2025");
        assert_eq!(us.parsed_date(), NaiveDate::from_ymd_opt(2025, 3, 8));

        let stamped = Event::new().with_date("2025-04-05T00:00:00");
        assert_eq!(stamped.parsed_date(), NaiveDate::from_ymd_opt(2025, 4, 5));

        assert_eq!(Event::new().with_date("sometime in spring").parsed_date(), None);
        assert_eq!(Event::new().parsed_date(), None);
    }

    #[test]
    fn test_valence_codes() {
        assert_eq!(Valence::from_code(1), Some(Valence::Left));
        assert_eq!(Valence::from_code(2), Some(Valence::NotLeft));
        assert_eq!(Valence::from_code(3), None);
        assert!(!Valence::NotLeft.is_left());
    }
}
