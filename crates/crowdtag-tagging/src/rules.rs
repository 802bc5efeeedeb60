//! Declarative keyword rule table.
//!
//! Each tag has a declared keyword list (reported alongside its statistics)
//! and a [`Matcher`] that decides how those keywords are applied. Adding or
//! adjusting a category means editing data here, never classifier control
//! flow.

use std::collections::HashSet;

use crowdtag_core::{Error, Event, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::tag::Tag;

/// Version of [`RuleTable::standard`]. Bump on any keyword change.
pub const STANDARD_RULES_VERSION: u32 = 2;

/// Lower-cased view of an event's text fields, computed once per event.
#[derive(Debug, Clone)]
pub struct EventText<'a> {
    /// Claims in original case, for case-sensitive acronym checks.
    pub claims: Option<&'a str>,
    pub claims_lower: Option<String>,
    pub targets_lower: Option<String>,
}

impl<'a> EventText<'a> {
    pub fn new(claims: Option<&'a str>, targets: Option<&'a str>) -> Self {
        Self {
            claims,
            claims_lower: claims.map(str::to_lowercase),
            targets_lower: targets.map(str::to_lowercase),
        }
    }

    pub fn from_event(event: &'a Event) -> Self {
        Self::new(event.claims(), event.targets())
    }

    /// Any of `keywords` (already lower-case) occurs in the claims.
    pub fn claims_contain_any(&self, keywords: &[String]) -> bool {
        contains_any(self.claims_lower.as_deref(), keywords)
    }

    /// Any of `keywords` (already lower-case) occurs in the targets.
    pub fn targets_contain_any(&self, keywords: &[String]) -> bool {
        contains_any(self.targets_lower.as_deref(), keywords)
    }

    /// Any of `keywords` occurs in either claims or targets.
    pub fn mentions_any(&self, keywords: &[String]) -> bool {
        self.claims_contain_any(keywords) || self.targets_contain_any(keywords)
    }
}

fn contains_any(haystack: Option<&str>, keywords: &[String]) -> bool {
    match haystack {
        Some(text) => keywords.iter().any(|kw| text.contains(kw.as_str())),
        None => false,
    }
}

/// Build the standalone-token pattern for an upper-case acronym.
///
/// The acronym must be bounded on both sides by start/end of text or one of
/// space, comma, period, colon.
pub fn acronym_pattern(acronym: &str) -> Result<Regex> {
    if acronym.trim().is_empty() {
        return Err(Error::InvalidRule("acronym is empty".into()));
    }
    let pattern = format!(r"(?:^|[ ,.:]){}(?:$|[ ,.:])", regex::escape(acronym));
    Regex::new(&pattern).map_err(|e| Error::InvalidRule(format!("acronym {acronym}: {e}")))
}

/// How a tag's keywords are evaluated against an event.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Matcher {
    /// Case-insensitive substring match on claims.
    Keywords,
    /// As `Keywords`, or a match on the targets text.
    KeywordsOrTargets,
    /// Case-sensitive standalone acronym in claims, else the fallback keywords.
    Acronym {
        acronym: String,
        fallback: Vec<String>,
        #[serde(skip)]
        pattern: Regex,
    },
    /// Only `effective` keywords are applied; strictly narrower than declared.
    Narrowed { effective: Vec<String> },
}

/// One tag's rule.
#[derive(Debug, Clone, Serialize)]
pub struct TagRule {
    pub tag: Tag,
    /// Keyword list as published with the statistics.
    pub declared: Vec<String>,
    pub matcher: Matcher,
    #[serde(skip)]
    declared_lower: Vec<String>,
}

impl TagRule {
    pub fn keywords(tag: Tag, declared: &[&str]) -> Self {
        Self::with_matcher(tag, declared, Matcher::Keywords)
    }

    pub fn keywords_or_targets(tag: Tag, declared: &[&str]) -> Self {
        Self::with_matcher(tag, declared, Matcher::KeywordsOrTargets)
    }

    pub fn narrowed(tag: Tag, declared: &[&str], effective: &[&str]) -> Self {
        Self::with_matcher(
            tag,
            declared,
            Matcher::Narrowed {
                effective: lower_all(effective),
            },
        )
    }

    pub fn acronym(tag: Tag, declared: &[&str], acronym: &str, fallback: &[&str]) -> Result<Self> {
        let pattern = acronym_pattern(acronym)?;
        Ok(Self::with_matcher(
            tag,
            declared,
            Matcher::Acronym {
                acronym: acronym.to_string(),
                fallback: lower_all(fallback),
                pattern,
            },
        ))
    }

    fn with_matcher(tag: Tag, declared: &[&str], matcher: Matcher) -> Self {
        Self {
            tag,
            declared: declared.iter().map(|s| s.to_string()).collect(),
            matcher,
            declared_lower: lower_all(declared),
        }
    }

    /// Evaluate this rule against one event's text.
    pub fn matches(&self, text: &EventText<'_>) -> bool {
        match &self.matcher {
            Matcher::Keywords => text.claims_contain_any(&self.declared_lower),
            Matcher::KeywordsOrTargets => text.mentions_any(&self.declared_lower),
            Matcher::Acronym {
                fallback, pattern, ..
            } => {
                text.claims.is_some_and(|c| pattern.is_match(c))
                    || text.claims_contain_any(fallback)
            }
            Matcher::Narrowed { effective } => text.claims_contain_any(effective),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.declared.is_empty() {
            return Err(invalid(self.tag, "declared keyword list is empty"));
        }
        let declared: HashSet<&str> = self.declared_lower.iter().map(String::as_str).collect();
        match &self.matcher {
            Matcher::Keywords | Matcher::KeywordsOrTargets => Ok(()),
            Matcher::Acronym {
                acronym, fallback, ..
            } => {
                if !self.declared.iter().any(|d| d == acronym) {
                    return Err(invalid(self.tag, "acronym is not a declared keyword"));
                }
                if let Some(extra) = fallback.iter().find(|f| !declared.contains(f.as_str())) {
                    return Err(invalid(
                        self.tag,
                        &format!("fallback keyword {extra:?} is not declared"),
                    ));
                }
                Ok(())
            }
            Matcher::Narrowed { effective } => {
                if effective.is_empty() {
                    return Err(invalid(self.tag, "effective keyword list is empty"));
                }
                if let Some(extra) = effective.iter().find(|e| !declared.contains(e.as_str())) {
                    return Err(invalid(
                        self.tag,
                        &format!("effective keyword {extra:?} is not declared"),
                    ));
                }
                let distinct: HashSet<&str> = effective.iter().map(String::as_str).collect();
                if distinct.len() >= declared.len() {
                    return Err(invalid(
                        self.tag,
                        "effective keywords must be narrower than declared",
                    ));
                }
                Ok(())
            }
        }
    }
}

fn lower_all(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn invalid(tag: Tag, msg: &str) -> Error {
    Error::InvalidRule(format!("{}: {}", tag.key(), msg))
}

/// Versioned, validated set of tag rules, one per [`Tag`], in table order.
#[derive(Debug, Clone, Serialize)]
pub struct RuleTable {
    pub version: u32,
    pub rules: Vec<TagRule>,
}

static STANDARD: Lazy<RuleTable> = Lazy::new(|| {
    standard_rules()
        .and_then(|rules| RuleTable::new(STANDARD_RULES_VERSION, rules))
        .expect("standard rule table is valid")
});

impl RuleTable {
    /// Validate and build a rule table. Every tag must appear exactly once.
    pub fn new(version: u32, rules: Vec<TagRule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.tag) {
                return Err(invalid(rule.tag, "tag has more than one rule"));
            }
            rule.validate()?;
        }
        if let Some(missing) = Tag::ALL.iter().find(|t| !seen.contains(*t)) {
            return Err(invalid(*missing, "tag has no rule"));
        }
        Ok(Self { version, rules })
    }

    /// The built-in table.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    pub fn rule(&self, tag: Tag) -> Option<&TagRule> {
        self.rules.iter().find(|r| r.tag == tag)
    }

    /// Declared keywords for a tag, empty if the tag has no rule.
    pub fn declared(&self, tag: Tag) -> &[String] {
        self.rule(tag).map(|r| r.declared.as_slice()).unwrap_or(&[])
    }
}

fn standard_rules() -> Result<Vec<TagRule>> {
    let immigration = TagRule::acronym(
        Tag::Immigration,
        &[
            "immigration",
            "immigrant",
            "ICE",
            "border",
            "migrant",
            "refugee",
            "asylum",
            "deportation",
        ],
        "ICE",
        &[
            "immigration",
            "immigrant",
            "border",
            "migrant",
            "refugee",
            "asylum",
            "deportation",
        ],
    )?;

    Ok(vec![
        TagRule::narrowed(
            Tag::Gaza,
            &[
                "gaza",
                "palestinian",
                "palestine",
                "israel",
                "ceasefire",
                "cease-fire",
                "genocide",
            ],
            &["gaza", "palestinian", "palestine", "israel"],
        ),
        TagRule::keywords(
            Tag::Abortion,
            &["abortion", "reproductive rights", "pro-choice", "women's rights"],
        ),
        TagRule::keywords(
            Tag::LgbtPlus,
            &["lgbt", "lgbtq", "gay", "trans", "transgender", "queer"],
        ),
        TagRule::keywords(
            Tag::Environment,
            &["climate", "environment", "green", "fossil fuel", "pollution"],
        ),
        immigration,
        TagRule::keywords_or_targets(Tag::Trump, &["trump", "president trump", "donald trump"]),
        TagRule::keywords_or_targets(
            Tag::Musk,
            &["musk", "elon musk", "doge", "department of government efficiency"],
        ),
        TagRule::keywords(
            Tag::GunControl,
            &["gun", "firearm", "nra", "second amendment"],
        ),
        TagRule::keywords(
            Tag::Healthcare,
            &["healthcare", "health care", "medicare", "medicaid", "universal health"],
        ),
        TagRule::keywords(
            Tag::Workers,
            &["worker", "labor", "union", "wage", "strike", "fair pay"],
        ),
        TagRule::keywords(
            Tag::RacialJustice,
            &["racial justice", "black lives", "blm", "police brutality", "racism"],
        ),
    ])
}
