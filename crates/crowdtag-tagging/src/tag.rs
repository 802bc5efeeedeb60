//! Topical tag identifiers and a compact per-event tag set.

use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

/// A topical label assignable to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Gaza,
    Abortion,
    #[serde(rename = "lgbtplus")]
    LgbtPlus,
    Environment,
    Immigration,
    /// Head-of-state actor; the catch-all label demoted by the conflict resolver.
    Trump,
    /// Policy/budget-cuts actor.
    Musk,
    GunControl,
    Healthcare,
    Workers,
    RacialJustice,
}

impl Tag {
    /// All tags in rule-table order.
    pub const ALL: [Tag; 11] = [
        Tag::Gaza,
        Tag::Abortion,
        Tag::LgbtPlus,
        Tag::Environment,
        Tag::Immigration,
        Tag::Trump,
        Tag::Musk,
        Tag::GunControl,
        Tag::Healthcare,
        Tag::Workers,
        Tag::RacialJustice,
    ];

    /// Machine key, used for column names and JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Tag::Gaza => "gaza",
            Tag::Abortion => "abortion",
            Tag::LgbtPlus => "lgbtplus",
            Tag::Environment => "environment",
            Tag::Immigration => "immigration",
            Tag::Trump => "trump",
            Tag::Musk => "musk",
            Tag::GunControl => "gun_control",
            Tag::Healthcare => "healthcare",
            Tag::Workers => "workers",
            Tag::RacialJustice => "racial_justice",
        }
    }

    /// Canonical name for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tag::Gaza => "Gaza",
            Tag::Abortion => "Abortion",
            Tag::LgbtPlus => "LGBT+",
            Tag::Environment => "Environment",
            Tag::Immigration => "Immigration",
            Tag::Trump => "Trump",
            Tag::Musk => "Musk",
            Tag::GunControl => "Gun Control",
            Tag::Healthcare => "Healthcare",
            Tag::Workers => "Workers",
            Tag::RacialJustice => "Racial Justice",
        }
    }

    pub fn from_key(key: &str) -> Option<Tag> {
        Tag::ALL.iter().copied().find(|t| t.key() == key)
    }

    fn bit(&self) -> u16 {
        1 << (*self as u16)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Set of tags held by one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u16);

impl TagSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, tag: Tag) {
        self.0 |= tag.bit();
    }

    pub fn remove(&mut self, tag: Tag) {
        self.0 &= !tag.bit();
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Union with another set.
    pub fn union(&self, other: TagSet) -> TagSet {
        TagSet(self.0 | other.0)
    }

    /// Tags in rule-table order.
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        Tag::ALL.iter().copied().filter(|t| self.contains(*t))
    }

    /// One 0/1 flag per known tag, keyed by tag key.
    pub fn flags(&self) -> BTreeMap<&'static str, u8> {
        Tag::ALL
            .iter()
            .map(|t| (t.key(), u8::from(self.contains(*t))))
            .collect()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for tag in self.iter() {
            seq.serialize_element(&tag)?;
        }
        seq.end()
    }
}
