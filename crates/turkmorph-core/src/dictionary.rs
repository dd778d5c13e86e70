// Dictionary item types shared by the lexicon and the morphotactic graph.

use std::fmt;
use std::str::FromStr;

/// Error for unrecognized part-of-speech or attribute names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} name: {name:?}")]
pub struct NameError {
    pub kind: &'static str,
    pub name: String,
}

/// Primary morphological category of a dictionary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimaryPos {
    Noun,
    Adjective,
    Verb,
    Adverb,
    Conjunction,
    Interjection,
    PostPositive,
    Determiner,
}

impl PrimaryPos {
    pub const ALL: [PrimaryPos; 8] = [
        Self::Noun,
        Self::Adjective,
        Self::Verb,
        Self::Adverb,
        Self::Conjunction,
        Self::Interjection,
        Self::PostPositive,
        Self::Determiner,
    ];

    /// Short name used in item ids and dictionary annotations.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Adjective => "Adj",
            Self::Verb => "Verb",
            Self::Adverb => "Adv",
            Self::Conjunction => "Conj",
            Self::Interjection => "Interj",
            Self::PostPositive => "Postp",
            Self::Determiner => "Det",
        }
    }

    /// Closed classes take no suffixes at all.
    pub fn is_uninflected(self) -> bool {
        !matches!(self, Self::Noun | Self::Adjective | Self::Verb)
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for PrimaryPos {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| NameError {
                kind: "part of speech",
                name: s.to_string(),
            })
    }
}

/// Lexical attributes that override default phonological or morphotactic
/// behavior of a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RootAttribute {
    /// Final stop voices before a vowel: kitap -> kitabı.
    Voicing,
    /// Blocks automatic voicing inference: top -> topu.
    NoVoicing,
    /// Suffix vowels harmonize as front despite a back last vowel: saat -> saati.
    InverseHarmony,
    /// Final consonant doubles before a vowel: hak -> hakkı.
    Doubling,
    /// Last vowel drops before a vowel: ağız -> ağzı.
    LastVowelDrop,
    /// Final vowel drops before the progressive suffix: başla -> başlıyor.
    ProgressiveVowelDrop,
    /// Aorist with -Ar: gitmek -> gider.
    AoristA,
    /// Aorist with -Ir: gelmek -> gelir.
    AoristI,
    /// The bare root also reads as dative: içeri.
    ImplicitDative,
    /// The bare root is already plural.
    ImplicitPlural,
}

impl RootAttribute {
    pub const ALL: [RootAttribute; 10] = [
        Self::Voicing,
        Self::NoVoicing,
        Self::InverseHarmony,
        Self::Doubling,
        Self::LastVowelDrop,
        Self::ProgressiveVowelDrop,
        Self::AoristA,
        Self::AoristI,
        Self::ImplicitDative,
        Self::ImplicitPlural,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Voicing => "Voicing",
            Self::NoVoicing => "NoVoicing",
            Self::InverseHarmony => "InverseHarmony",
            Self::Doubling => "Doubling",
            Self::LastVowelDrop => "LastVowelDrop",
            Self::ProgressiveVowelDrop => "ProgressiveVowelDrop",
            Self::AoristA => "Aorist_A",
            Self::AoristI => "Aorist_I",
            Self::ImplicitDative => "ImplicitDative",
            Self::ImplicitPlural => "ImplicitPlural",
        }
    }

    /// Attributes that produce a second, modified stem surface.
    pub fn modifies_stem(self) -> bool {
        matches!(self, Self::Voicing | Self::Doubling | Self::LastVowelDrop)
    }

    const fn bit(self) -> u16 {
        1 << self as u8
    }
}

impl FromStr for RootAttribute {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| NameError {
                kind: "root attribute",
                name: s.to_string(),
            })
    }
}

/// A set of root attributes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RootAttributes(u16);

impl RootAttributes {
    pub const EMPTY: RootAttributes = RootAttributes(0);

    pub fn contains(self, attribute: RootAttribute) -> bool {
        self.0 & attribute.bit() != 0
    }

    pub fn insert(&mut self, attribute: RootAttribute) {
        self.0 |= attribute.bit();
    }

    pub fn remove(&mut self, attribute: RootAttribute) {
        self.0 &= !attribute.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = RootAttribute> {
        RootAttribute::ALL
            .into_iter()
            .filter(move |&a| self.contains(a))
    }

    /// Whether any attribute produces a modified stem surface.
    pub fn modifies_stem(self) -> bool {
        self.iter().any(RootAttribute::modifies_stem)
    }
}

impl FromIterator<RootAttribute> for RootAttributes {
    fn from_iter<T: IntoIterator<Item = RootAttribute>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for a in iter {
            set.insert(a);
        }
        set
    }
}

impl fmt::Debug for RootAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(RootAttribute::name)).finish()
    }
}

/// Which form of a root a stem surface represents. Selects the initial
/// morphotactic state of a search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemKind {
    Regular,
    /// Verb stem without its final vowel, only valid before the progressive.
    ProgressiveDrop,
}

/// An immutable dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryItem {
    /// Stable identity, e.g. `elma_Noun`.
    pub id: String,
    /// Canonical citation form, e.g. `gitmek`.
    pub lemma: String,
    /// Form used as the search key, e.g. `git`.
    pub root: String,
    pub pos: PrimaryPos,
    pub attributes: RootAttributes,
}

impl DictionaryItem {
    pub fn new(
        lemma: impl Into<String>,
        root: impl Into<String>,
        pos: PrimaryPos,
        attributes: RootAttributes,
    ) -> Self {
        let lemma = lemma.into();
        Self {
            id: format!("{lemma}_{}", pos.short_name()),
            lemma,
            root: root.into(),
            pos,
            attributes,
        }
    }

    /// Distinguish homographs by appending an index to the id.
    #[must_use]
    pub fn with_index(mut self, index: u32) -> Self {
        self.id = format!("{}_{}_{index}", self.lemma, self.pos.short_name());
        self
    }

    pub fn has_attribute(&self, attribute: RootAttribute) -> bool {
        self.attributes.contains(attribute)
    }
}

impl fmt::Display for DictionaryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lemma, self.pos)
    }
}
