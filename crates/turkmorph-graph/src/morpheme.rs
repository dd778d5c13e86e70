// Morpheme identities.

use std::fmt;

/// Index of a morpheme in its graph's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MorphemeId(pub(crate) u16);

impl MorphemeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Grammatical category of a morpheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphemeCategory {
    /// Root category marker (Noun, Verb, ...).
    PartOfSpeech,
    Agreement,
    Possession,
    Case,
    Polarity,
    TenseAspectMood,
    /// Changes the category of the word: Dim, Ness, Inf1, ...
    Derivation,
}

/// An abstract grammatical unit, shared by every transition that realizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Short identity used in analyses, e.g. `P1sg`.
    pub id: &'static str,
    /// Human-readable name, e.g. `First person singular possessive`.
    pub name: &'static str,
    pub category: MorphemeCategory,
}

impl Morpheme {
    pub const fn new(id: &'static str, name: &'static str, category: MorphemeCategory) -> Self {
        Self { id, name, category }
    }

    pub fn is_derivational(&self) -> bool {
        self.category == MorphemeCategory::Derivation
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}
