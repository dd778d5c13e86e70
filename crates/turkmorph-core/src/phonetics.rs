// Phonetic attributes of a (partial) word surface.
//
// A morpheme boundary is described by the attributes of everything to its
// left: what the last letter is, what the last vowel looks like, and which
// kind of letter the next suffix has to start with. Attributes are kept in a
// small bitset so they can be copied freely along a search path.

use std::fmt;

use crate::alphabet;

/// A single phonological property of a surface string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PhoneticAttribute {
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
    LastLetterVoiced,
    LastLetterVoicelessStop,
    FirstLetterVowel,
    FirstLetterConsonant,
    HasNoVowel,
    /// The next non-empty suffix must start with a vowel, and the word may
    /// not end here. Set on voiced, doubled or elided stems.
    ExpectsVowel,
    /// The next non-empty suffix must start with a consonant. Set on the
    /// unmodified form of stems that alternate.
    ExpectsConsonant,
}

impl PhoneticAttribute {
    pub const ALL: [PhoneticAttribute; 14] = [
        Self::LastLetterVowel,
        Self::LastLetterConsonant,
        Self::LastVowelFrontal,
        Self::LastVowelBack,
        Self::LastVowelRounded,
        Self::LastVowelUnrounded,
        Self::LastLetterVoiceless,
        Self::LastLetterVoiced,
        Self::LastLetterVoicelessStop,
        Self::FirstLetterVowel,
        Self::FirstLetterConsonant,
        Self::HasNoVowel,
        Self::ExpectsVowel,
        Self::ExpectsConsonant,
    ];

    const fn bit(self) -> u16 {
        1 << self as u8
    }
}

/// A set of phonetic attributes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttributeSet(u16);

impl AttributeSet {
    pub const EMPTY: AttributeSet = AttributeSet(0);

    pub fn of(attributes: &[PhoneticAttribute]) -> Self {
        let mut set = Self::EMPTY;
        for &a in attributes {
            set.insert(a);
        }
        set
    }

    #[inline]
    pub fn contains(self, attribute: PhoneticAttribute) -> bool {
        self.0 & attribute.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, attribute: PhoneticAttribute) {
        self.0 |= attribute.bit();
    }

    #[inline]
    pub fn remove(&mut self, attribute: PhoneticAttribute) {
        self.0 &= !attribute.bit();
    }

    #[must_use]
    pub fn with(mut self, attribute: PhoneticAttribute) -> Self {
        self.insert(attribute);
        self
    }

    #[must_use]
    pub fn without(mut self, attribute: PhoneticAttribute) -> Self {
        self.remove(attribute);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = PhoneticAttribute> {
        PhoneticAttribute::ALL
            .into_iter()
            .filter(move |&a| self.contains(a))
    }

    /// Whether the last vowel to the left is a back vowel. Words without
    /// vowels harmonize as front ("tv'ye").
    pub fn back_harmony(self) -> bool {
        self.contains(PhoneticAttribute::LastVowelBack)
    }

    pub fn rounded_harmony(self) -> bool {
        self.contains(PhoneticAttribute::LastVowelRounded)
    }

    /// Flip the vowel attributes to front, used for roots with inverse
    /// harmony ("saat" -> "saati").
    #[must_use]
    pub fn with_front_harmony(self) -> Self {
        self.without(PhoneticAttribute::LastVowelBack)
            .with(PhoneticAttribute::LastVowelFrontal)
    }

    /// The expectation flags only, which survive empty surfaces.
    pub fn expectations(self) -> Self {
        let mut out = Self::EMPTY;
        for a in [PhoneticAttribute::ExpectsVowel, PhoneticAttribute::ExpectsConsonant] {
            if self.contains(a) {
                out.insert(a);
            }
        }
        out
    }
}

impl fmt::Debug for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Compute the attributes of `surface` appended to a predecessor with
/// attributes `predecessor`.
///
/// Letter attributes come from `surface` alone. Vowel attributes come from
/// the last vowel of `surface`; if it has none, they are inherited from the
/// predecessor. Expectations are never inherited: a non-empty surface
/// satisfies (or has already violated) them. An empty surface returns the
/// predecessor unchanged.
pub fn calculate(surface: &str, predecessor: AttributeSet) -> AttributeSet {
    use PhoneticAttribute::*;

    let (Some(first), Some(last)) = (surface.chars().next(), surface.chars().next_back()) else {
        return predecessor;
    };

    let mut attrs = AttributeSet::EMPTY;

    if alphabet::is_vowel(first) {
        attrs.insert(FirstLetterVowel);
    } else {
        attrs.insert(FirstLetterConsonant);
    }

    if alphabet::is_vowel(last) {
        attrs.insert(LastLetterVowel);
        attrs.insert(LastLetterVoiced);
    } else {
        attrs.insert(LastLetterConsonant);
        if alphabet::is_voiceless(last) {
            attrs.insert(LastLetterVoiceless);
            if alphabet::is_voiceless_stop(last) {
                attrs.insert(LastLetterVoicelessStop);
            }
        } else {
            attrs.insert(LastLetterVoiced);
        }
    }

    match alphabet::last_vowel(surface) {
        Some(v) => {
            attrs.insert(if alphabet::is_back_vowel(v) { LastVowelBack } else { LastVowelFrontal });
            attrs.insert(if alphabet::is_rounded_vowel(v) {
                LastVowelRounded
            } else {
                LastVowelUnrounded
            });
        }
        None => {
            let inherited = [LastVowelBack, LastVowelFrontal, LastVowelRounded, LastVowelUnrounded];
            let mut any = false;
            for a in inherited {
                if predecessor.contains(a) {
                    attrs.insert(a);
                    any = true;
                }
            }
            if !any {
                attrs.insert(HasNoVowel);
            }
        }
    }

    attrs
}
