// Stem surfaces of a dictionary item.

use turkmorph_core::phonetics::calculate;
use turkmorph_core::{
    AttributeSet, DictionaryItem, PhoneticAttribute, PrimaryPos, RootAttribute, StemKind,
    alphabet,
};

/// One indexed surface form of a dictionary item's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemVariant {
    pub surface: String,
    pub attributes: AttributeSet,
    pub kind: StemKind,
}

impl StemVariant {
    fn new(surface: String, attributes: AttributeSet, kind: StemKind) -> Self {
        Self {
            surface,
            attributes,
            kind,
        }
    }
}

/// Every surface the root of `item` can appear as.
///
/// A root with a modifying attribute yields its unmodified surface, which
/// must be followed by a consonant, and its modified surface, which must be
/// followed by a vowel. A vowel-dropping verb also yields its truncated
/// progressive stem.
pub fn stem_variants(item: &DictionaryItem) -> Vec<StemVariant> {
    let root = item.root.as_str();
    let attrs = |surface: &str| {
        let a = calculate(surface, AttributeSet::EMPTY);
        if item.has_attribute(RootAttribute::InverseHarmony) {
            a.with_front_harmony()
        } else {
            a
        }
    };

    let mut variants = Vec::with_capacity(2);
    match modified_root(item).filter(|m| m != root) {
        Some(modified) => {
            variants.push(StemVariant::new(
                root.to_string(),
                attrs(root).with(PhoneticAttribute::ExpectsConsonant),
                StemKind::Regular,
            ));
            let a = attrs(&modified).with(PhoneticAttribute::ExpectsVowel);
            variants.push(StemVariant::new(modified, a, StemKind::Regular));
        }
        None => variants.push(StemVariant::new(root.to_string(), attrs(root), StemKind::Regular)),
    }

    if item.pos == PrimaryPos::Verb && item.has_attribute(RootAttribute::ProgressiveVowelDrop) {
        let mut chars = root.chars();
        if chars.next_back().is_some_and(alphabet::is_vowel) && !chars.as_str().is_empty() {
            let dropped = chars.as_str().to_string();
            let a = attrs(&dropped);
            variants.push(StemVariant::new(dropped, a, StemKind::ProgressiveDrop));
        }
    }

    variants
}

/// Apply vowel drop, voicing and doubling, in that order.
fn modified_root(item: &DictionaryItem) -> Option<String> {
    if !item.attributes.modifies_stem() {
        return None;
    }
    let mut letters: Vec<char> = item.root.chars().collect();

    if item.has_attribute(RootAttribute::LastVowelDrop) && letters.len() >= 3 {
        let i = letters.len() - 2;
        if alphabet::is_vowel(letters[i]) {
            letters.remove(i);
        }
    }
    if item.has_attribute(RootAttribute::Voicing) {
        if let Some(&last) = letters.last() {
            let previous = letters.len().checked_sub(2).map(|i| letters[i]);
            if let Some(voiced) = alphabet::voice(last, previous) {
                let n = letters.len();
                letters[n - 1] = voiced;
            }
        }
    }
    if item.has_attribute(RootAttribute::Doubling) {
        if let Some(&last) = letters.last() {
            letters.push(last);
        }
    }

    Some(letters.into_iter().collect())
}
