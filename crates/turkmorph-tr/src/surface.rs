// Phonetic rule engine: realizes suffix templates as letters.
//
// Both functions are pure. `materialize` decides what a transition looks
// like after a left context; `follow` computes the left context for the
// next transition.

use turkmorph_core::phonetics;
use turkmorph_core::{AttributeSet, PhoneticAttribute, alphabet};
use turkmorph_graph::{HarmonyVowel, MorphemeTransition, TailForm, Token};

/// Running phonological state while a template is spelled out.
#[derive(Clone, Copy)]
struct Boundary {
    vowel_final: bool,
    voiceless_final: bool,
    back: bool,
    rounded: bool,
}

impl Boundary {
    fn new(attrs: AttributeSet) -> Self {
        Self {
            vowel_final: attrs.contains(PhoneticAttribute::LastLetterVowel),
            voiceless_final: attrs.contains(PhoneticAttribute::LastLetterVoiceless),
            back: attrs.back_harmony(),
            rounded: attrs.rounded_harmony(),
        }
    }

    fn push(&mut self, out: &mut String, c: char) {
        out.push(c);
        self.vowel_final = alphabet::is_vowel(c);
        self.voiceless_final = alphabet::is_voiceless(c);
        if self.vowel_final {
            self.back = alphabet::is_back_vowel(c);
            self.rounded = alphabet::is_rounded_vowel(c);
        }
    }

    fn harmonize(&self, vowel: HarmonyVowel) -> char {
        match (vowel, self.back, self.rounded) {
            (HarmonyVowel::TwoWay, true, _) => 'a',
            (HarmonyVowel::TwoWay, false, _) => 'e',
            (HarmonyVowel::FourWay, true, false) => alphabet::DOTLESS_I,
            (HarmonyVowel::FourWay, true, true) => 'u',
            (HarmonyVowel::FourWay, false, false) => 'i',
            (HarmonyVowel::FourWay, false, true) => alphabet::U_UMLAUT,
        }
    }
}

/// Spell out `transition` after a left context with attributes `attrs`.
///
/// Returns `None` when the result would violate an expectation of the left
/// context: a voiced or elided stem followed by a consonant, or an
/// unmodified alternating stem followed by a vowel. An empty surface never
/// violates an expectation; the expectation carries over instead.
pub fn materialize(attrs: AttributeSet, transition: &MorphemeTransition) -> Option<String> {
    let mut out = String::new();
    let mut boundary = Boundary::new(attrs);

    for &token in transition.template.tokens() {
        match token {
            Token::Letter(c) => boundary.push(&mut out, c),
            Token::Harmony(v) => {
                let c = boundary.harmonize(v);
                boundary.push(&mut out, c);
            }
            Token::AppendConsonant(c) => {
                if boundary.vowel_final {
                    boundary.push(&mut out, c);
                }
            }
            Token::AppendVowel(v) => {
                if !boundary.vowel_final {
                    let c = boundary.harmonize(v);
                    boundary.push(&mut out, c);
                }
            }
            Token::Devoicing(c) => {
                let c = if boundary.voiceless_final {
                    alphabet::devoice(c).unwrap_or(c)
                } else {
                    c
                };
                boundary.push(&mut out, c);
            }
            Token::VoicingTail(c) => {
                let c = match transition.tail {
                    TailForm::Voiced => alphabet::voice(c, out.chars().last()).unwrap_or(c),
                    TailForm::Plain | TailForm::Fixed => c,
                };
                boundary.push(&mut out, c);
            }
        }
    }

    if let Some(first) = out.chars().next() {
        let vowel = alphabet::is_vowel(first);
        if attrs.contains(PhoneticAttribute::ExpectsVowel) && !vowel {
            return None;
        }
        if attrs.contains(PhoneticAttribute::ExpectsConsonant) && vowel {
            return None;
        }
    }
    Some(out)
}

/// Attributes of the left context after `transition` produced `surface`.
pub fn follow(attrs: AttributeSet, transition: &MorphemeTransition, surface: &str) -> AttributeSet {
    let next = phonetics::calculate(surface, attrs);
    match transition.tail {
        TailForm::Fixed => next,
        TailForm::Plain => next.with(PhoneticAttribute::ExpectsConsonant),
        TailForm::Voiced => next.with(PhoneticAttribute::ExpectsVowel),
    }
}
