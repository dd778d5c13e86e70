// Turkish letter classification and consonant alternations.
//
// All functions take lowercase letters. Input words are folded with
// `case::fold` before they reach any of these predicates.

// ---------------------------------------------------------------------------
// Letter classes
// ---------------------------------------------------------------------------

/// Turkish vowels, including the circumflexed loanword vowels.
const VOWELS: &[char] = &[
    'a', 'e', '\u{0131}', 'i', 'o', '\u{00F6}', 'u', '\u{00FC}', '\u{00E2}', '\u{00EE}',
    '\u{00FB}',
];

/// Back vowels: a ı o u â û
const BACK_VOWELS: &[char] = &['a', '\u{0131}', 'o', 'u', '\u{00E2}', '\u{00FB}'];

/// Rounded vowels: o ö u ü û
const ROUNDED_VOWELS: &[char] = &['o', '\u{00F6}', 'u', '\u{00FC}', '\u{00FB}'];

/// Voiceless consonants: ç f h k p s ş t
const VOICELESS_CONSONANTS: &[char] = &['\u{00E7}', 'f', 'h', 'k', 'p', 's', '\u{015F}', 't'];

/// Voiceless stops: ç k p t
const VOICELESS_STOPS: &[char] = &['\u{00E7}', 'k', 'p', 't'];

pub const C_CEDILLA: char = '\u{00E7}';
pub const S_CEDILLA: char = '\u{015F}';
pub const SOFT_G: char = '\u{011F}';
pub const DOTLESS_I: char = '\u{0131}';
pub const O_UMLAUT: char = '\u{00F6}';
pub const U_UMLAUT: char = '\u{00FC}';

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Any Turkish letter that is not a vowel. Foreign letters (q, w, x) count
/// as consonants too, since loanwords carry them.
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

pub fn is_back_vowel(c: char) -> bool {
    BACK_VOWELS.contains(&c)
}

pub fn is_front_vowel(c: char) -> bool {
    is_vowel(c) && !is_back_vowel(c)
}

pub fn is_rounded_vowel(c: char) -> bool {
    ROUNDED_VOWELS.contains(&c)
}

pub fn is_voiceless(c: char) -> bool {
    VOICELESS_CONSONANTS.contains(&c)
}

pub fn is_voiceless_stop(c: char) -> bool {
    VOICELESS_STOPS.contains(&c)
}

/// Number of vowels in a word, which equals its syllable count in Turkish.
pub fn syllable_count(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

/// The last vowel of a word, if any.
pub fn last_vowel(word: &str) -> Option<char> {
    word.chars().rev().find(|&c| is_vowel(c))
}

// ---------------------------------------------------------------------------
// Consonant alternations
// ---------------------------------------------------------------------------

/// Voiced counterpart of a stem- or suffix-final consonant.
///
/// `previous` is the letter before `c`; after `n` a final `k` becomes `g`
/// ("renk" -> "rengi") instead of `ğ`.
pub fn voice(c: char, previous: Option<char>) -> Option<char> {
    match c {
        'p' => Some('b'),
        C_CEDILLA => Some('c'),
        't' => Some('d'),
        'k' if previous == Some('n') => Some('g'),
        'k' | 'g' => Some(SOFT_G),
        _ => None,
    }
}

/// Voiceless counterpart of a suffix-initial consonant (`c` -> `ç`, `d` -> `t`).
pub fn devoice(c: char) -> Option<char> {
    match c {
        'b' => Some('p'),
        'c' => Some(C_CEDILLA),
        'd' => Some('t'),
        'g' | SOFT_G => Some('k'),
        _ => None,
    }
}

/// Drop circumflexes from loanword vowels (â -> a, î -> i, û -> u).
pub fn strip_circumflex(c: char) -> char {
    match c {
        '\u{00E2}' => 'a',
        '\u{00EE}' => 'i',
        '\u{00FB}' => 'u',
        other => other,
    }
}
