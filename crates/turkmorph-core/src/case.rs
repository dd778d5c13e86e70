// Turkish-aware lowercasing and letter folding.
//
// Turkish distinguishes dotted and dotless i in both cases: `I` lowercases
// to `ı` and `İ` lowercases to `i`. The standard library maps `I` to `i`
// and `İ` to "i̇" (two chars), so both need special handling.

use crate::alphabet;

/// Lowercase a single character using Turkish rules.
pub fn lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',
        '\u{0130}' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Matching form of a letter: Turkish lowercase with circumflexes dropped.
/// Always one char for one char, so offsets in a folded word line up with
/// char boundaries of the original.
pub fn fold(c: char) -> char {
    alphabet::strip_circumflex(lower(c))
}
