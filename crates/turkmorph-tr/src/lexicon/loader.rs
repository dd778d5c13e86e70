// Text dictionary loader.
//
// One entry per line:
//
//   kitap
//   gitmek [A:Voicing, Aorist_A]
//   içeri [P:Noun; A:ImplicitDative]
//   yüz [P:Adj] [Index:2]
//
// Annotation keys are P (part of speech), A (attributes), R (root override)
// and Index (homograph index). Everything after `#` is a comment.

use std::fs;
use std::path::Path;

use turkmorph_core::{DictionaryItem, PrimaryPos, RootAttribute, RootAttributes, alphabet, case};

/// Monosyllabic verbs whose aorist is -Ir rather than -Ar.
const AORIST_I_ROOTS: &[&str] = &[
    "al", "bil", "bul", "dur", "gel", "g\u{00F6}r", "kal", "ol", "\u{00F6}l", "san", "var",
    "ver", "vur",
];

/// Error while reading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("line {line}: unknown part of speech {name:?}")]
    UnknownPos { line: usize, name: String },
    #[error("line {line}: unknown root attribute {name:?}")]
    UnknownAttribute { line: usize, name: String },
    #[error("line {line}: {reason}")]
    MalformedAnnotation { line: usize, reason: String },
    #[error("cannot read dictionary: {0}")]
    Io(#[from] std::io::Error),
}

/// Loader settings.
#[derive(Debug, Clone, Copy)]
pub struct LoaderOptions {
    /// Fill in attributes that follow from the lemma's shape: verb category
    /// from the infinitive ending, voicing of polysyllabic nouns, aorist
    /// type and progressive vowel drop of verbs.
    pub infer_attributes: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            infer_attributes: true,
        }
    }
}

/// Annotations of one line, before inference.
#[derive(Debug, Default)]
struct Annotations {
    pos: Option<PrimaryPos>,
    attributes: RootAttributes,
    root: Option<String>,
    index: Option<u32>,
}

/// Parse one dictionary line. Blank and comment-only lines yield `None`.
///
/// `line_number` is only used in error messages.
pub fn parse_line(
    line: &str,
    line_number: usize,
    options: &LoaderOptions,
) -> Result<Option<DictionaryItem>, LoadError> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (lemma, rest) = match line.find('[') {
        Some(i) => (line[..i].trim(), &line[i..]),
        None => (line, ""),
    };
    if lemma.is_empty() {
        return Err(malformed(line_number, "missing lemma"));
    }
    if lemma.contains(char::is_whitespace) {
        return Err(malformed(line_number, format!("lemma {lemma:?} contains whitespace")));
    }

    let annotations = parse_annotations(rest, line_number)?;
    Ok(Some(build_item(lemma, annotations, options)))
}

/// Parse dictionary text into items, in line order.
pub fn load_str(text: &str, options: &LoaderOptions) -> Result<Vec<DictionaryItem>, LoadError> {
    let mut items = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(item) = parse_line(line, i + 1, options)? {
            items.push(item);
        }
    }
    Ok(items)
}

/// Read and parse a UTF-8 dictionary file.
pub fn load_file(
    path: impl AsRef<Path>,
    options: &LoaderOptions,
) -> Result<Vec<DictionaryItem>, LoadError> {
    let text = fs::read_to_string(path)?;
    load_str(&text, options)
}

fn malformed(line: usize, reason: impl Into<String>) -> LoadError {
    LoadError::MalformedAnnotation {
        line,
        reason: reason.into(),
    }
}

fn parse_annotations(mut rest: &str, line: usize) -> Result<Annotations, LoadError> {
    let mut out = Annotations::default();

    while !rest.is_empty() {
        let Some(body) = rest.strip_prefix('[') else {
            return Err(malformed(line, format!("unexpected text {rest:?}")));
        };
        let Some(close) = body.find(']') else {
            return Err(malformed(line, "unclosed '['"));
        };
        for part in body[..close].split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let Some((key, value)) = part.split_once(':') else {
                return Err(malformed(line, format!("annotation {part:?} has no ':'")));
            };
            apply(&mut out, key.trim(), value.trim(), line)?;
        }
        rest = body[close + 1..].trim_start();
    }

    Ok(out)
}

fn apply(out: &mut Annotations, key: &str, value: &str, line: usize) -> Result<(), LoadError> {
    match key {
        "P" => {
            let pos = value.parse().map_err(|_| LoadError::UnknownPos {
                line,
                name: value.to_string(),
            })?;
            out.pos = Some(pos);
        }
        "A" => {
            for name in value.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                let attribute: RootAttribute =
                    name.parse().map_err(|_| LoadError::UnknownAttribute {
                        line,
                        name: name.to_string(),
                    })?;
                out.attributes.insert(attribute);
            }
        }
        "R" => {
            if value.is_empty() {
                return Err(malformed(line, "empty root override"));
            }
            out.root = Some(value.to_string());
        }
        "Index" => {
            let index = value
                .parse()
                .map_err(|_| malformed(line, format!("invalid index {value:?}")))?;
            out.index = Some(index);
        }
        other => return Err(malformed(line, format!("unknown annotation key {other:?}"))),
    }
    Ok(())
}

fn infinitive_stem(lemma: &str) -> Option<&str> {
    let stem = lemma
        .strip_suffix("mek")
        .or_else(|| lemma.strip_suffix("mak"))?;
    (!stem.is_empty()).then_some(stem)
}

fn build_item(lemma: &str, a: Annotations, options: &LoaderOptions) -> DictionaryItem {
    let pos = match a.pos {
        Some(pos) => pos,
        None if options.infer_attributes && infinitive_stem(lemma).is_some() => PrimaryPos::Verb,
        None => PrimaryPos::Noun,
    };

    let root = match (&a.root, pos) {
        (Some(root), _) => root.as_str(),
        (None, PrimaryPos::Verb) => infinitive_stem(lemma).unwrap_or(lemma),
        (None, _) => lemma,
    };
    let root: String = root.chars().map(case::fold).collect();

    let mut attributes = a.attributes;
    if options.infer_attributes {
        infer(&root, pos, &mut attributes);
    }

    let item = DictionaryItem::new(lemma, root, pos, attributes);
    match a.index {
        Some(index) => item.with_index(index),
        None => item,
    }
}

fn infer(root: &str, pos: PrimaryPos, attributes: &mut RootAttributes) {
    let last = root.chars().next_back();
    let syllables = alphabet::syllable_count(root);

    match pos {
        PrimaryPos::Noun | PrimaryPos::Adjective => {
            if syllables >= 2
                && last.is_some_and(alphabet::is_voiceless_stop)
                && !attributes.contains(RootAttribute::NoVoicing)
            {
                attributes.insert(RootAttribute::Voicing);
            }
        }
        PrimaryPos::Verb => {
            if last.is_some_and(alphabet::is_vowel) {
                attributes.insert(RootAttribute::ProgressiveVowelDrop);
            }
            if !attributes.contains(RootAttribute::AoristA)
                && !attributes.contains(RootAttribute::AoristI)
            {
                let aorist = if syllables == 1 && !AORIST_I_ROOTS.contains(&root) {
                    RootAttribute::AoristA
                } else {
                    RootAttribute::AoristI
                };
                attributes.insert(aorist);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> DictionaryItem {
        parse_line(line, 1, &LoaderOptions::default()).unwrap().unwrap()
    }

    #[test]
    fn blank_and_comment_lines() {
        let options = LoaderOptions::default();
        assert!(parse_line("", 1, &options).unwrap().is_none());
        assert!(parse_line("   # a comment", 1, &options).unwrap().is_none());
    }

    #[test]
    fn bare_noun() {
        let item = parse("elma");
        assert_eq!(item.id, "elma_Noun");
        assert_eq!(item.pos, PrimaryPos::Noun);
        assert!(item.attributes.is_empty());
    }

    #[test]
    fn annotations() {
        let item = parse("i\u{00E7}eri [P:Noun; A:ImplicitDative]");
        assert_eq!(item.root, "i\u{00E7}eri");
        assert!(item.has_attribute(RootAttribute::ImplicitDative));

        let item = parse("y\u{00FC}z [P:Adj] [Index:2] # comment");
        assert_eq!(item.id, "y\u{00FC}z_Adj_2");

        let item = parse("su [R:suy]");
        assert_eq!(item.lemma, "su");
        assert_eq!(item.root, "suy");
    }

    #[test]
    fn verbs_from_infinitive() {
        let item = parse("gitmek [A:Voicing, Aorist_A]");
        assert_eq!(item.pos, PrimaryPos::Verb);
        assert_eq!(item.id, "gitmek_Verb");
        assert_eq!(item.root, "git");
        assert!(item.has_attribute(RootAttribute::Voicing));
        assert!(item.has_attribute(RootAttribute::AoristA));
        assert!(!item.has_attribute(RootAttribute::AoristI));
    }

    #[test]
    fn aorist_inference() {
        assert!(parse("gelmek").has_attribute(RootAttribute::AoristI));
        assert!(parse("yazmak").has_attribute(RootAttribute::AoristA));
        let item = parse("ba\u{015F}lamak");
        assert!(item.has_attribute(RootAttribute::AoristI));
        assert!(item.has_attribute(RootAttribute::ProgressiveVowelDrop));
    }

    #[test]
    fn voicing_inference() {
        assert!(parse("kitap").has_attribute(RootAttribute::Voicing));
        assert!(!parse("top").has_attribute(RootAttribute::Voicing));
        assert!(!parse("saat [A:NoVoicing, InverseHarmony]").has_attribute(RootAttribute::Voicing));
        let no_inference = LoaderOptions {
            infer_attributes: false,
        };
        let item = parse_line("kitap", 1, &no_inference).unwrap().unwrap();
        assert!(item.attributes.is_empty());
        let item = parse_line("gitmek", 1, &no_inference).unwrap().unwrap();
        assert_eq!(item.pos, PrimaryPos::Noun);
    }

    #[test]
    fn circumflex_is_dropped_from_root() {
        let item = parse("k\u{00E2}r");
        assert_eq!(item.lemma, "k\u{00E2}r");
        assert_eq!(item.root, "kar");
    }

    #[test]
    fn errors_carry_line_numbers() {
        let text = "elma\nkalem [P:Pronoun]\n";
        match load_str(text, &LoaderOptions::default()) {
            Err(LoadError::UnknownPos { line, name }) => {
                assert_eq!(line, 2);
                assert_eq!(name, "Pronoun");
            }
            other => panic!("unexpected {other:?}"),
        }
        let options = LoaderOptions::default();
        assert!(matches!(
            parse_line("kalem [A:Shiny]", 3, &options),
            Err(LoadError::UnknownAttribute { line: 3, .. })
        ));
        assert!(matches!(
            parse_line("kalem [P:Noun", 1, &options),
            Err(LoadError::MalformedAnnotation { .. })
        ));
        assert!(matches!(
            parse_line("kalem [X:1]", 1, &options),
            Err(LoadError::MalformedAnnotation { .. })
        ));
        assert!(matches!(
            parse_line("[P:Noun]", 1, &options),
            Err(LoadError::MalformedAnnotation { .. })
        ));
    }

    #[test]
    fn load_file_reports_io_errors() {
        let missing = std::env::temp_dir().join("turkmorph-no-such-dictionary.txt");
        assert!(matches!(
            load_file(&missing, &LoaderOptions::default()),
            Err(LoadError::Io(_))
        ));
    }
}
