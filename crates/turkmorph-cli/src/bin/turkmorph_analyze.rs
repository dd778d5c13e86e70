// turkmorph-analyze: Morphological analysis of Turkish words.
//
// Reads words from the command line or from stdin (one per line) and
// prints every analysis of each word.
//
// Usage:
//   turkmorph-analyze [-d DICT] [--json] [--debug] [WORD...]
//
// Options:
//   -d, --dict PATH   Dictionary file (default: $TURKMORPH_DICT)
//   --json            Print one JSON object per word
//   --debug           Print the search trace to stderr
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

use serde::Serialize;
use turkmorph_tr::{AnalysisDebugData, AnalysisResult, InterpretingAnalyzer};

#[derive(Serialize)]
struct WordRecord<'a> {
    word: &'a str,
    analyses: Vec<AnalysisRecord<'a>>,
}

#[derive(Serialize)]
struct AnalysisRecord<'a> {
    id: &'a str,
    lemma: &'a str,
    pos: &'static str,
    attributes: Vec<&'static str>,
    root: &'a str,
    morphemes: Vec<MorphemeRecord<'a>>,
    state: &'static str,
    formatted: String,
}

#[derive(Serialize)]
struct MorphemeRecord<'a> {
    id: &'static str,
    surface: &'a str,
    derivational: bool,
}

impl<'a> AnalysisRecord<'a> {
    fn new(result: &'a AnalysisResult<'_>) -> Self {
        Self {
            id: &result.item.id,
            lemma: &result.item.lemma,
            pos: result.item.pos.short_name(),
            attributes: result.item.attributes.iter().map(|a| a.name()).collect(),
            root: &result.root,
            morphemes: result
                .steps
                .iter()
                .map(|s| MorphemeRecord {
                    id: s.morpheme.id,
                    surface: &s.surface,
                    derivational: s.morpheme.is_derivational(),
                })
                .collect(),
            state: result.state.id,
            formatted: result.to_string(),
        }
    }
}

struct Settings {
    json: bool,
    debug: bool,
}

fn analyze_word(
    word: &str,
    analyzer: &InterpretingAnalyzer,
    settings: &Settings,
    out: &mut impl Write,
) -> io::Result<()> {
    let analyses = if settings.debug {
        let mut debug = AnalysisDebugData::new(word);
        let analyses = analyzer.analyze_debug(word, &mut debug);
        eprintln!("{debug}");
        analyses
    } else {
        analyzer.analyze(word)
    };

    if settings.json {
        let record = WordRecord {
            word,
            analyses: analyses.iter().map(AnalysisRecord::new).collect(),
        };
        let line = serde_json::to_string(&record).map_err(io::Error::other)?;
        return writeln!(out, "{line}");
    }

    if analyses.is_empty() {
        writeln!(out, "{word}: (no analysis)")
    } else {
        writeln!(out, "{word}:")?;
        for analysis in &analyses {
            writeln!(out, "  {analysis}")?;
        }
        Ok(())
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = turkmorph_cli::parse_dict_path(&args).unwrap_or_else(|e| turkmorph_cli::fatal(&e));
    let args = parsed.rest;

    if turkmorph_cli::wants_help(&args) {
        println!("turkmorph-analyze: Morphological analysis of Turkish words.");
        println!();
        println!("Usage: turkmorph-analyze [-d DICT] [--json] [--debug] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH   Dictionary file (default: ${})", turkmorph_cli::DICT_ENV);
        println!("  --json            Print one JSON object per word");
        println!("  --debug           Print the search trace to stderr");
        println!("  -h, --help        Print this help");
        return;
    }

    let settings = Settings {
        json: turkmorph_cli::has_flag(&args, "--json"),
        debug: turkmorph_cli::has_flag(&args, "--debug"),
    };
    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let analyzer = turkmorph_cli::load_analyzer(parsed.dict_path.as_deref())
        .unwrap_or_else(|e| turkmorph_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if words.is_empty() {
        let stdin = io::stdin();
        stdin.lock().lines().try_for_each(|line| {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                return Ok(());
            }
            analyze_word(word, &analyzer, &settings, &mut out)
        })
    } else {
        words
            .iter()
            .try_for_each(|word| analyze_word(word, &analyzer, &settings, &mut out))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            turkmorph_cli::fatal(&e.to_string());
        }
    }
}
