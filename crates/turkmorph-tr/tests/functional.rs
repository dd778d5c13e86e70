//! Functional tests for the analyzer: correctness properties over small
//! hand-written dictionaries.

use std::sync::Arc;

use turkmorph_tr::lexicon::loader::load_str;
use turkmorph_tr::{
    AnalysisDebugData, AnalysisResult, InterpretingAnalyzer, LoaderOptions, RejectionReason,
    RootLexicon, turkish_graph,
};

fn analyzer(dictionary: &str) -> InterpretingAnalyzer {
    let items = load_str(dictionary, &LoaderOptions::default()).unwrap();
    InterpretingAnalyzer::new(RootLexicon::from_items(items).unwrap()).unwrap()
}

fn rendered(results: &[AnalysisResult<'_>]) -> Vec<String> {
    results.iter().map(ToString::to_string).collect()
}

const DICTIONARY: &str = "\
el
elma
elmas
kitap
i\u{00E7}eri [P:Noun; A:ImplicitDative]
gitmek [A:Voicing, Aorist_A]
gelmek
ba\u{015F}lamak
g\u{00FC}zel [P:Adj]
a\u{011F}\u{0131}z [A:LastVowelDrop]
hak [A:Doubling]
saat [A:NoVoicing, InverseHarmony]
ve [P:Conj]
";

const WORDS: &[&str] = &[
    "elma",
    "elmalar",
    "elmalar\u{0131}",
    "elmas\u{0131}",
    "kitab\u{0131}m",
    "kitap\u{00E7}\u{0131}k",
    "kitap\u{00E7}\u{0131}\u{011F}\u{0131}",
    "i\u{00E7}eri",
    "gidiyorum",
    "gelmez",
    "ba\u{015F}l\u{0131}yor",
    "g\u{00FC}zel",
    "a\u{011F}z\u{0131}",
    "hakk\u{0131}",
    "saati",
    "ve",
    "xyz",
];

// ---------------------------------------------------------------------------
// Completeness and voicing
// ---------------------------------------------------------------------------

#[test]
fn plural_of_a_noun() {
    let a = analyzer("elma");
    let results = a.analyze("elmalar");
    assert_eq!(results.len(), 1);
    let r = &results[0];
    assert_eq!(r.item.id, "elma_Noun");
    assert_eq!(r.root, "elma");
    assert!(r.contains_morpheme("A3pl"));
    assert!(r.state.terminal);
}

#[test]
fn voiced_root_before_vowel() {
    let a = analyzer("kitap");
    let results = a.analyze("kitab\u{0131}m");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].root, "kitab");
    assert_eq!(results[0].item.lemma, "kitap");
    assert!(results[0].contains_morpheme("P1sg"));
}

#[test]
fn voicing_is_rejected_in_the_wrong_context() {
    let a = analyzer("kitap");
    for word in ["kitap\u{0131}m", "kitablar", "kitab", "kitapa", "kitabc\u{0131}k"] {
        assert!(a.analyze(word).is_empty(), "{word} should have no analysis");
    }
}

#[test]
fn voicing_exemption() {
    let a = analyzer("top\nsaat [A:NoVoicing]");
    assert_eq!(a.analyze("topu").len(), 2);
    assert!(a.analyze("tobu").is_empty());
    assert_eq!(a.analyze("saat\u{0131}").len(), 2);
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

#[test]
fn diminutive() {
    let a = analyzer("kitap");
    let results = a.analyze("kitap\u{00E7}\u{0131}k");
    assert_eq!(results.len(), 1);
    assert!(results[0].contains_morpheme("Dim"));
}

#[test]
fn illegal_derivation_orders() {
    let a = analyzer("kitap");
    for word in [
        "kitaplarc\u{0131}k",
        "kitap\u{00E7}\u{0131}klarc\u{0131}k",
        "kitap\u{00E7}\u{0131}\u{011F}",
        "kitapc\u{0131}k",
        "kitab\u{0131}mc\u{0131}k",
        "kitaptac\u{0131}k",
        "kitap\u{00E7}\u{0131}k\u{00E7}\u{0131}k",
    ] {
        assert!(a.analyze(word).is_empty(), "{word} should have no analysis");
    }
}

#[test]
fn adjective_derivations() {
    let a = analyzer("g\u{00FC}zel [P:Adj]");
    let results = a.analyze("g\u{00FC}zellik");
    assert_eq!(results.len(), 1);
    assert!(results[0].contains_morpheme("Ness"));

    let results = a.analyze("g\u{00FC}zelle\u{015F}ti");
    assert_eq!(results.len(), 1);
    assert!(results[0].contains_morpheme("Become"));
    assert!(results[0].contains_morpheme("Past"));
}

#[test]
fn with_and_without() {
    let a = analyzer("kitap");
    let with = a.analyze("kitapl\u{0131}");
    assert!(!with.is_empty());
    assert!(with.iter().all(|r| r.contains_morpheme("With")));
    let without = a.analyze("kitaps\u{0131}z");
    assert!(!without.is_empty());
    assert!(without.iter().all(|r| r.contains_morpheme("Without")));
}

// ---------------------------------------------------------------------------
// Implicit attributes and ambiguity
// ---------------------------------------------------------------------------

#[test]
fn implicit_dative() {
    let a = analyzer("i\u{00E7}eri [P:Noun; A:ImplicitDative]");
    let results = a.analyze("i\u{00E7}eri");
    assert_eq!(results.len(), 2);

    let dative: Vec<_> = results.iter().filter(|r| r.contains_morpheme("Dat")).collect();
    assert_eq!(dative.len(), 1);
    let step = dative[0].steps.iter().find(|s| s.morpheme.id == "Dat").unwrap();
    assert_eq!(step.surface, "");

    let plain: Vec<_> = results.iter().filter(|r| !r.contains_morpheme("Dat")).collect();
    assert_eq!(plain.len(), 1);
    assert!(plain[0].contains_morpheme("Nom"));

    assert_eq!(a.analyze("i\u{00E7}eriye").len(), 1);
}

#[test]
fn implicit_plural() {
    let a = analyzer("pantolon [A:ImplicitPlural]");
    let results = a.analyze("pantolon");
    assert_eq!(results.len(), 1);
    assert!(results[0].contains_morpheme("A3pl"));
    assert!(a.analyze("pantolonlar").is_empty());
}

#[test]
fn shared_prefixes_are_all_explored() {
    let a = analyzer("el\nelma\nelmas");
    let results = a.analyze("elmas\u{0131}");
    assert_eq!(
        rendered(&results),
        vec![
            "[elmas:Noun] elmas:Noun+A3sg+Pnon+\u{0131}:Acc",
            "[elmas:Noun] elmas:Noun+A3sg+\u{0131}:P3sg+Nom",
            "[elma:Noun] elma:Noun+A3sg+s\u{0131}:P3sg+Nom",
        ]
    );
}

#[test]
fn plural_possessive_ambiguity() {
    let a = analyzer("elma");
    let results = a.analyze("elmalar\u{0131}");
    assert_eq!(results.len(), 4);
    let with_plural = results.iter().filter(|r| r.contains_morpheme("A3pl")).count();
    assert_eq!(with_plural, 3);
}

#[test]
fn homographs_are_distinct_analyses() {
    let a = analyzer("y\u{00FC}z [P:Noun]\ny\u{00FC}z [P:Adj]");
    let ids: Vec<&str> = a.analyze("y\u{00FC}z").iter().map(|r| r.item.id.as_str()).collect();
    assert!(ids.contains(&"y\u{00FC}z_Noun"));
    assert!(ids.contains(&"y\u{00FC}z_Adj"));
}

// ---------------------------------------------------------------------------
// Stem alternations and harmony
// ---------------------------------------------------------------------------

#[test]
fn vowel_drop_and_doubling() {
    let a = analyzer("a\u{011F}\u{0131}z [A:LastVowelDrop]\nhak [A:Doubling]");
    assert_eq!(a.analyze("a\u{011F}z\u{0131}").len(), 2);
    assert_eq!(a.analyze("a\u{011F}\u{0131}zlar").len(), 1);
    assert!(a.analyze("a\u{011F}\u{0131}z\u{0131}").is_empty());
    assert_eq!(a.analyze("hakk\u{0131}").len(), 2);
    assert!(a.analyze("hak\u{0131}").is_empty());
}

#[test]
fn inverse_harmony() {
    let a = analyzer("saat [A:NoVoicing, InverseHarmony]");
    assert_eq!(a.analyze("saati").len(), 2);
    assert!(a.analyze("saat\u{0131}").is_empty());
    assert_eq!(a.analyze("saatler").len(), 1);
}

#[test]
fn verb_paradigm() {
    let a = analyzer("gitmek [A:Voicing, Aorist_A]\ngelmek\nba\u{015F}lamak");
    for word in [
        "gidiyorum",
        "gider",
        "gitti",
        "gitmedi",
        "gidece\u{011F}im",
        "gidecek",
        "gelir",
        "gelmez",
        "gelmem",
        "gelmiyor",
        "gelmi\u{015F}siniz",
        "gelsinler",
        "gel",
        "gelmek",
        "ba\u{015F}l\u{0131}yor",
        "ba\u{015F}lar",
        "ba\u{015F}layaca\u{011F}\u{0131}m",
    ] {
        assert_eq!(a.analyze(word).len(), 1, "{word}");
    }
    for word in ["gitiyor", "gidti", "geler", "ba\u{015F}lay\u{0131}yor", "gid"] {
        assert!(a.analyze(word).is_empty(), "{word} should have no analysis");
    }
}

#[test]
fn progressive_of_a_vowel_final_verb() {
    let a = analyzer("ba\u{015F}lamak");
    let results = a.analyze("ba\u{015F}l\u{0131}yor");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].root, "ba\u{015F}l");
    assert!(results[0].contains_morpheme("Prog1"));
}

#[test]
fn closed_classes_are_bare() {
    let a = analyzer("ve [P:Conj]");
    assert_eq!(rendered(&a.analyze("ve")), vec!["[ve:Conj] ve:Conj"]);
    assert!(a.analyze("veler").is_empty());
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

#[test]
fn analysis_is_deterministic() {
    let a = analyzer(DICTIONARY);
    for word in WORDS {
        assert_eq!(rendered(&a.analyze(word)), rendered(&a.analyze(word)), "{word}");
    }
}

#[test]
fn debug_does_not_change_results() {
    let a = analyzer(DICTIONARY);
    for word in WORDS {
        let mut debug = AnalysisDebugData::new(*word);
        let traced = a.analyze_debug(word, &mut debug);
        assert_eq!(a.analyze(word), traced, "{word}");
        assert_eq!(debug.accepted, rendered(&traced), "{word}");
    }
}

#[test]
fn surfaces_round_trip() {
    let a = analyzer(DICTIONARY);
    for word in WORDS {
        for result in a.analyze(word) {
            assert_eq!(result.surface(), *word, "{result}");
        }
    }
}

#[test]
fn capitalized_surfaces_round_trip() {
    let a = analyzer(DICTIONARY);
    for word in [
        "Kitab\u{0131}m",
        "K\u{0130}TABIM",
        "\u{0130}\u{00C7}ER\u{0130}",
        "Elmalar\u{0131}m\u{0131}zdan",
        "GEL\u{0130}YOR",
    ] {
        let results = a.analyze(word);
        assert!(!results.is_empty(), "{word}");
        for result in results {
            assert_eq!(result.surface(), word, "{result}");
        }
    }

    let results = a.analyze("\u{0130}\u{00C7}ER\u{0130}");
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.root == "\u{0130}\u{00C7}ER\u{0130}"));
}

#[test]
fn circumflexed_input() {
    let a = analyzer("k\u{00E2}r");
    let results = a.analyze("k\u{00E2}r\u{0131}");
    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.root, "k\u{00E2}r");
        assert_eq!(result.surface(), "k\u{00E2}r\u{0131}");
    }
    assert_eq!(a.analyze("kar\u{0131}").len(), 2);
}

#[test]
fn debug_trace_explains_rejections() {
    let a = analyzer("el\nelma");
    let mut debug = AnalysisDebugData::new("elma");
    let results = a.analyze_debug("elma", &mut debug);
    assert_eq!(results.len(), 1);
    assert_eq!(debug.candidates.len(), 2);
    assert_eq!(debug.accepted.len(), 1);
    assert!(debug.count(RejectionReason::NoApplicableTransition) > 0);
    assert!(debug.count(RejectionReason::PhoneticMismatch) > 0);

    let text = debug.to_string();
    assert!(text.starts_with("input: elma\n"));
    assert!(text.contains("no applicable transition"));
}

#[test]
fn analyzer_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InterpretingAnalyzer>();

    let a = analyzer(DICTIONARY);
    let expected: Vec<Vec<String>> = WORDS.iter().map(|w| rendered(&a.analyze(w))).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    WORDS
                        .iter()
                        .map(|w| rendered(&a.analyze(w)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn graph_is_shared_between_analyzers() {
    let graph = Arc::new(turkish_graph().unwrap());
    let lexicon = |text: &str| {
        RootLexicon::from_items(load_str(text, &LoaderOptions::default()).unwrap()).unwrap()
    };
    let nouns = InterpretingAnalyzer::with_graph(Arc::clone(&graph), lexicon("elma"));
    let verbs = InterpretingAnalyzer::with_graph(Arc::clone(&graph), lexicon("gelmek"));
    assert_eq!(nouns.analyze("elmalar").len(), 1);
    assert_eq!(verbs.analyze("geliyor").len(), 1);
    assert!(nouns.analyze("geliyor").is_empty());
}
