//! Turkish morphological analysis.
//!
//! Given a word such as "kitabım", the analyzer returns every decomposition
//! into a dictionary root and a sequence of morphemes:
//!
//! ```text
//! [kitap:Noun] kitab:Noun+A3sg+ım:P1sg+Nom
//! ```
//!
//! # Architecture
//!
//! - [`morphotactics`] -- the Turkish morpheme catalog and transition table
//! - [`surface`] -- phonetic rule engine realizing suffix templates
//! - [`lexicon`] -- root lexicon, stem variants and the dictionary loader
//! - [`analyzer`] -- exhaustive depth-first search and its results
//!
//! # Example
//!
//! ```
//! use turkmorph_tr::{InterpretingAnalyzer, RootLexicon};
//! use turkmorph_tr::lexicon::loader::{load_str, LoaderOptions};
//!
//! let items = load_str("kitap\nelma", &LoaderOptions::default()).unwrap();
//! let analyzer = InterpretingAnalyzer::new(RootLexicon::from_items(items).unwrap()).unwrap();
//! let results = analyzer.analyze("kitabım");
//! assert_eq!(results.len(), 1);
//! assert!(results[0].contains_morpheme("P1sg"));
//! ```

pub mod analyzer;
pub mod lexicon;
pub mod morphotactics;
pub mod surface;

pub use analyzer::{
    AnalysisDebugData, AnalysisResult, AnalyzerOptions, DebugSink, InterpretingAnalyzer,
    MorphemeSurfaceForm, RejectionReason,
};
pub use lexicon::loader::{LoadError, LoaderOptions};
pub use lexicon::{LexiconError, RootLexicon};
pub use morphotactics::turkish_graph;

use turkmorph_graph::GraphError;

/// Any error raised while setting up an analyzer.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("invalid morphotactic graph: {0}")]
    Graph(#[from] GraphError),
    #[error("invalid lexicon: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("cannot load dictionary: {0}")]
    Load(#[from] LoadError),
}

/// Load a dictionary text file and build an analyzer over it.
pub fn load_analyzer(
    path: impl AsRef<std::path::Path>,
    options: &LoaderOptions,
) -> Result<InterpretingAnalyzer, AnalyzerError> {
    let items = lexicon::loader::load_file(path, options)?;
    let lexicon = RootLexicon::from_items(items)?;
    InterpretingAnalyzer::new(lexicon)
}
