// Analysis results.

use std::fmt;

use turkmorph_core::DictionaryItem;
use turkmorph_graph::{Morpheme, MorphemeTransition, MorphologicalState};

/// One step of an analysis: a transition and the letters it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphemeSurfaceForm<'a> {
    pub morpheme: &'a Morpheme,
    /// Input letters as the caller spelled them, empty for zero morphemes.
    pub surface: String,
    pub transition: &'a MorphemeTransition,
}

impl fmt::Display for MorphemeSurfaceForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.surface.is_empty() {
            write!(f, "{}", self.morpheme.id)
        } else {
            write!(f, "{}:{}", self.surface, self.morpheme.id)
        }
    }
}

/// A complete decomposition of a word.
///
/// `root` followed by the surfaces of `steps` spells the analyzed word
/// exactly as it was passed in, capitals and circumflexes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult<'a> {
    pub item: &'a DictionaryItem,
    /// Root surface actually consumed, e.g. `kitab` for `kitap`.
    pub root: String,
    /// Morpheme of the initial state (the part of speech).
    pub root_morpheme: &'a Morpheme,
    pub steps: Vec<MorphemeSurfaceForm<'a>>,
    /// Terminal state the path ended in.
    pub state: &'a MorphologicalState,
}

impl AnalysisResult<'_> {
    /// Whether any step applies the morpheme with this id (e.g. `P1sg`).
    pub fn contains_morpheme(&self, id: &str) -> bool {
        self.root_morpheme.id == id || self.steps.iter().any(|s| s.morpheme.id == id)
    }

    /// Morpheme ids in path order, starting with the root morpheme.
    pub fn morpheme_ids(&self) -> Vec<&'static str> {
        std::iter::once(self.root_morpheme.id)
            .chain(self.steps.iter().map(|s| s.morpheme.id))
            .collect()
    }

    /// The analyzed word, rebuilt from the root and the step surfaces.
    pub fn surface(&self) -> String {
        let mut out = self.root.clone();
        for step in &self.steps {
            out.push_str(&step.surface);
        }
        out
    }
}

impl fmt::Display for AnalysisResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}:{}", self.item, self.root, self.root_morpheme.id)?;
        for step in &self.steps {
            let separator = if step.morpheme.is_derivational() { '|' } else { '+' };
            write!(f, "{separator}{step}")?;
        }
        Ok(())
    }
}
