// Interpreting analyzer: exhaustive search over lexicon splits and the
// morphotactic graph.

mod debug;
mod result;

pub use debug::{
    AnalysisDebugData, DebugSink, NoDebug, RejectedPath, RejectionReason, SearchTrace,
};
pub use result::{AnalysisResult, MorphemeSurfaceForm};

use std::borrow::Cow;
use std::sync::Arc;

use turkmorph_core::{
    AttributeSet, DictionaryItem, PhoneticAttribute, RootAttributes, alphabet, case,
};
use turkmorph_graph::{
    Morpheme, MorphemeId, MorphemeTransition, MorphotacticGraph, PathContext, StateId,
};

use crate::AnalyzerError;
use crate::lexicon::{Candidate, RootLexicon};
use crate::morphotactics::turkish_graph;
use crate::surface;

/// Analyzer settings.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerOptions {
    /// Lowercase the input with Turkish rules (`I` -> `ı`, `İ` -> `i`)
    /// before searching. When off, input must already be lowercase.
    /// Circumflexes are folded either way.
    pub normalize_case: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            normalize_case: true,
        }
    }
}

/// Finds every analysis of a word.
///
/// The analyzer only reads its lexicon and graph, so one instance can serve
/// any number of threads. Results borrow from the analyzer.
#[derive(Debug)]
pub struct InterpretingAnalyzer {
    graph: Arc<MorphotacticGraph>,
    lexicon: RootLexicon,
    options: AnalyzerOptions,
}

impl InterpretingAnalyzer {
    /// Create an analyzer over `lexicon` with the Turkish morphotactics.
    pub fn new(lexicon: RootLexicon) -> Result<Self, AnalyzerError> {
        Ok(Self::with_graph(Arc::new(turkish_graph()?), lexicon))
    }

    /// Create an analyzer sharing an already built graph.
    pub fn with_graph(graph: Arc<MorphotacticGraph>, lexicon: RootLexicon) -> Self {
        Self {
            graph,
            lexicon,
            options: AnalyzerOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn graph(&self) -> &Arc<MorphotacticGraph> {
        &self.graph
    }

    pub fn lexicon(&self) -> &RootLexicon {
        &self.lexicon
    }

    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    /// All analyses of `word`. A word without analyses yields an empty
    /// vector.
    pub fn analyze(&self, word: &str) -> Vec<AnalysisResult<'_>> {
        self.analyze_debug(word, &mut NoDebug)
    }

    /// Like [`analyze`](Self::analyze), reporting every candidate, accepted
    /// path and rejected branch to `sink`. The results are the same.
    pub fn analyze_debug<S: DebugSink>(
        &self,
        word: &str,
        sink: &mut S,
    ) -> Vec<AnalysisResult<'_>> {
        let input = FoldedWord::new(word, self.options.normalize_case);
        let mut search = Search {
            graph: &self.graph,
            input: &input,
            sink,
            results: Vec::new(),
        };

        for candidate in self.lexicon.candidates_for_prefix(&input.text) {
            search
                .sink
                .candidate(candidate.item, &candidate.stem.surface, candidate.remainder);
            search.start(candidate);
        }
        search.results
    }
}

/// The caller's word and the folded text the search runs on.
///
/// Folding maps each char to exactly one char, but byte lengths may change
/// (`I` -> `ı`, `â` -> `a`), so offsets into `text` are mapped back through
/// `boundaries` before slicing `original`.
struct FoldedWord<'w> {
    original: &'w str,
    text: Cow<'w, str>,
    /// `(folded, original)` byte offset of every char, plus the end.
    /// Empty when folding changed nothing.
    boundaries: Vec<(usize, usize)>,
}

impl<'w> FoldedWord<'w> {
    fn new(word: &'w str, lowercase: bool) -> Self {
        let fold = |c: char| {
            if lowercase {
                case::fold(c)
            } else {
                alphabet::strip_circumflex(c)
            }
        };
        if word.chars().all(|c| fold(c) == c) {
            return Self {
                original: word,
                text: Cow::Borrowed(word),
                boundaries: Vec::new(),
            };
        }

        let mut text = String::with_capacity(word.len());
        let mut boundaries = Vec::with_capacity(word.len() + 1);
        for (offset, c) in word.char_indices() {
            boundaries.push((text.len(), offset));
            text.push(fold(c));
        }
        boundaries.push((text.len(), word.len()));
        Self {
            original: word,
            text: Cow::Owned(text),
            boundaries,
        }
    }

    /// Original byte offset of the char starting at `folded`.
    fn offset(&self, folded: usize) -> usize {
        if self.boundaries.is_empty() {
            return folded;
        }
        let index = match self.boundaries.binary_search_by_key(&folded, |&(f, _)| f) {
            Ok(index) | Err(index) => index.min(self.boundaries.len() - 1),
        };
        self.boundaries[index].1
    }

    /// The original spelling of folded bytes `start..end`.
    fn original(&self, start: usize, end: usize) -> &'w str {
        let (start, end) = (self.offset(start), self.offset(end));
        self.original.get(start..end).unwrap_or_default()
    }
}

/// A partial analysis: the stem and the steps taken so far.
struct Path<'a> {
    item: &'a DictionaryItem,
    root: &'a str,
    root_morpheme: &'a Morpheme,
    steps: Vec<MorphemeSurfaceForm<'a>>,
    attributes: AttributeSet,
}

impl PathContext for Path<'_> {
    fn phonetic_attributes(&self) -> AttributeSet {
        self.attributes
    }

    fn root_attributes(&self) -> RootAttributes {
        self.item.attributes
    }

    fn has_prior_morpheme(&self, morpheme: MorphemeId) -> bool {
        self.steps.iter().any(|s| s.transition.morpheme == morpheme)
    }
}

struct Search<'a, 's, S> {
    graph: &'a MorphotacticGraph,
    input: &'s FoldedWord<'s>,
    sink: &'s mut S,
    results: Vec<AnalysisResult<'a>>,
}

impl<'a, S: DebugSink> Search<'a, '_, S> {
    fn start(&mut self, candidate: Candidate<'a, '_>) {
        let Some(state) = self
            .graph
            .root_state(candidate.item.pos, candidate.stem.kind)
        else {
            return;
        };
        let mut path = Path {
            item: candidate.item,
            root: &candidate.stem.surface,
            root_morpheme: self.graph.morpheme(self.graph.state(state).morpheme),
            steps: Vec::new(),
            attributes: candidate.stem.attributes,
        };
        self.explore(state, candidate.remainder, &mut path);
    }

    fn reject(
        &mut self,
        path: &Path<'a>,
        state: StateId,
        transition: Option<&MorphemeTransition>,
        remainder: &str,
        reason: RejectionReason,
    ) {
        let trace = SearchTrace {
            graph: self.graph,
            item: path.item,
            root: path.root,
            steps: &path.steps,
            state,
            transition,
            remainder,
        };
        self.sink.rejected(&trace, reason);
    }

    /// A finished path, with the root and step surfaces respelled from the
    /// caller's word.
    fn spelled(&self, path: &Path<'a>, state: StateId) -> AnalysisResult<'a> {
        let mut start = path.root.len();
        let root = self.input.original(0, start).to_string();
        let steps = path
            .steps
            .iter()
            .map(|step| {
                let end = start + step.surface.len();
                let surface = self.input.original(start, end).to_string();
                start = end;
                MorphemeSurfaceForm {
                    morpheme: step.morpheme,
                    surface,
                    transition: step.transition,
                }
            })
            .collect();
        AnalysisResult {
            item: path.item,
            root,
            root_morpheme: path.root_morpheme,
            steps,
            state: self.graph.state(state),
        }
    }

    /// Depth-first search from `state` with `remainder` left to consume.
    ///
    /// Every transition either consumes input or is part of an acyclic
    /// chain of empty transitions, so the recursion is bounded.
    fn explore(&mut self, state: StateId, remainder: &str, path: &mut Path<'a>) {
        let graph = self.graph;
        let mut settled = false;

        if remainder.is_empty() && graph.is_terminal(state) {
            if path.attributes.contains(PhoneticAttribute::ExpectsVowel) {
                self.reject(path, state, None, remainder, RejectionReason::CannotTerminate);
            } else {
                let result = self.spelled(path, state);
                self.sink.accepted(&result);
                self.results.push(result);
            }
            settled = true;
        }

        let next = remainder.chars().next();
        for transition in graph.outgoing(state) {
            let template = &transition.template;
            let possible =
                template.can_be_empty() || next.is_some_and(|c| template.may_start_with(c));
            if !possible {
                let reason = RejectionReason::PhoneticMismatch;
                self.reject(path, state, Some(transition), remainder, reason);
                continue;
            }
            if !transition.is_applicable(&*path) {
                self.reject(
                    path,
                    state,
                    Some(transition),
                    remainder,
                    RejectionReason::MorphotacticViolation,
                );
                continue;
            }
            let Some(surface) = surface::materialize(path.attributes, transition) else {
                self.reject(
                    path,
                    state,
                    Some(transition),
                    remainder,
                    RejectionReason::UnsatisfiedExpectation,
                );
                continue;
            };
            let Some(rest) = remainder.strip_prefix(surface.as_str()) else {
                let reason = RejectionReason::PhoneticMismatch;
                self.reject(path, state, Some(transition), remainder, reason);
                continue;
            };

            settled = true;
            let saved = path.attributes;
            path.attributes = surface::follow(saved, transition, &surface);
            path.steps.push(MorphemeSurfaceForm {
                morpheme: graph.morpheme(transition.morpheme),
                surface,
                transition,
            });
            self.explore(transition.to, rest, path);
            path.steps.pop();
            path.attributes = saved;
        }

        if !settled {
            let reason = if remainder.is_empty() {
                RejectionReason::NonTerminalDeadEnd
            } else {
                RejectionReason::NoApplicableTransition
            };
            self.reject(path, state, None, remainder, reason);
        }
    }
}
