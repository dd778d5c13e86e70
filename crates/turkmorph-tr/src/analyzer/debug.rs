// Search tracing.
//
// The analyzer reports what it tries to a `DebugSink`. Plain analysis uses
// a sink that ignores everything, so tracing costs nothing unless asked for.

use std::fmt;

use turkmorph_core::DictionaryItem;
use turkmorph_graph::{MorphemeTransition, MorphotacticGraph, StateId};

use super::result::{AnalysisResult, MorphemeSurfaceForm};

/// Why a search branch was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The transition cannot produce the next input letters.
    PhoneticMismatch,
    /// The transition's condition does not hold for the path.
    MorphotacticViolation,
    /// The suffix would follow a stem expecting the other kind of letter.
    UnsatisfiedExpectation,
    /// All input consumed in a state where the word cannot end.
    NonTerminalDeadEnd,
    /// Input remains but no transition consumed any of it.
    NoApplicableTransition,
    /// All input consumed in a terminal state, but the last surface still
    /// expects a vowel-initial suffix.
    CannotTerminate,
}

impl RejectionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PhoneticMismatch => "phonetic mismatch",
            Self::MorphotacticViolation => "morphotactic violation",
            Self::UnsatisfiedExpectation => "unsatisfied expectation",
            Self::NonTerminalDeadEnd => "non-terminal dead end",
            Self::NoApplicableTransition => "no applicable transition",
            Self::CannotTerminate => "cannot terminate",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point in the search, as seen by a [`DebugSink`].
pub struct SearchTrace<'t> {
    pub graph: &'t MorphotacticGraph,
    pub item: &'t DictionaryItem,
    pub root: &'t str,
    pub steps: &'t [MorphemeSurfaceForm<'t>],
    pub state: StateId,
    /// The transition being tried, if the event concerns one.
    pub transition: Option<&'t MorphemeTransition>,
    pub remainder: &'t str,
}

impl fmt::Display for SearchTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.item, self.root)?;
        for step in self.steps {
            write!(f, "+{step}")?;
        }
        write!(f, " at {}", self.graph.state(self.state).id)?;
        if let Some(t) = self.transition {
            write!(f, " trying {}", self.graph.describe(t))?;
        }
        write!(f, ", remaining {:?}", self.remainder)
    }
}

/// Receiver of search events.
pub trait DebugSink {
    /// A stem was proposed by the lexicon.
    fn candidate(&mut self, _item: &DictionaryItem, _root: &str, _remainder: &str) {}

    /// A complete analysis was found.
    fn accepted(&mut self, _result: &AnalysisResult<'_>) {}

    /// A branch was abandoned.
    fn rejected(&mut self, _trace: &SearchTrace<'_>, _reason: RejectionReason) {}
}

/// Sink that records nothing.
pub struct NoDebug;

impl DebugSink for NoDebug {}

/// A rejected branch, rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPath {
    pub path: String,
    pub reason: RejectionReason,
}

/// Everything the analyzer tried for one word.
#[derive(Debug, Clone, Default)]
pub struct AnalysisDebugData {
    pub input: String,
    /// Proposed stems as `lemma:Pos root + remainder`.
    pub candidates: Vec<String>,
    pub accepted: Vec<String>,
    pub rejected: Vec<RejectedPath>,
}

impl AnalysisDebugData {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Number of rejected branches with the given reason.
    pub fn count(&self, reason: RejectionReason) -> usize {
        self.rejected.iter().filter(|r| r.reason == reason).count()
    }
}

impl DebugSink for AnalysisDebugData {
    fn candidate(&mut self, item: &DictionaryItem, root: &str, remainder: &str) {
        self.candidates.push(format!("{item} {root} + {remainder:?}"));
    }

    fn accepted(&mut self, result: &AnalysisResult<'_>) {
        self.accepted.push(result.to_string());
    }

    fn rejected(&mut self, trace: &SearchTrace<'_>, reason: RejectionReason) {
        self.rejected.push(RejectedPath {
            path: trace.to_string(),
            reason,
        });
    }
}

impl fmt::Display for AnalysisDebugData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input: {}", self.input)?;
        if self.candidates.is_empty() {
            writeln!(f, "no stem candidates")?;
        } else {
            writeln!(f, "stem candidates:")?;
            for c in &self.candidates {
                writeln!(f, "  {c}")?;
            }
        }
        writeln!(f, "accepted ({}):", self.accepted.len())?;
        for a in &self.accepted {
            writeln!(f, "  {a}")?;
        }
        writeln!(f, "rejected ({}):", self.rejected.len())?;
        for r in &self.rejected {
            writeln!(f, "  {}: {}", r.reason, r.path)?;
        }
        Ok(())
    }
}
