//! Morphotactic graph engine.
//!
//! A morphotactic graph is a static directed graph whose nodes are
//! morphological states and whose edges are morpheme transitions. Each edge
//! carries a suffix template (how the morpheme is spelled) and a condition
//! (when the edge may be taken). The graph is built once from a table,
//! validated, and then only read.
//!
//! # Architecture
//!
//! - [`morpheme`] -- morpheme identities and categories
//! - [`state`] -- morphological states (graph nodes)
//! - [`template`] -- suffix template language and parser
//! - [`condition`] -- applicability predicates over a search path
//! - [`transition`] -- morpheme transitions (graph edges)
//! - [`graph`] -- graph builder, validation and queries

pub mod condition;
pub mod graph;
pub mod morpheme;
pub mod state;
pub mod template;
pub mod transition;

pub use condition::{Condition, ConditionSpec, PathContext};
pub use graph::{GraphBuilder, MorphotacticGraph};
pub use morpheme::{Morpheme, MorphemeCategory, MorphemeId};
pub use state::{MorphologicalState, StateId};
pub use template::{HarmonyVowel, SuffixTemplate, TemplateError, Token};
pub use transition::{MorphemeTransition, TailForm};

use turkmorph_core::{PrimaryPos, StemKind};

/// Error raised while building a morphotactic graph.
///
/// Every variant names the table entry at fault. Graph errors only occur in
/// [`GraphBuilder::build`]; a built graph never fails.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate morpheme id {0:?}")]
    DuplicateMorpheme(&'static str),
    #[error("duplicate state id {0:?}")]
    DuplicateState(&'static str),
    #[error("{context} references undefined morpheme {morpheme:?}")]
    UnknownMorpheme {
        context: String,
        morpheme: &'static str,
    },
    #[error("transition {from} -> {to} references undefined state {missing:?}")]
    UnknownState {
        from: &'static str,
        to: &'static str,
        missing: &'static str,
    },
    #[error("root state for {pos} ({kind:?}) is undefined: {state:?}")]
    UnknownRootState {
        pos: PrimaryPos,
        kind: StemKind,
        state: &'static str,
    },
    #[error("transition {from} -> {to} has invalid template {template:?}: {source}")]
    InvalidTemplate {
        from: &'static str,
        to: &'static str,
        template: &'static str,
        source: TemplateError,
    },
    #[error("state {0:?} is not reachable from any root state")]
    UnreachableState(&'static str),
    #[error("states {0:?} form a cycle of transitions that may consume no input")]
    EmptyCycle(Vec<&'static str>),
    #[error("graph defines no root states")]
    MissingRoot,
}
