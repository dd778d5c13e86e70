// Morpheme transitions: the edges of the morphotactic graph.

use crate::condition::{Condition, PathContext};
use crate::morpheme::MorphemeId;
use crate::state::StateId;
use crate::template::SuffixTemplate;

/// How the final `~` consonant of a template is realized on this edge.
///
/// A template with a voicing tail becomes two edges: one keeps the
/// consonant and must be followed by a consonant-initial suffix (or end the
/// word), the other voices it and must be followed by a vowel-initial
/// suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TailForm {
    /// The template has no voicing tail.
    Fixed,
    Plain,
    Voiced,
}

/// A directed edge applying the morpheme of its target state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphemeTransition {
    pub from: StateId,
    pub to: StateId,
    /// Morpheme of the target state.
    pub morpheme: MorphemeId,
    pub template: SuffixTemplate,
    pub tail: TailForm,
    pub condition: Condition,
}

impl MorphemeTransition {
    /// Whether the transition's condition holds for the given path.
    pub fn is_applicable(&self, ctx: &impl PathContext) -> bool {
        self.condition.accepts(ctx)
    }
}
