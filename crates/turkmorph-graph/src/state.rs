// Morphological states: the nodes of the morphotactic graph.

use crate::morpheme::MorphemeId;

/// Index of a state in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u16);

impl StateId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the morphotactic graph.
///
/// Entering a state applies its morpheme; a word may end in a state only
/// when it is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphologicalState {
    /// Table name, e.g. `noun_S` or `nom_ST`.
    pub id: &'static str,
    pub morpheme: MorphemeId,
    pub terminal: bool,
}
