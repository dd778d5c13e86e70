// Graph construction, validation and queries.

use hashbrown::HashMap;
use turkmorph_core::{PrimaryPos, StemKind};

use crate::GraphError;
use crate::condition::{ConditionSpec, PathContext};
use crate::morpheme::{Morpheme, MorphemeCategory, MorphemeId};
use crate::state::{MorphologicalState, StateId};
use crate::template::SuffixTemplate;
use crate::transition::{MorphemeTransition, TailForm};

struct StateSpec {
    id: &'static str,
    morpheme: &'static str,
    terminal: bool,
}

struct TransitionSpec {
    from: &'static str,
    to: &'static str,
    template: &'static str,
    condition: ConditionSpec,
}

/// Collects a transition table by name and validates it in [`build`].
///
/// Names are only resolved at build time, so the table can be written in
/// any order.
///
/// [`build`]: GraphBuilder::build
#[derive(Default)]
pub struct GraphBuilder {
    morphemes: Vec<Morpheme>,
    states: Vec<StateSpec>,
    transitions: Vec<TransitionSpec>,
    roots: Vec<(PrimaryPos, StemKind, &'static str)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn morpheme(
        &mut self,
        id: &'static str,
        name: &'static str,
        category: MorphemeCategory,
    ) -> &mut Self {
        self.morphemes.push(Morpheme::new(id, name, category));
        self
    }

    /// Add a non-terminal state applying `morpheme`.
    pub fn state(&mut self, id: &'static str, morpheme: &'static str) -> &mut Self {
        self.states.push(StateSpec {
            id,
            morpheme,
            terminal: false,
        });
        self
    }

    /// Add a state at which a word may end.
    pub fn terminal_state(&mut self, id: &'static str, morpheme: &'static str) -> &mut Self {
        self.states.push(StateSpec {
            id,
            morpheme,
            terminal: true,
        });
        self
    }

    /// Add an unconditional transition.
    pub fn transition(
        &mut self,
        from: &'static str,
        to: &'static str,
        template: &'static str,
    ) -> &mut Self {
        self.transition_if(from, to, template, ConditionSpec::Always)
    }

    pub fn transition_if(
        &mut self,
        from: &'static str,
        to: &'static str,
        template: &'static str,
        condition: ConditionSpec,
    ) -> &mut Self {
        self.transitions.push(TransitionSpec {
            from,
            to,
            template,
            condition,
        });
        self
    }

    /// Declare the initial state for stems of a category and kind.
    pub fn root(&mut self, pos: PrimaryPos, kind: StemKind, state: &'static str) -> &mut Self {
        self.roots.push((pos, kind, state));
        self
    }

    /// Resolve all names and validate the table.
    pub fn build(self) -> Result<MorphotacticGraph, GraphError> {
        let mut morpheme_index: HashMap<&'static str, MorphemeId> = HashMap::new();
        for (i, m) in self.morphemes.iter().enumerate() {
            if morpheme_index.insert(m.id, MorphemeId(i as u16)).is_some() {
                return Err(GraphError::DuplicateMorpheme(m.id));
            }
        }

        let mut state_index: HashMap<&'static str, StateId> = HashMap::new();
        let mut states = Vec::with_capacity(self.states.len());
        for spec in &self.states {
            let morpheme = morpheme_index.get(spec.morpheme).copied().ok_or_else(|| {
                GraphError::UnknownMorpheme {
                    context: format!("state {}", spec.id),
                    morpheme: spec.morpheme,
                }
            })?;
            let id = StateId(states.len() as u16);
            if state_index.insert(spec.id, id).is_some() {
                return Err(GraphError::DuplicateState(spec.id));
            }
            states.push(MorphologicalState {
                id: spec.id,
                morpheme,
                terminal: spec.terminal,
            });
        }

        let mut outgoing: Vec<Vec<MorphemeTransition>> = vec![Vec::new(); states.len()];
        for spec in self.transitions {
            let (from_name, to_name) = (spec.from, spec.to);
            let lookup = |name: &'static str| {
                state_index
                    .get(name)
                    .copied()
                    .ok_or(GraphError::UnknownState {
                        from: from_name,
                        to: to_name,
                        missing: name,
                    })
            };
            let from = lookup(from_name)?;
            let to = lookup(to_name)?;
            let template =
                SuffixTemplate::parse(spec.template).map_err(|source| GraphError::InvalidTemplate {
                    from: from_name,
                    to: to_name,
                    template: spec.template,
                    source,
                })?;
            let condition = spec.condition.try_map(&mut |name| {
                morpheme_index
                    .get(name)
                    .copied()
                    .ok_or_else(|| GraphError::UnknownMorpheme {
                        context: format!("condition of {from_name} -> {to_name}"),
                        morpheme: name,
                    })
            })?;

            let morpheme = states[to.index()].morpheme;
            let tails: &[TailForm] = if template.has_voicing_tail() {
                &[TailForm::Plain, TailForm::Voiced]
            } else {
                &[TailForm::Fixed]
            };
            for &tail in tails {
                outgoing[from.index()].push(MorphemeTransition {
                    from,
                    to,
                    morpheme,
                    template: template.clone(),
                    tail,
                    condition: condition.clone(),
                });
            }
        }

        if self.roots.is_empty() {
            return Err(GraphError::MissingRoot);
        }
        let mut roots = HashMap::new();
        for (pos, kind, name) in self.roots {
            let state = state_index
                .get(name)
                .copied()
                .ok_or(GraphError::UnknownRootState {
                    pos,
                    kind,
                    state: name,
                })?;
            roots.insert((pos, kind), state);
        }

        let graph = MorphotacticGraph {
            morphemes: self.morphemes,
            morpheme_index,
            states,
            state_index,
            outgoing,
            roots,
        };

        if let Some(unreachable) = graph.first_unreachable_state() {
            return Err(GraphError::UnreachableState(unreachable));
        }
        if let Some(cycle) = graph.find_empty_cycle() {
            return Err(GraphError::EmptyCycle(cycle));
        }

        Ok(graph)
    }
}

/// A validated, immutable morphotactic graph.
///
/// Transitions of a state keep their table order, so every traversal visits
/// them in the same sequence.
#[derive(Debug)]
pub struct MorphotacticGraph {
    morphemes: Vec<Morpheme>,
    morpheme_index: HashMap<&'static str, MorphemeId>,
    states: Vec<MorphologicalState>,
    state_index: HashMap<&'static str, StateId>,
    outgoing: Vec<Vec<MorphemeTransition>>,
    roots: HashMap<(PrimaryPos, StemKind), StateId>,
}

impl MorphotacticGraph {
    pub fn morpheme(&self, id: MorphemeId) -> &Morpheme {
        &self.morphemes[id.index()]
    }

    pub fn morpheme_id(&self, name: &str) -> Option<MorphemeId> {
        self.morpheme_index.get(name).copied()
    }

    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    pub fn state(&self, id: StateId) -> &MorphologicalState {
        &self.states[id.index()]
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.state_index.get(name).copied()
    }

    pub fn states(&self) -> &[MorphologicalState] {
        &self.states
    }

    pub fn is_terminal(&self, id: StateId) -> bool {
        self.states[id.index()].terminal
    }

    /// All outgoing transitions of a state, in table order.
    pub fn outgoing(&self, id: StateId) -> &[MorphemeTransition] {
        &self.outgoing[id.index()]
    }

    /// Outgoing transitions whose condition holds for `ctx`.
    pub fn outgoing_transitions<'a, C: PathContext>(
        &'a self,
        id: StateId,
        ctx: &'a C,
    ) -> impl Iterator<Item = &'a MorphemeTransition> + 'a {
        self.outgoing[id.index()]
            .iter()
            .filter(move |t| t.is_applicable(ctx))
    }

    /// Initial state for a stem of the given category and kind.
    pub fn root_state(&self, pos: PrimaryPos, kind: StemKind) -> Option<StateId> {
        self.roots.get(&(pos, kind)).copied()
    }

    pub fn transition_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    /// Human-readable edge description, e.g. `noun_S -> dim_S [>cI~k voiced]`.
    pub fn describe(&self, transition: &MorphemeTransition) -> String {
        let tail = match transition.tail {
            TailForm::Fixed => "",
            TailForm::Plain => " plain",
            TailForm::Voiced => " voiced",
        };
        format!(
            "{} -> {} [{}{}]",
            self.state(transition.from).id,
            self.state(transition.to).id,
            transition.template,
            tail
        )
    }

    fn first_unreachable_state(&self) -> Option<&'static str> {
        let mut seen = vec![false; self.states.len()];
        let mut queue: Vec<StateId> = self.roots.values().copied().collect();
        for s in &queue {
            seen[s.index()] = true;
        }
        while let Some(s) = queue.pop() {
            for t in &self.outgoing[s.index()] {
                if !seen[t.to.index()] {
                    seen[t.to.index()] = true;
                    queue.push(t.to);
                }
            }
        }
        seen.iter()
            .position(|&reached| !reached)
            .map(|i| self.states[i].id)
    }

    /// Find a cycle made of transitions that may produce an empty surface.
    /// Such a cycle would let the search loop without consuming input.
    fn find_empty_cycle(&self) -> Option<Vec<&'static str>> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        fn visit(
            graph: &MorphotacticGraph,
            s: usize,
            marks: &mut [Mark],
            stack: &mut Vec<usize>,
        ) -> Option<Vec<&'static str>> {
            marks[s] = Mark::Active;
            stack.push(s);
            for t in &graph.outgoing[s] {
                if !t.template.can_be_empty() {
                    continue;
                }
                let next = t.to.index();
                match marks[next] {
                    Mark::Active => {
                        let start = stack.iter().position(|&x| x == next).unwrap_or(0);
                        return Some(stack[start..].iter().map(|&i| graph.states[i].id).collect());
                    }
                    Mark::New => {
                        if let Some(cycle) = visit(graph, next, marks, stack) {
                            return Some(cycle);
                        }
                    }
                    Mark::Done => {}
                }
            }
            stack.pop();
            marks[s] = Mark::Done;
            None
        }

        let mut marks = vec![Mark::New; self.states.len()];
        let mut stack = Vec::new();
        for s in 0..self.states.len() {
            if marks[s] == Mark::New {
                if let Some(cycle) = visit(self, s, &mut marks, &mut stack) {
                    return Some(cycle);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use turkmorph_core::{AttributeSet, PhoneticAttribute, RootAttributes};

    struct Ctx(AttributeSet);

    impl PathContext for Ctx {
        fn phonetic_attributes(&self) -> AttributeSet {
            self.0
        }
        fn root_attributes(&self) -> RootAttributes {
            RootAttributes::EMPTY
        }
        fn has_prior_morpheme(&self, _: MorphemeId) -> bool {
            false
        }
    }

    fn small_table() -> GraphBuilder {
        let mut b = GraphBuilder::new();
        b.morpheme("Noun", "Noun", MorphemeCategory::PartOfSpeech)
            .morpheme("A3sg", "Singular", MorphemeCategory::Agreement)
            .morpheme("A3pl", "Plural", MorphemeCategory::Agreement)
            .morpheme("Dim", "Diminutive", MorphemeCategory::Derivation)
            .state("noun_S", "Noun")
            .state("dim_S", "Dim")
            .terminal_state("a3sg_ST", "A3sg")
            .terminal_state("a3pl_ST", "A3pl")
            .transition("noun_S", "a3sg_ST", "")
            .transition_if(
                "noun_S",
                "a3pl_ST",
                "lAr",
                Condition::NotPhonetic(PhoneticAttribute::ExpectsVowel),
            )
            .transition_if("noun_S", "dim_S", ">cI~k", Condition::NoPriorMorpheme("Dim"))
            .transition("dim_S", "noun_S", "")
            .root(PrimaryPos::Noun, StemKind::Regular, "noun_S");
        b
    }

    #[test]
    fn builds_and_queries() {
        let g = small_table().build().unwrap();
        let noun = g.state_id("noun_S").unwrap();
        assert_eq!(g.root_state(PrimaryPos::Noun, StemKind::Regular), Some(noun));
        assert_eq!(g.root_state(PrimaryPos::Verb, StemKind::Regular), None);
        assert!(!g.is_terminal(noun));
        assert!(g.is_terminal(g.state_id("a3pl_ST").unwrap()));
        // The voicing tail doubles the Dim edge.
        assert_eq!(g.outgoing(noun).len(), 4);
        assert_eq!(g.transition_count(), 5);
        assert_eq!(g.morpheme(g.state(noun).morpheme).id, "Noun");
        assert_eq!(g.morphemes().len(), 4);
    }

    #[test]
    fn table_order_is_kept() {
        let g = small_table().build().unwrap();
        let noun = g.state_id("noun_S").unwrap();
        let described: Vec<String> = g.outgoing(noun).iter().map(|t| g.describe(t)).collect();
        assert_eq!(
            described,
            vec![
                "noun_S -> a3sg_ST [\u{2205}]",
                "noun_S -> a3pl_ST [lAr]",
                "noun_S -> dim_S [>cI~k plain]",
                "noun_S -> dim_S [>cI~k voiced]",
            ]
        );
    }

    #[test]
    fn filters_by_condition() {
        let g = small_table().build().unwrap();
        let noun = g.state_id("noun_S").unwrap();
        let ctx = Ctx(AttributeSet::of(&[PhoneticAttribute::ExpectsVowel]));
        let targets: Vec<&str> = g
            .outgoing_transitions(noun, &ctx)
            .map(|t| g.state(t.to).id)
            .collect();
        assert_eq!(targets, vec!["a3sg_ST", "dim_S", "dim_S"]);
    }

    #[test]
    fn unknown_state_is_reported() {
        let mut b = small_table();
        b.transition("noun_S", "p1sg_S", "+Im");
        match b.build() {
            Err(GraphError::UnknownState { missing, .. }) => assert_eq!(missing, "p1sg_S"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_morpheme_is_reported() {
        let mut b = small_table();
        b.transition_if("noun_S", "a3sg_ST", "", Condition::NoPriorMorpheme("Ness"));
        match b.build() {
            Err(GraphError::UnknownMorpheme { morpheme, .. }) => assert_eq!(morpheme, "Ness"),
            other => panic!("unexpected {other:?}"),
        }

        let mut b = small_table();
        b.state("p1sg_S", "P1sg");
        assert!(matches!(b.build(), Err(GraphError::UnknownMorpheme { .. })));
    }

    #[test]
    fn invalid_template_is_reported() {
        let mut b = small_table();
        b.transition("noun_S", "a3pl_ST", "l?r");
        assert!(matches!(b.build(), Err(GraphError::InvalidTemplate { .. })));
    }

    #[test]
    fn duplicates_are_reported() {
        let mut b = small_table();
        b.state("noun_S", "Noun");
        assert!(matches!(b.build(), Err(GraphError::DuplicateState("noun_S"))));

        let mut b = small_table();
        b.morpheme("Dim", "Again", MorphemeCategory::Derivation);
        assert!(matches!(b.build(), Err(GraphError::DuplicateMorpheme("Dim"))));
    }

    #[test]
    fn unreachable_state_is_reported() {
        let mut b = small_table();
        b.terminal_state("orphan_ST", "A3sg");
        assert!(matches!(b.build(), Err(GraphError::UnreachableState("orphan_ST"))));
    }

    #[test]
    fn empty_cycle_is_reported() {
        let mut b = small_table();
        b.transition("dim_S", "noun_S", "").transition("noun_S", "dim_S", "");
        match b.build() {
            Err(GraphError::EmptyCycle(states)) => {
                assert!(states.contains(&"noun_S"));
                assert!(states.contains(&"dim_S"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_roots_are_reported() {
        let mut b = GraphBuilder::new();
        b.morpheme("Noun", "Noun", MorphemeCategory::PartOfSpeech)
            .state("noun_S", "Noun");
        assert!(matches!(b.build(), Err(GraphError::MissingRoot)));

        let mut b = small_table();
        b.root(PrimaryPos::Verb, StemKind::Regular, "verb_S");
        assert!(matches!(b.build(), Err(GraphError::UnknownRootState { .. })));
    }
}
