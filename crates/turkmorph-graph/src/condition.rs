// Transition applicability predicates.
//
// Conditions are plain data: the morphotactic table writes them with
// morpheme names (`ConditionSpec`), and the graph builder resolves the names
// to ids once. Evaluation only reads the search path through `PathContext`.

use turkmorph_core::{AttributeSet, PhoneticAttribute, RootAttribute, RootAttributes};

use crate::morpheme::MorphemeId;

/// The view of a search path that conditions may inspect.
pub trait PathContext {
    /// Phonetic attributes of the surface consumed so far.
    fn phonetic_attributes(&self) -> AttributeSet;
    /// Attributes of the dictionary item at the start of the path.
    fn root_attributes(&self) -> RootAttributes;
    /// Whether the path already applied `morpheme`.
    fn has_prior_morpheme(&self, morpheme: MorphemeId) -> bool;
}

/// A predicate deciding whether a transition may be taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition<M = MorphemeId> {
    Always,
    HasPhonetic(PhoneticAttribute),
    NotPhonetic(PhoneticAttribute),
    HasRootAttribute(RootAttribute),
    NotRootAttribute(RootAttribute),
    PriorMorpheme(M),
    NoPriorMorpheme(M),
    And(Vec<Condition<M>>),
    Or(Vec<Condition<M>>),
    Not(Box<Condition<M>>),
}

/// A condition as written in a transition table, naming morphemes by id.
pub type ConditionSpec = Condition<&'static str>;

impl<M> Condition<M> {
    /// Conjunction, flattening nested `And`s.
    #[must_use]
    pub fn and(self, other: Condition<M>) -> Condition<M> {
        match (self, other) {
            (Condition::Always, c) | (c, Condition::Always) => c,
            (Condition::And(mut a), Condition::And(b)) => {
                a.extend(b);
                Condition::And(a)
            }
            (Condition::And(mut a), c) => {
                a.push(c);
                Condition::And(a)
            }
            (c, Condition::And(mut b)) => {
                b.insert(0, c);
                Condition::And(b)
            }
            (a, b) => Condition::And(vec![a, b]),
        }
    }

    /// Disjunction.
    #[must_use]
    pub fn or(self, other: Condition<M>) -> Condition<M> {
        match self {
            Condition::Or(mut a) => {
                a.push(other);
                Condition::Or(a)
            }
            c => Condition::Or(vec![c, other]),
        }
    }

    /// Map morpheme references, failing on the first unresolvable one.
    pub fn try_map<N, E>(
        self,
        f: &mut impl FnMut(M) -> Result<N, E>,
    ) -> Result<Condition<N>, E> {
        Ok(match self {
            Condition::Always => Condition::Always,
            Condition::HasPhonetic(a) => Condition::HasPhonetic(a),
            Condition::NotPhonetic(a) => Condition::NotPhonetic(a),
            Condition::HasRootAttribute(a) => Condition::HasRootAttribute(a),
            Condition::NotRootAttribute(a) => Condition::NotRootAttribute(a),
            Condition::PriorMorpheme(m) => Condition::PriorMorpheme(f(m)?),
            Condition::NoPriorMorpheme(m) => Condition::NoPriorMorpheme(f(m)?),
            Condition::And(cs) => Condition::And(
                cs.into_iter()
                    .map(|c| c.try_map(&mut *f))
                    .collect::<Result<_, _>>()?,
            ),
            Condition::Or(cs) => Condition::Or(
                cs.into_iter()
                    .map(|c| c.try_map(&mut *f))
                    .collect::<Result<_, _>>()?,
            ),
            Condition::Not(c) => Condition::Not(Box::new(c.try_map(f)?)),
        })
    }
}

impl Condition<MorphemeId> {
    pub fn accepts(&self, ctx: &impl PathContext) -> bool {
        match self {
            Condition::Always => true,
            Condition::HasPhonetic(a) => ctx.phonetic_attributes().contains(*a),
            Condition::NotPhonetic(a) => !ctx.phonetic_attributes().contains(*a),
            Condition::HasRootAttribute(a) => ctx.root_attributes().contains(*a),
            Condition::NotRootAttribute(a) => !ctx.root_attributes().contains(*a),
            Condition::PriorMorpheme(m) => ctx.has_prior_morpheme(*m),
            Condition::NoPriorMorpheme(m) => !ctx.has_prior_morpheme(*m),
            Condition::And(cs) => cs.iter().all(|c| c.accepts(ctx)),
            Condition::Or(cs) => cs.iter().any(|c| c.accepts(ctx)),
            Condition::Not(c) => !c.accepts(ctx),
        }
    }
}
