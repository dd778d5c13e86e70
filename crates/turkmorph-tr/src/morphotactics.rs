// Turkish morphotactics: the morpheme catalog and transition table.
//
// State names end in `_S` for non-terminal and `_ST` for terminal states.
// Table order is the order in which the analyzer tries transitions.

use turkmorph_core::{PhoneticAttribute, PrimaryPos, RootAttribute, StemKind};
use turkmorph_graph::{
    Condition, ConditionSpec, GraphBuilder, GraphError, MorphemeCategory, MorphotacticGraph,
};

use MorphemeCategory::*;

const MORPHEMES: &[(&str, &str, MorphemeCategory)] = &[
    ("Noun", "Noun", PartOfSpeech),
    ("Adj", "Adjective", PartOfSpeech),
    ("Verb", "Verb", PartOfSpeech),
    ("Adv", "Adverb", PartOfSpeech),
    ("Conj", "Conjunction", PartOfSpeech),
    ("Interj", "Interjection", PartOfSpeech),
    ("Postp", "PostPositive", PartOfSpeech),
    ("Det", "Determiner", PartOfSpeech),
    ("A1sg", "FirstPersonSingular", Agreement),
    ("A2sg", "SecondPersonSingular", Agreement),
    ("A3sg", "ThirdPersonSingular", Agreement),
    ("A1pl", "FirstPersonPlural", Agreement),
    ("A2pl", "SecondPersonPlural", Agreement),
    ("A3pl", "ThirdPersonPlural", Agreement),
    ("Pnon", "NoPossession", Possession),
    ("P1sg", "FirstPersonSingularPossessive", Possession),
    ("P2sg", "SecondPersonSingularPossessive", Possession),
    ("P3sg", "ThirdPersonSingularPossessive", Possession),
    ("P1pl", "FirstPersonPluralPossessive", Possession),
    ("P2pl", "SecondPersonPluralPossessive", Possession),
    ("P3pl", "ThirdPersonPluralPossessive", Possession),
    ("Nom", "Nominal", Case),
    ("Dat", "Dative", Case),
    ("Loc", "Locative", Case),
    ("Abl", "Ablative", Case),
    ("Gen", "Genitive", Case),
    ("Acc", "Accusative", Case),
    ("Ins", "Instrumental", Case),
    ("Equ", "Equal", Case),
    ("Dim", "Diminutive", Derivation),
    ("Ness", "Ness", Derivation),
    ("Agt", "Agentive", Derivation),
    ("With", "With", Derivation),
    ("Without", "Without", Derivation),
    ("Become", "Become", Derivation),
    ("Inf1", "Infinitive1", Derivation),
    ("Zero", "Zero", Derivation),
    ("Neg", "Negative", Polarity),
    ("Imp", "Imperative", TenseAspectMood),
    ("Past", "PastTense", TenseAspectMood),
    ("Narr", "NarrativeTense", TenseAspectMood),
    ("Prog1", "Progressive1", TenseAspectMood),
    ("Fut", "Future", TenseAspectMood),
    ("Aor", "Aorist", TenseAspectMood),
];

/// Morphemes whose presence forbids a further derivation.
const DERIVATIONS: [&str; 8] = ["Dim", "Ness", "Agt", "With", "Without", "Become", "Inf1", "Zero"];

/// Possessive states followed by the regular case suffixes.
const PLAIN_POSSESSIVES: [&str; 5] = ["pnon_S", "p1sg_S", "p2sg_S", "p1pl_S", "p2pl_S"];

/// Possessive states followed by the pronominal n.
const THIRD_PERSON_POSSESSIVES: [&str; 2] = ["p3sg_S", "p3pl_S"];

/// Finite verb states taking the common person endings.
const PERSON_TAKING_TENSES: [&str; 4] = ["vNarr_S", "vProg_S", "vFut_S", "vAor_S"];

/// Build the Turkish morphotactic graph.
///
/// The table is static, so an error here is a bug in the table itself.
pub fn turkish_graph() -> Result<MorphotacticGraph, GraphError> {
    let mut b = GraphBuilder::new();
    for &(id, name, category) in MORPHEMES {
        b.morpheme(id, name, category);
    }
    nouns(&mut b);
    adjectives(&mut b);
    verbs(&mut b);
    closed_classes(&mut b);
    b.build()
}

/// No derivation applied so far.
fn underived() -> ConditionSpec {
    DERIVATIONS
        .into_iter()
        .fold(Condition::Always, |c, m| c.and(Condition::NoPriorMorpheme(m)))
}

fn nouns(b: &mut GraphBuilder) {
    b.state("noun_S", "Noun")
        .state("nounInf_S", "Noun")
        .state("a3sg_S", "A3sg")
        .state("a3pl_S", "A3pl")
        .state("pnon_S", "Pnon")
        .state("p1sg_S", "P1sg")
        .state("p2sg_S", "P2sg")
        .state("p3sg_S", "P3sg")
        .state("p1pl_S", "P1pl")
        .state("p2pl_S", "P2pl")
        .state("p3pl_S", "P3pl")
        .terminal_state("nom_ST", "Nom")
        .terminal_state("dat_ST", "Dat")
        .terminal_state("loc_ST", "Loc")
        .terminal_state("abl_ST", "Abl")
        .terminal_state("gen_ST", "Gen")
        .terminal_state("acc_ST", "Acc")
        .terminal_state("ins_ST", "Ins")
        .terminal_state("equ_ST", "Equ")
        .state("dim_S", "Dim")
        .state("ness_S", "Ness")
        .state("agt_S", "Agt")
        .state("with_S", "With")
        .state("without_S", "Without")
        .root(PrimaryPos::Noun, StemKind::Regular, "noun_S");

    let implicit_plural = || Condition::HasRootAttribute(RootAttribute::ImplicitPlural);
    let not_implicit_plural = || Condition::NotRootAttribute(RootAttribute::ImplicitPlural);

    // Agreement.
    b.transition_if("noun_S", "a3sg_S", "", not_implicit_plural())
        .transition_if("noun_S", "a3pl_S", "lAr", not_implicit_plural())
        .transition_if("noun_S", "a3pl_S", "", implicit_plural());

    // Derivations, only on an underived noun.
    b.transition_if("noun_S", "dim_S", ">cI~k", underived())
        .transition_if("noun_S", "ness_S", "lI~k", underived())
        .transition_if("noun_S", "agt_S", ">cI", underived())
        .transition_if("noun_S", "with_S", "lI", underived())
        .transition_if("noun_S", "without_S", "sIz", underived());
    for derived in ["dim_S", "ness_S", "agt_S"] {
        b.transition(derived, "noun_S", "");
    }
    b.transition("with_S", "adj_ST", "")
        .transition("without_S", "adj_ST", "");

    // An infinitive is a singular noun.
    b.transition("nounInf_S", "a3sg_S", "");

    // Possession.
    for (agreement, p3pl) in [("a3sg_S", "lArI"), ("a3pl_S", "I")] {
        b.transition(agreement, "pnon_S", "")
            .transition(agreement, "p1sg_S", "+Im")
            .transition(agreement, "p2sg_S", "+In")
            .transition(agreement, "p3sg_S", "+sI")
            .transition(agreement, "p1pl_S", "+ImIz")
            .transition(agreement, "p2pl_S", "+InIz")
            .transition(agreement, "p3pl_S", p3pl);
    }

    // Case.
    b.transition_if(
        "pnon_S",
        "dat_ST",
        "",
        Condition::HasRootAttribute(RootAttribute::ImplicitDative),
    );
    for possessive in PLAIN_POSSESSIVES {
        b.transition(possessive, "nom_ST", "")
            .transition(possessive, "dat_ST", "+yA")
            .transition(possessive, "loc_ST", ">dA")
            .transition(possessive, "abl_ST", ">dAn")
            .transition(possessive, "gen_ST", "+nIn")
            .transition(possessive, "acc_ST", "+yI")
            .transition(possessive, "ins_ST", "+ylA")
            .transition(possessive, "equ_ST", ">cA");
    }
    for possessive in THIRD_PERSON_POSSESSIVES {
        b.transition(possessive, "nom_ST", "")
            .transition(possessive, "dat_ST", "nA")
            .transition(possessive, "loc_ST", "ndA")
            .transition(possessive, "abl_ST", "ndAn")
            .transition(possessive, "gen_ST", "nIn")
            .transition(possessive, "acc_ST", "nI")
            .transition(possessive, "ins_ST", "+ylA")
            .transition(possessive, "equ_ST", "ncA");
    }
}

fn adjectives(b: &mut GraphBuilder) {
    b.terminal_state("adj_ST", "Adj")
        .state("adjZero_S", "Zero")
        .state("adjNess_S", "Ness")
        .state("adjBecome_S", "Become")
        .root(PrimaryPos::Adjective, StemKind::Regular, "adj_ST");

    b.transition_if("adj_ST", "adjZero_S", "", Condition::NoPriorMorpheme("Zero"))
        .transition("adjZero_S", "noun_S", "")
        .transition_if("adj_ST", "adjNess_S", "lI~k", underived())
        .transition("adjNess_S", "noun_S", "")
        .transition_if("adj_ST", "adjBecome_S", "lA\u{015F}", underived())
        .transition("adjBecome_S", "verbRoot_S", "");
}

fn verbs(b: &mut GraphBuilder) {
    b.state("verbRoot_S", "Verb")
        .state("verbRoot_VowelDrop_S", "Verb")
        .state("vNeg_S", "Neg")
        .state("vNegProg_S", "Neg")
        .state("vImp_S", "Imp")
        .state("vPast_S", "Past")
        .state("vNarr_S", "Narr")
        .state("vProg_S", "Prog1")
        .state("vFut_S", "Fut")
        .state("vAor_S", "Aor")
        .state("vAorNeg_S", "Aor")
        .state("vAorNegFirst_S", "Aor")
        .state("vInf1_S", "Inf1")
        .terminal_state("vA1sg_ST", "A1sg")
        .terminal_state("vA2sg_ST", "A2sg")
        .terminal_state("vA3sg_ST", "A3sg")
        .terminal_state("vA1pl_ST", "A1pl")
        .terminal_state("vA2pl_ST", "A2pl")
        .terminal_state("vA3pl_ST", "A3pl")
        .root(PrimaryPos::Verb, StemKind::Regular, "verbRoot_S")
        .root(PrimaryPos::Verb, StemKind::ProgressiveDrop, "verbRoot_VowelDrop_S");

    // Polarity. The progressive takes a bare `m` as negation: gel-m-iyor.
    b.transition("verbRoot_S", "vNeg_S", "mA")
        .transition("verbRoot_S", "vNegProg_S", "m");

    // Tenses on the positive and negative stems.
    for stem in ["verbRoot_S", "vNeg_S"] {
        b.transition(stem, "vImp_S", "")
            .transition(stem, "vPast_S", ">dI")
            .transition(stem, "vNarr_S", "mI\u{015F}")
            .transition(stem, "vFut_S", "+yAcA~k")
            .transition(stem, "vInf1_S", "mA~k");
    }
    b.transition_if(
        "verbRoot_S",
        "vProg_S",
        "Iyor",
        Condition::HasPhonetic(PhoneticAttribute::LastLetterConsonant),
    )
    .transition("verbRoot_VowelDrop_S", "vProg_S", "Iyor")
    .transition("vNegProg_S", "vProg_S", "Iyor");

    let aorist_a = Condition::HasRootAttribute(RootAttribute::AoristA)
        .and(Condition::NoPriorMorpheme("Become"));
    let aorist_i = Condition::HasRootAttribute(RootAttribute::AoristI)
        .or(Condition::PriorMorpheme("Become"));
    b.transition_if("verbRoot_S", "vAor_S", "+Ar", aorist_a)
        .transition_if("verbRoot_S", "vAor_S", "+Ir", aorist_i);

    // Negative aorist: gel-me-z, gel-me-m, gel-me-yiz.
    b.transition("vNeg_S", "vAorNeg_S", "z")
        .transition("vNeg_S", "vAorNegFirst_S", "")
        .transition("vAorNeg_S", "vA2sg_ST", "sIn")
        .transition("vAorNeg_S", "vA3sg_ST", "")
        .transition("vAorNeg_S", "vA2pl_ST", "sInIz")
        .transition("vAorNeg_S", "vA3pl_ST", "lAr")
        .transition("vAorNegFirst_S", "vA1sg_ST", "m")
        .transition("vAorNegFirst_S", "vA1pl_ST", "yIz");

    // Person endings.
    b.transition("vImp_S", "vA2sg_ST", "")
        .transition("vImp_S", "vA2pl_ST", "+yIn")
        .transition("vImp_S", "vA3sg_ST", "sIn")
        .transition("vImp_S", "vA3pl_ST", "sInlAr");
    b.transition("vPast_S", "vA1sg_ST", "m")
        .transition("vPast_S", "vA2sg_ST", "n")
        .transition("vPast_S", "vA3sg_ST", "")
        .transition("vPast_S", "vA1pl_ST", "k")
        .transition("vPast_S", "vA2pl_ST", "nIz")
        .transition("vPast_S", "vA3pl_ST", "lAr");
    for tense in PERSON_TAKING_TENSES {
        b.transition(tense, "vA1sg_ST", "+Im")
            .transition(tense, "vA2sg_ST", "sIn")
            .transition(tense, "vA3sg_ST", "")
            .transition(tense, "vA1pl_ST", "+Iz")
            .transition(tense, "vA2pl_ST", "sInIz")
            .transition(tense, "vA3pl_ST", "lAr");
    }

    // Infinitive: gel-mek, gel-meğ-e.
    b.transition("vInf1_S", "nounInf_S", "");
}

fn closed_classes(b: &mut GraphBuilder) {
    for (pos, state, morpheme) in [
        (PrimaryPos::Adverb, "adv_ST", "Adv"),
        (PrimaryPos::Conjunction, "conj_ST", "Conj"),
        (PrimaryPos::Interjection, "interj_ST", "Interj"),
        (PrimaryPos::PostPositive, "postp_ST", "Postp"),
        (PrimaryPos::Determiner, "det_ST", "Det"),
    ] {
        b.terminal_state(state, morpheme)
            .root(pos, StemKind::Regular, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_builds() {
        let graph = turkish_graph().unwrap();
        assert_eq!(graph.morphemes().len(), MORPHEMES.len());
        for pos in PrimaryPos::ALL {
            assert!(
                graph.root_state(pos, StemKind::Regular).is_some(),
                "no root for {pos}"
            );
        }
        assert!(
            graph
                .root_state(PrimaryPos::Verb, StemKind::ProgressiveDrop)
                .is_some()
        );
    }

    #[test]
    fn terminal_states_follow_naming() {
        let graph = turkish_graph().unwrap();
        for state in graph.states() {
            assert_eq!(state.terminal, state.id.ends_with("_ST"), "{}", state.id);
        }
    }

    #[test]
    fn voicing_tails_are_split() {
        let graph = turkish_graph().unwrap();
        let noun = graph.state_id("noun_S").unwrap();
        let dim = graph.state_id("dim_S").unwrap();
        let dims = graph.outgoing(noun).iter().filter(|t| t.to == dim).count();
        assert_eq!(dims, 2);
    }

    #[test]
    fn closed_classes_take_no_suffixes() {
        let graph = turkish_graph().unwrap();
        for pos in PrimaryPos::ALL.into_iter().filter(|p| p.is_uninflected()) {
            let state = graph.root_state(pos, StemKind::Regular).unwrap();
            assert!(graph.is_terminal(state));
            assert!(graph.outgoing(state).is_empty());
        }
    }
}
