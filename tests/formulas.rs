use std::collections::{BTreeMap, BTreeSet};

use tableau_taxonomy::{
    generic::formula_randomizer::FormulaRandomizer,
    structures::{
        atom::Atom,
        branch::Branch,
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

const NAMES: [&str; 4] = ["p", "q", "r", "s"];

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every valuation of `atoms`.
fn valuations(atoms: &BTreeSet<Atom>) -> Vec<BTreeMap<Atom, bool>> {
    let atoms = atoms.iter().collect::<Vec<_>>();
    (0..(1_usize << atoms.len()))
        .map(|mask| {
            atoms
                .iter()
                .enumerate()
                .map(|(index, atom)| ((*atom).clone(), mask & (1 << index) != 0))
                .collect()
        })
        .collect()
}

fn all_atoms() -> BTreeSet<Atom> {
    NAMES.iter().map(|name| Atom::from(*name)).collect()
}

/// True if `valuation` agrees with every literal on `branch`.
fn extends(valuation: &BTreeMap<Atom, bool>, branch: &Branch) -> bool {
    branch
        .literals()
        .all(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
}

/// Checks the branches of some formula whose value on a (full) valuation is given by `value`.
///
/// - Every branch entails the formula.
/// - Every model of the formula extends some branch.
fn assert_branches_cover(branches: &[Branch], value: impl Fn(&BTreeMap<Atom, bool>) -> bool) {
    for valuation in valuations(&all_atoms()) {
        let extended = branches.iter().any(|branch| extends(&valuation, branch));
        assert_eq!(extended, value(&valuation));
    }
}

mod leaf {
    use super::*;

    #[test]
    fn dnf_contract() {
        let x = Formula::atom("x");
        assert_eq!(x.to_dnf(), x);
        assert_eq!(x.negated_dnf(), Formula::negate(x.clone()));
    }

    #[test]
    fn branch_contract() {
        let x = Formula::atom("x");

        let branches = x.branches();
        assert_eq!(branches.len(), 1);
        assert_eq!(
            branches[0].literals().collect::<Vec<_>>(),
            vec![CLiteral::new(Atom::from("x"), true)]
        );

        let negated = x.negated_branches();
        assert_eq!(negated.len(), 1);
        assert_eq!(
            negated[0].literals().collect::<Vec<_>>(),
            vec![CLiteral::new(Atom::from("x"), false)]
        );
    }
}

mod random {
    use super::*;

    const SEEDS: u64 = 200;
    const DEPTH: usize = 3;

    #[test]
    fn dnf_is_equivalent() {
        init_logs();
        for seed in 0..SEEDS {
            let formula = FormulaRandomizer::from_seed(seed, &NAMES, DEPTH).formula();
            let dnf = formula.to_dnf();

            assert!(dnf.is_dnf(), "{formula} ↦ {dnf}");
            for valuation in valuations(&all_atoms()) {
                assert_eq!(formula.evaluate(&valuation), dnf.evaluate(&valuation));
            }
        }
    }

    #[test]
    fn negated_dnf_is_equivalent_to_negation() {
        for seed in 0..SEEDS {
            let formula = FormulaRandomizer::from_seed(seed, &NAMES, DEPTH).formula();
            let negated = formula.negated_dnf();

            assert!(negated.is_dnf(), "{formula} ↦ {negated}");
            assert_eq!(negated, Formula::negate(formula.clone()).to_dnf());
            for valuation in valuations(&all_atoms()) {
                assert_eq!(
                    formula.evaluate(&valuation).map(|value| !value),
                    negated.evaluate(&valuation)
                );
            }
        }
    }

    #[test]
    fn branches_cover_models() {
        init_logs();
        for seed in 0..SEEDS {
            let formula = FormulaRandomizer::from_seed(seed, &NAMES, DEPTH).formula();

            assert_branches_cover(&formula.branches(), |valuation| {
                formula.evaluate(valuation) == Some(true)
            });
        }
    }

    #[test]
    fn negated_branches_cover_countermodels() {
        for seed in 0..SEEDS {
            let formula = FormulaRandomizer::from_seed(seed, &NAMES, DEPTH).formula();

            assert_branches_cover(&formula.negated_branches(), |valuation| {
                formula.evaluate(valuation) == Some(false)
            });
        }
    }

    #[test]
    fn closed_tableau_iff_unsatisfiable() {
        for seed in 0..SEEDS {
            let formula = FormulaRandomizer::from_seed(seed, &NAMES, DEPTH).formula();

            let satisfiable = valuations(&all_atoms())
                .iter()
                .any(|valuation| formula.evaluate(valuation) == Some(true));

            assert_eq!(!formula.branches().is_empty(), satisfiable, "{formula}");
        }
    }
}
