//! Analytic tableau branches.
//!
//! The branches of a formula are a collection of [Branch]es such that the formula is equivalent to the disjunction of the (conjunction of the literals on each) branch.
//!
//! - The branches of a conjunction are the pairwise merges of the branches of each conjunct, where any merge which would close a branch is discarded.
//! - The branches of a disjunction are the branches of each disjunct.
//! - The branches of a negation are the negated branches of the negated formula.
//!
//! Closed branches are discarded as soon as they are found, and so an empty collection of branches signals every branch of the tableau closed, i.e. the formula is unsatisfiable.
//! Closure propagates: a conjunct without branches leaves the conjunction without branches.
//!
//! No attempt is made to remove duplicate or subsumed branches.

use crate::{
    misc::log::targets,
    structures::{
        branch::{product, Branch},
        formula::Formula,
        literal::{CLiteral, Literal},
    },
};

impl Formula {
    /// The open branches of an analytic tableau for the formula.
    ///
    /// The only branch of an atom asserts the atom.
    pub fn branches(&self) -> Vec<Branch> {
        match self {
            Formula::Atom(atom) => vec![Branch::from(CLiteral::new(atom.clone(), true))],

            Formula::Not(inner) => inner.negated_branches(),

            Formula::And(formulas) => conjoin(formulas.iter().map(|f| f.branches())),

            Formula::Or(formulas) => formulas.iter().flat_map(|f| f.branches()).collect(),

            Formula::Implies(a, b) => {
                let mut branches = a.negated_branches();
                branches.extend(b.branches());
                branches
            }

            Formula::Equiv(a, b) => {
                let mut branches = product(&a.branches(), &b.branches());
                branches.extend(product(&a.negated_branches(), &b.negated_branches()));
                branches
            }
        }
    }

    /// The open branches of an analytic tableau for the negation of the formula.
    ///
    /// The only negated branch of an atom negates the atom.
    pub fn negated_branches(&self) -> Vec<Branch> {
        match self {
            Formula::Atom(atom) => vec![Branch::from(CLiteral::new(atom.clone(), false))],

            Formula::Not(inner) => inner.branches(),

            Formula::And(formulas) => formulas.iter().flat_map(|f| f.negated_branches()).collect(),

            Formula::Or(formulas) => conjoin(formulas.iter().map(|f| f.negated_branches())),

            Formula::Implies(a, b) => product(&a.branches(), &b.negated_branches()),

            Formula::Equiv(a, b) => {
                let mut branches = product(&a.branches(), &b.negated_branches());
                branches.extend(product(&a.negated_branches(), &b.branches()));
                branches
            }
        }
    }
}

/// The branches of a conjunction, given the branches of each conjunct.
///
/// Conjuncts are examined lazily, and once every branch has closed no further conjunct is examined.
fn conjoin(conjunct_branches: impl Iterator<Item = Vec<Branch>>) -> Vec<Branch> {
    let mut branches = vec![Branch::default()];

    for conjunct in conjunct_branches {
        let candidates = branches.len() * conjunct.len();
        branches = product(&branches, &conjunct);

        log::trace!(target: targets::TABLEAU, "Closed {} of {candidates} branches", candidates - branches.len());

        if branches.is_empty() {
            break;
        }
    }

    branches
}
