//! Disjunctive normal form.
//!
//! A formula is in DNF if it is a disjunction of *terms*, where a term is a conjunction of literals.
//! By convention, a single term is not wrapped in a disjunction and a single literal is not wrapped in a conjunction.
//!
//! Conversion is top-down.
//! When a negation is met, the negated DNF of the negated formula is requested, and so a negation is never pushed through a DNF which has already been built.
//!
//! Internally, a DNF is split into terms, and:
//! - The terms of a disjunction are the terms of each disjunct.
//! - The terms of a conjunction are the pairwise conjunctions of the terms of each conjunct (aka. distribution).
//!
//! No simplification takes place.
//! In particular, a term may contain both a literal and its negation.

use crate::{misc::log::targets, structures::formula::Formula};

/// The terms of a DNF, each a collection of literals.
type Terms = Vec<Vec<Formula>>;

impl Formula {
    /// A formula in disjunctive normal form, equivalent to the formula.
    ///
    /// An atom is already in DNF, and so the DNF of an atom is the atom.
    pub fn to_dnf(&self) -> Formula {
        match self {
            Formula::Atom(_) => self.clone(),

            Formula::Not(inner) => inner.negated_dnf(),

            Formula::And(formulas) => from_terms(conjoin(formulas.iter().map(|f| f.to_dnf()))),

            Formula::Or(formulas) => from_terms(disjoin(formulas.iter().map(|f| f.to_dnf()))),

            Formula::Implies(a, b) => from_terms(disjoin([a.negated_dnf(), b.to_dnf()])),

            Formula::Equiv(a, b) => {
                let mut terms = conjoin([a.to_dnf(), b.to_dnf()]);
                terms.extend(conjoin([a.negated_dnf(), b.negated_dnf()]));
                from_terms(terms)
            }
        }
    }

    /// A formula in disjunctive normal form, equivalent to the negation of the formula.
    ///
    /// As an atom has no structure to push a negation through, the negated DNF of an atom is the negation of the atom.
    pub fn negated_dnf(&self) -> Formula {
        match self {
            Formula::Atom(_) => Formula::negate(self.clone()),

            Formula::Not(inner) => inner.to_dnf(),

            Formula::And(formulas) => {
                from_terms(disjoin(formulas.iter().map(|f| f.negated_dnf())))
            }

            Formula::Or(formulas) => {
                from_terms(conjoin(formulas.iter().map(|f| f.negated_dnf())))
            }

            Formula::Implies(a, b) => from_terms(conjoin([a.to_dnf(), b.negated_dnf()])),

            Formula::Equiv(a, b) => {
                let mut terms = conjoin([a.to_dnf(), b.negated_dnf()]);
                terms.extend(conjoin([a.negated_dnf(), b.to_dnf()]));
                from_terms(terms)
            }
        }
    }

    /// True if the formula is in disjunctive normal form.
    pub fn is_dnf(&self) -> bool {
        match self {
            Formula::Or(terms) => terms.iter().all(is_term),
            _ => is_term(self),
        }
    }
}

fn is_term(formula: &Formula) -> bool {
    match formula {
        Formula::And(literals) => literals.iter().all(|l| l.as_literal().is_some()),
        _ => formula.as_literal().is_some(),
    }
}

/// The terms of a formula in DNF.
fn terms_of(dnf: Formula) -> Terms {
    match dnf {
        Formula::Or(terms) => terms.into_iter().map(term_of).collect(),
        _ => vec![term_of(dnf)],
    }
}

fn term_of(term: Formula) -> Vec<Formula> {
    match term {
        Formula::And(literals) => literals,
        literal => vec![literal],
    }
}

fn from_terms(mut terms: Terms) -> Formula {
    match terms.len() {
        1 => from_term(terms.swap_remove(0)),
        _ => Formula::Or(terms.into_iter().map(from_term).collect()),
    }
}

fn from_term(mut literals: Vec<Formula>) -> Formula {
    match literals.len() {
        1 => literals.swap_remove(0),
        _ => Formula::And(literals),
    }
}

/// The terms of the disjunction of some formulas in DNF.
fn disjoin(dnfs: impl IntoIterator<Item = Formula>) -> Terms {
    dnfs.into_iter().flat_map(terms_of).collect()
}

/// The terms of the conjunction of some formulas in DNF, by distribution.
fn conjoin(dnfs: impl IntoIterator<Item = Formula>) -> Terms {
    let mut terms: Terms = vec![Vec::default()];

    for dnf in dnfs {
        // Any further distribution over no terms remains no terms.
        if terms.is_empty() {
            break;
        }

        let conjunct_terms = terms_of(dnf);
        let mut distributed = Vec::with_capacity(terms.len() * conjunct_terms.len());
        for term in &terms {
            for conjunct_term in &conjunct_terms {
                let mut merged = term.clone();
                merged.extend(conjunct_term.iter().cloned());
                distributed.push(merged);
            }
        }
        terms = distributed;
    }

    log::trace!(target: targets::DNF, "Distributed to {} terms", terms.len());
    terms
}

#[cfg(test)]
mod dnf_tests {
    use super::*;

    fn p() -> Formula {
        Formula::atom("p")
    }

    fn q() -> Formula {
        Formula::atom("q")
    }

    fn r() -> Formula {
        Formula::atom("r")
    }

    #[test]
    fn atom_is_own_dnf() {
        assert_eq!(p().to_dnf(), p());
        assert_eq!(p().negated_dnf(), !p());
    }

    #[test]
    fn double_negation() {
        assert_eq!((!!p()).to_dnf(), p());
        assert_eq!((!p()).negated_dnf(), p());
    }

    #[test]
    fn distribution() {
        let formula = p() & (q() | r());
        let expected = Formula::Or(vec![p() & q(), p() & r()]);
        assert_eq!(formula.to_dnf(), expected);
    }

    #[test]
    fn de_morgan() {
        let formula = !(p() | q());
        assert_eq!(formula.to_dnf(), !p() & !q());
    }

    #[test]
    fn implication() {
        assert_eq!(p().implies(q()).to_dnf(), !p() | q());
        assert_eq!(p().implies(q()).negated_dnf(), p() & !q());
    }

    #[test]
    fn equivalence() {
        let expected = Formula::Or(vec![p() & q(), !p() & !q()]);
        assert_eq!(p().iff(q()).to_dnf(), expected);
    }

    #[test]
    fn flattens_nested_disjunction() {
        let formula = p() | (q() | r());
        assert_eq!(formula.to_dnf(), Formula::Or(vec![p(), q(), r()]));
    }

    #[test]
    fn empty_connectives() {
        assert_eq!(Formula::And(vec![]).to_dnf(), Formula::And(vec![]));
        assert_eq!(Formula::Or(vec![]).to_dnf(), Formula::Or(vec![]));
        assert_eq!(Formula::And(vec![]).negated_dnf(), Formula::Or(vec![]));
        assert_eq!((p() & Formula::Or(vec![])).to_dnf(), Formula::Or(vec![]));
    }

    #[test]
    fn contradictions_are_kept() {
        assert_eq!((p() & !p()).to_dnf(), p() & !p());
    }

    #[test]
    fn dnf_predicate() {
        assert!(p().is_dnf());
        assert!((!p()).is_dnf());
        assert!((p() & !q()).is_dnf());
        assert!(((p() & !q()) | r()).is_dnf());
        assert!(!Formula::negate(!p()).is_dnf());
        assert!(!(p() & (q() | r())).is_dnf());
        assert!(!p().implies(q()).is_dnf());
    }
}
